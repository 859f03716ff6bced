use crate::error::Result;
use crate::models::application::Application;
use crate::models::job::Job;
use crate::utils::time;
use chrono::NaiveDate;
use rust_xlsxwriter::*;
use std::fs;
use std::path::{Path, PathBuf};

const BOM: &str = "\u{FEFF}";

pub const APPLICATIONS_EXPORT: &str = "job_applications";
pub const JOBS_EXPORT: &str = "job_postings";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Joined with `; ` and always quoted in CSV.
    List(Vec<String>),
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl Cell {
    fn display(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::List(items) => items.join("; "),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportTable {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
    pub status_column: Option<usize>,
}

pub struct ExportService;

impl ExportService {
    pub fn applications_table(applications: &[Application]) -> ExportTable {
        let rows = applications
            .iter()
            .map(|app| {
                vec![
                    Cell::from(app.id.to_string()),
                    Cell::from(app.applicant_name.as_str()),
                    Cell::from(app.email.as_str()),
                    Cell::from(app.phone.as_str()),
                    Cell::from(app.job_title.as_str()),
                    Cell::from(app.company.as_str()),
                    Cell::from(app.experience.as_str()),
                    Cell::from(app.status.as_str()),
                    Cell::from(time::to_display(app.submitted_at)),
                    Cell::from(app.portfolio_url.as_deref().unwrap_or("N/A")),
                ]
            })
            .collect();

        ExportTable {
            title: "Job Applications",
            headers: vec![
                "Application ID",
                "Applicant Name",
                "Email",
                "Phone",
                "Job Title",
                "Company",
                "Experience",
                "Status",
                "Applied Date",
                "Portfolio URL",
            ],
            rows,
            status_column: Some(7),
        }
    }

    pub fn jobs_table(jobs: &[Job]) -> ExportTable {
        let rows = jobs
            .iter()
            .map(|job| {
                vec![
                    Cell::from(job.id.to_string()),
                    Cell::from(job.title.as_str()),
                    Cell::from(job.company.as_str()),
                    Cell::from(job.location.as_str()),
                    Cell::from(job.job_type.as_str()),
                    Cell::from(job.salary.as_str()),
                    Cell::from(job.status.as_str()),
                    Cell::from(job.posted_date.to_string()),
                    Cell::from(job.deadline.to_string()),
                    Cell::List(job.requirements.clone()),
                    Cell::List(job.benefits.clone()),
                ]
            })
            .collect();

        ExportTable {
            title: "Job Postings",
            headers: vec![
                "Job ID",
                "Title",
                "Company",
                "Location",
                "Type",
                "Salary",
                "Status",
                "Posted Date",
                "Deadline",
                "Requirements",
                "Benefits",
            ],
            rows,
            status_column: Some(6),
        }
    }

    pub fn escape_csv(cell: &Cell) -> String {
        match cell {
            Cell::List(_) => format!("\"{}\"", cell.display().replace('"', "\"\"")),
            Cell::Text(text) => {
                if text.contains(',') || text.contains('"') || text.contains('\n') {
                    format!("\"{}\"", text.replace('"', "\"\""))
                } else {
                    text.clone()
                }
            }
        }
    }

    /// Header row plus one line per record, `\n` separated, without BOM.
    pub fn to_csv(table: &ExportTable) -> String {
        let header = table
            .headers
            .iter()
            .map(|h| Self::escape_csv(&Cell::from(*h)))
            .collect::<Vec<_>>()
            .join(",");

        let mut lines = Vec::with_capacity(table.rows.len() + 1);
        lines.push(header);
        for row in &table.rows {
            lines.push(
                row.iter()
                    .map(Self::escape_csv)
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        lines.join("\n")
    }

    pub fn file_name(base: &str, date: NaiveDate, extension: &str) -> String {
        format!("{}_{}.{}", base, date.format("%Y-%m-%d"), extension)
    }

    /// Writes the table as BOM-prefixed UTF-8 CSV into `dir`.
    pub fn write_csv(dir: &Path, base: &str, table: &ExportTable) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::file_name(base, time::today(), "csv"));
        fs::write(&path, format!("{}{}", BOM, Self::to_csv(table)))?;
        tracing::info!(path = %path.display(), records = table.rows.len(), "CSV export written");
        Ok(path)
    }

    pub fn write_xlsx(dir: &Path, base: &str, table: &ExportTable) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::file_name(base, time::today(), "xlsx"));
        fs::write(&path, Self::to_xlsx(table)?)?;
        tracing::info!(path = %path.display(), records = table.rows.len(), "XLSX export written");
        Ok(path)
    }

    fn status_color(status: &str) -> Color {
        match status {
            "pending" | "draft" => Color::RGB(0xF59E0B),
            "reviewed" => Color::RGB(0x3B82F6),
            "accepted" | "active" => Color::RGB(0x10B981),
            "rejected" | "closed" => Color::RGB(0xEF4444),
            _ => Color::RGB(0x64748B),
        }
    }

    /// Styled workbook: title banner, frozen header row, zebra rows, coloured status cells.
    pub fn to_xlsx(table: &ExportTable) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.title)?;

        let primary_color = Color::RGB(0x1E293B);
        let header_bg = Color::RGB(0x0F172A);
        let alt_row_1 = Color::RGB(0xF8FAFC);
        let alt_row_2 = Color::White;
        let border_color = Color::RGB(0xE2E8F0);
        let last_col = (table.headers.len().max(1) - 1) as u16;

        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        worksheet.set_row_height(0, 36)?;
        worksheet.merge_range(0, 0, 0, last_col, table.title, &title_format)?;

        let subtitle_format = Format::new()
            .set_font_size(10)
            .set_italic()
            .set_font_color(Color::RGB(0x94A3B8))
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross);
        let subtitle = format!(
            "Exported: {}  •  Records: {}",
            time::to_display(time::now()),
            table.rows.len()
        );
        worksheet.merge_range(1, 0, 1, last_col, &subtitle, &subtitle_format)?;

        let header_format = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(Color::White)
            .set_background_color(header_bg)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        let header_row = 2;
        worksheet.set_row_height(header_row, 28)?;
        for (col, name) in table.headers.iter().enumerate() {
            worksheet.set_column_width(col as u16, 22)?;
            worksheet.write_string_with_format(header_row, col as u16, *name, &header_format)?;
        }

        let data_start_row = header_row + 1;
        for (idx, row) in table.rows.iter().enumerate() {
            let row_num = data_start_row + idx as u32;
            let bg = if idx % 2 == 0 { alt_row_1 } else { alt_row_2 };
            let base_fmt = Format::new()
                .set_font_size(10)
                .set_background_color(bg)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);

            for (col, cell) in row.iter().enumerate() {
                let text = cell.display();
                if table.status_column == Some(col) {
                    let status_fmt = Format::new()
                        .set_font_size(10)
                        .set_bold()
                        .set_font_color(Color::White)
                        .set_background_color(Self::status_color(&text))
                        .set_align(FormatAlign::Center)
                        .set_border(FormatBorder::Thin)
                        .set_border_color(border_color);
                    worksheet.write_string_with_format(row_num, col as u16, &text, &status_fmt)?;
                } else {
                    worksheet.write_string_with_format(row_num, col as u16, &text, &base_fmt)?;
                }
            }
        }

        worksheet.set_freeze_panes(data_start_row, 0)?;
        let last_row = (data_start_row + table.rows.len() as u32).saturating_sub(1).max(header_row);
        worksheet.autofilter(header_row, 0, last_row, last_col)?;

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}
