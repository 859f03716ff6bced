use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `YYYY-MM-DD HH:MM:SS UTC`, the layout used in exports.
pub fn to_display(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
