use std::borrow::Cow;

use validator::ValidationError;

use crate::models::ResumeFile;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_RESUME_SIZE: u64 = 5 * 1024 * 1024;
pub const CONSUMER_MAIL_DOMAIN: &str = "gmail.com";

pub const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = split_address(email) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Addresses at the consumer mail domain only. Case-insensitive.
pub fn is_consumer_email(email: &str) -> bool {
    match split_address(email) {
        Some((local, domain)) => {
            !local.is_empty() && domain.eq_ignore_ascii_case(CONSUMER_MAIL_DOMAIN)
        }
        None => false,
    }
}

fn split_address(email: &str) -> Option<(&str, &str)> {
    if email.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = email.split_once('@')?;
    if domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

/// Optional `+`, a leading digit 1-9, then up to 15 more digits. Spaces,
/// dashes and parentheses are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    let rest = digits.strip_prefix('+').unwrap_or(&digits);
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }
    let tail: Vec<char> = chars.collect();
    tail.len() <= 15 && tail.iter().all(|c| c.is_ascii_digit())
}

pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

pub fn check_resume_file(content_type: &str, size: u64) -> Result<(), &'static str> {
    if !ALLOWED_RESUME_TYPES.contains(&content_type) {
        return Err("Please upload a PDF or Word document");
    }
    if size > MAX_RESUME_SIZE {
        return Err("File size must be less than 5MB");
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "This field is required"));
    }
    Ok(())
}

pub fn email_shape(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Email is required"));
    }
    if !is_valid_email(value) {
        return Err(field_error("email", "Please enter a valid email"));
    }
    Ok(())
}

pub fn phone_shape(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "Phone number is required"));
    }
    if !is_valid_phone(value) {
        return Err(field_error("phone", "Please enter a valid phone number"));
    }
    Ok(())
}

pub fn url_shape(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && !is_valid_url(value) {
        return Err(field_error("url", "Please enter a valid URL"));
    }
    Ok(())
}

pub fn valid_resume_file(file: &ResumeFile) -> Result<(), ValidationError> {
    check_resume_file(&file.content_type, file.size).map_err(|msg| field_error("resume", msg))
}

pub fn has_non_blank_entry(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(field_error("required", "At least one entry is needed"));
    }
    Ok(())
}
