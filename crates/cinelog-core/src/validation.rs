//! Input validation utilities.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::DomainError;

/// Validate email syntax.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.is_empty() {
        return Err(DomainError::Validation("Email is required".to_string()));
    }

    if email.len() > 254 {
        return Err(DomainError::Validation(
            "Email must be at most 254 characters long".to_string(),
        ));
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(DomainError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

/// Validate password against the signup policy: at least one
/// non-alphanumeric character.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.is_empty() {
        return Err(DomainError::Validation("Password is required".to_string()));
    }

    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err(DomainError::Validation(
            "Password must contain at least one special character".to_string(),
        ));
    }

    Ok(())
}

/// Normalize a date-of-birth string to a plain calendar date.
///
/// Accepts `YYYY-MM-DD` as well as ISO datetime strings, which are
/// truncated to their date part so no timezone arithmetic is applied.
pub fn parse_dob(value: &str) -> Result<NaiveDate, DomainError> {
    let date_part = value.split('T').next().unwrap_or(value);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| DomainError::Validation(format!("Invalid date of birth: {value}")))
}
