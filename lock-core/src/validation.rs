//! Input validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,64}$")
        .expect("email pattern compiles")
});

/// Trim and validate an email address, returning the trimmed value.
pub fn validate_email(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
