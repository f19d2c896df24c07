// Field rules for contact submissions.
// Lengths are UTF-16 code units, the same as a browser's String.length.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::models::ContactSubmission;

pub const NAME_MIN: usize = 1;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 5;
pub const MESSAGE_MAX: usize = 5000;

lazy_static! {
    // ASCII local part, dotted hostname, alphabetic TLD of 2+ letters.
    // The leading-dot and double-dot rules need lookahead, see is_valid_email.
    static ref EMAIL: Regex = Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    )
    .expect("email pattern compiles");
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payload does not match the contact schema: {0}")]
    Schema(String),

    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("email is not a valid address")]
    InvalidEmail,
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.encode_utf16().count();
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL.is_match(email)
}

impl ContactSubmission {
    // parsed JSON -> submission, any shape mismatch is a Schema error
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(|e| ValidationError::Schema(e.to_string()))
    }

    // first violation wins, in field order
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("name", &self.name, NAME_MIN, NAME_MAX)?;

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        check_length("email", &self.email, 0, EMAIL_MAX)?;

        check_length("message", &self.message, MESSAGE_MIN, MESSAGE_MAX)?;
        Ok(())
    }
}
