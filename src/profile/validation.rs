use lazy_static::lazy_static;
use regex::Regex;

use crate::error::FieldError;
use crate::profile::dto::ProfileRequest;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Checks every field so the client sees all violations at once.
pub(crate) fn validate_registration(req: &ProfileRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if req.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Name should not be empty".into(),
        });
    }

    let email = req.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email should not be empty".into(),
        });
    } else if !is_valid_email(email) {
        errors.push(FieldError {
            field: "email",
            message: "Enter valid Email".into(),
        });
    }

    if req.password.chars().count() < 6 {
        errors.push(FieldError {
            field: "password",
            message: "Password must be atleast 6 characters".into(),
        });
    }

    errors
}
