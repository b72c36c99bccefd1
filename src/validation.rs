//! Contact form validation
//!
//! Every field is checked independently and all violations are returned
//! together, so the form can display the complete error set in one
//! round trip. No network or storage side effects.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ContactForm, FieldError};

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 100;
pub const MIN_SUBJECT_CHARS: usize = 5;
pub const MAX_SUBJECT_CHARS: usize = 200;
pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MAX_MESSAGE_CHARS: usize = 10_000;
pub const MAX_EMAIL_CHARS: usize = 320;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex compiles")
});

/// Validate a raw contact form. Lengths are measured in characters on
/// the trimmed value.
pub fn validate_contact_form(form: &ContactForm) -> Result<(), Vec<FieldError>> {
    let mut violations = Vec::new();

    check_name(form.name.trim(), &mut violations);
    check_email(form.email.trim(), &mut violations);
    check_subject(form.subject.trim(), &mut violations);
    check_message(form.message.trim(), &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_name(name: &str, violations: &mut Vec<FieldError>) {
    if has_control_chars(name) {
        violations.push(FieldError::new("name", "must not contain control characters"));
    } else if name.chars().count() < MIN_NAME_CHARS {
        violations.push(FieldError::new(
            "name",
            format!("must be at least {MIN_NAME_CHARS} characters"),
        ));
    } else if name.chars().count() > MAX_NAME_CHARS {
        violations.push(FieldError::new(
            "name",
            format!("must not exceed {MAX_NAME_CHARS} characters"),
        ));
    }
}

fn check_email(email: &str, violations: &mut Vec<FieldError>) {
    if email.len() > MAX_EMAIL_CHARS {
        violations.push(FieldError::new(
            "email",
            format!("must not exceed {MAX_EMAIL_CHARS} characters"),
        ));
    } else if !EMAIL_RE.is_match(email) {
        violations.push(FieldError::new("email", "must be a valid email address"));
    }
}

fn check_subject(subject: &str, violations: &mut Vec<FieldError>) {
    if has_control_chars(subject) {
        violations.push(FieldError::new("subject", "must not contain control characters"));
    } else if subject.chars().count() < MIN_SUBJECT_CHARS {
        violations.push(FieldError::new(
            "subject",
            format!("must be at least {MIN_SUBJECT_CHARS} characters"),
        ));
    } else if subject.chars().count() > MAX_SUBJECT_CHARS {
        violations.push(FieldError::new(
            "subject",
            format!("must not exceed {MAX_SUBJECT_CHARS} characters"),
        ));
    }
}

fn check_message(message: &str, violations: &mut Vec<FieldError>) {
    let count = message.chars().count();
    if count < MIN_MESSAGE_CHARS {
        violations.push(FieldError::new(
            "message",
            format!("must be at least {MIN_MESSAGE_CHARS} characters"),
        ));
    } else if count > MAX_MESSAGE_CHARS {
        violations.push(FieldError::new(
            "message",
            format!("must not exceed {MAX_MESSAGE_CHARS} characters"),
        ));
    }
}

// Newlines are legitimate in a message body, so the control check only
// guards the single-line fields.
fn has_control_chars(value: &str) -> bool {
    value.chars().any(|c| c.is_control())
}
