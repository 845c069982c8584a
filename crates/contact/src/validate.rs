//! Field validation rules. Pure, deterministic, no I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::FieldValidation;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Name is valid from two characters on. Raw length, no trimming.
pub fn name(value: &str) -> FieldValidation {
    if value.chars().count() >= 2 {
        FieldValidation::valid("Valid name format")
    } else {
        FieldValidation::invalid("Name must be at least 2 characters")
    }
}

/// Local part, `@`, domain, `.`, tld — each one-or-more non-space/non-`@` chars.
pub fn email(value: &str) -> FieldValidation {
    if EMAIL_RE.is_match(value) {
        FieldValidation::valid("Valid email format")
    } else {
        FieldValidation::invalid("Invalid email format")
    }
}

pub fn message(value: &str) -> FieldValidation {
    if value.chars().count() >= 10 {
        FieldValidation::valid("Message length sufficient")
    } else {
        FieldValidation::invalid("Message must be at least 10 characters")
    }
}
