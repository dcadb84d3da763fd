//! Form validation primitives
//!
//! Field-level checks shared by the contact and widget forms. Validation
//! never raises; each form collects a field-name to message map and an
//! empty map signals success.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Mapping of field name to user-facing error message
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Minimum length for contact message bodies
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Check that a required text field is non-empty after trimming
pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", label));
    }
}

/// Check a basic email pattern; the field must already be non-empty
pub fn require_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "Email is required".to_string());
    } else if !EMAIL_RE.is_match(value.trim()) {
        errors.insert(field, "Please enter a valid email address".to_string());
    }
}

/// Check a minimum trimmed length, on top of the required check
pub fn require_min_len(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    label: &str,
    min: usize,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, format!("{} is required", label));
    } else if trimmed.len() < min {
        errors.insert(field, format!("{} must be at least {} characters long", label, min));
    }
}

/// Parse a non-negative decimal amount, recording an error on failure
pub fn parse_amount(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, "Amount is required".to_string());
        return None;
    }
    match trimmed.parse::<Decimal>() {
        Ok(amount) if amount >= Decimal::ZERO => Some(amount),
        Ok(_) => {
            errors.insert(field, "Amount must not be negative".to_string());
            None
        }
        Err(_) => {
            errors.insert(field, "Amount must be a valid number".to_string());
            None
        }
    }
}

/// Render field errors one per line, for inline display under a form
pub fn format_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field, message))
        .collect::<Vec<_>>()
        .join("\n")
}
