//! Per-step field validation — pure functions, no I/O.
//!
//! Validation only ever inspects the *current* step's fields: advancing is
//! blocked by the active step, never by past or future ones.

use std::sync::LazyLock;

use regex::Regex;

use super::registry::{self, FieldId, StepId};
use super::state::{AnswerSet, ErrorMap};

/// The site's email shape: `local@domain.tld`, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

fn answer<'a>(answers: &'a AnswerSet, field: FieldId) -> &'a str {
    answers.get(&field).map(String::as_str).unwrap_or("")
}

/// Whether `value` parses as a plausible email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate the given step against the accumulated answers.
///
/// Returns an empty map when the step may be advanced past. Optional fields
/// (company, project details) never produce errors.
pub fn validate_step(step: StepId, answers: &AnswerSet) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match step {
        StepId::Contact => {
            if answer(answers, FieldId::FirstName).trim().is_empty() {
                errors.insert(FieldId::FirstName, "First name is required".to_string());
            }
            if answer(answers, FieldId::LastName).trim().is_empty() {
                errors.insert(FieldId::LastName, "Last name is required".to_string());
            }
            let email = answer(answers, FieldId::Email).trim();
            if email.is_empty() {
                errors.insert(FieldId::Email, "Email is required".to_string());
            } else if !is_valid_email(email) {
                errors.insert(FieldId::Email, "Invalid email".to_string());
            }
            if answer(answers, FieldId::Phone).trim().is_empty() {
                errors.insert(FieldId::Phone, "Phone is required".to_string());
            }
        }
        _ => {
            // Selection steps: the stored value must be one of the step's
            // enumerated options.
            if let Some(field) = registry::selection_field(step) {
                let value = answer(answers, field);
                let known = registry::options_for(step)
                    .map(|options| options.iter().any(|o| o.value == value))
                    .unwrap_or(false);
                if value.is_empty() || !known {
                    errors.insert(field, "Please select an option".to_string());
                }
            }
        }
    }

    errors
}
