use std::sync::OnceLock;

use regex::Regex;

use crate::models::{FieldName, FormFields, ValidationError};

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

/// Check every field, producing one error per failing field. Within the
/// email field the presence check wins over the format check.
pub fn validate(fields: &FormFields) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if fields.card_detail.is_empty() {
        errors.push(ValidationError {
            field: FieldName::CardDetail,
            message: "Card Details are required".to_string(),
        });
    }
    if fields.name.is_empty() {
        errors.push(ValidationError {
            field: FieldName::Name,
            message: "Name is required".to_string(),
        });
    }
    if fields.email.is_empty() {
        errors.push(ValidationError {
            field: FieldName::Email,
            message: "Email is required".to_string(),
        });
    } else if !email_pattern().is_match(&fields.email) {
        errors.push(ValidationError {
            field: FieldName::Email,
            message: "Email should be in correct format".to_string(),
        });
    }
    errors
}
