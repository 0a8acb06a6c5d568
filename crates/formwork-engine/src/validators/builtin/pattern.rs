//! pattern — a field's value must match a regular expression.

use std::sync::Arc;

use regex::Regex;

use formwork_types::{ValidationErrors, ValidatorError};

use crate::control::Control;
use crate::validators::SyncValidator;

/// Fails with key `"pattern"` when the field value's display form does not
/// match `regex`.
///
/// Non-string values are matched through their display form, so a numeric
/// field can be checked against `^\d+$`. Only fields are supported.
pub fn pattern(regex: Regex) -> SyncValidator {
    Arc::new(move |control: &Control| {
        let field = control.as_field().ok_or_else(|| {
            ValidatorError::InvalidArgument(format!(
                "pattern: expected a field, got a {}",
                control.kind()
            ))
        })?;

        let text = field.value.to_string();
        if regex.is_match(&text) {
            Ok(None)
        } else {
            Ok(Some(ValidationErrors::of(
                "pattern",
                format!("must match {regex}, got {text}"),
            )))
        }
    })
}
