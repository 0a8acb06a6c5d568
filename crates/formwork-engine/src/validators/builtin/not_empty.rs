//! notEmpty — fails when a field holds the empty string.

use std::sync::Arc;

use formwork_types::{ValidationErrors, ValidatorError, Value};

use crate::control::Control;
use crate::validators::SyncValidator;

/// Fails with key `"notEmpty"` when the field's value is `""`.
///
/// Only fields are supported; anything else is a misapplication.
pub fn not_empty() -> SyncValidator {
    Arc::new(|control: &Control| {
        let field = control.as_field().ok_or_else(|| {
            ValidatorError::InvalidArgument(format!(
                "notEmpty: expected a field, got a {}",
                control.kind()
            ))
        })?;

        if matches!(&field.value, Value::String(s) if s.is_empty()) {
            return Ok(Some(ValidationErrors::of(
                "notEmpty",
                "value cannot be empty",
            )));
        }

        Ok(None)
    })
}
