//! notNull — fails when a field holds no value at all.

use std::sync::Arc;

use formwork_types::{ValidationErrors, ValidatorError};

use crate::control::Control;
use crate::validators::SyncValidator;

/// Fails with key `"notNull"` when the field's value is `Null`.
pub fn not_null() -> SyncValidator {
    Arc::new(|control: &Control| {
        let field = control.as_field().ok_or_else(|| {
            ValidatorError::InvalidArgument(format!(
                "notNull: expected a field, got a {}",
                control.kind()
            ))
        })?;

        if field.value.is_null() {
            return Ok(Some(ValidationErrors::of("notNull", "value is required")));
        }

        Ok(None)
    })
}
