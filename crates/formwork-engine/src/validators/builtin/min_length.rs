//! minLength — lower bound on a field's length or a list's child count.

use std::sync::Arc;

use formwork_types::{ValidationErrors, ValidatorError};

use crate::control::Control;
use crate::validators::SyncValidator;

use super::length_of;

/// Fails with key `"minLength"` when the length is below `min`.
///
/// On a field, length is the string's character count or the array's
/// element count; a field whose value has no length (`Null` included)
/// cannot meet a minimum and fails. On a list, length is the child count.
/// Groups are a misapplication.
pub fn min_length(min: usize) -> SyncValidator {
    Arc::new(move |control: &Control| match control {
        Control::Field(field) => match length_of(&field.value) {
            Some(len) if len >= min => Ok(None),
            _ => Ok(Some(ValidationErrors::of(
                "minLength",
                format!(
                    "must be at least {min} characters long, got {}",
                    field.value
                ),
            ))),
        },
        Control::List(list) => {
            if list.len() >= min {
                Ok(None)
            } else {
                Ok(Some(ValidationErrors::of(
                    "minLength",
                    format!("must have at least {min} elements, got {}", list.len()),
                )))
            }
        }
        Control::Group(_) => Err(ValidatorError::InvalidArgument(
            "minLength: expected a field or a list, got a group".into(),
        )),
    })
}
