//! fieldsMatch — two named children of a group must hold equal values.
//!
//! The classic password/confirm-password rule. Attached to the group, not
//! to either field: the rule spans both children, and node validators only
//! see the node they are attached to.

use std::sync::Arc;

use formwork_types::{ValidationErrors, ValidatorError, Value};

use crate::control::Control;
use crate::validators::SyncValidator;

/// Fails when the group children named `left` and `right` project different
/// values, keyed by the `right` name so consumers can render the error on
/// the confirming field.
///
/// A missing child projects `Null`, so a typo in a name reads as a mismatch
/// rather than a panic. Only groups are supported.
pub fn fields_match(left: &str, right: &str) -> SyncValidator {
    let left = left.to_string();
    let right = right.to_string();
    Arc::new(move |control: &Control| {
        let group = control.as_group().ok_or_else(|| {
            ValidatorError::InvalidArgument(format!(
                "fieldsMatch: expected a group, got a {}",
                control.kind()
            ))
        })?;

        let left_value = group.get(&left).map(Control::value).unwrap_or(Value::Null);
        let right_value = group.get(&right).map(Control::value).unwrap_or(Value::Null);

        if left_value != right_value {
            return Ok(Some(ValidationErrors::of(
                right.clone(),
                format!("{right} does not match {left}"),
            )));
        }

        Ok(None)
    })
}
