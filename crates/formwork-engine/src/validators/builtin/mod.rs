//! Built-in validators for formwork.
//!
//! Stock rules covering the common cases; anything beyond these is a
//! user-supplied closure or [`AsyncValidator`](crate::validators::AsyncValidator)
//! implementation. Error keys are camelCase (`"notEmpty"`, `"minLength"`,
//! ...) to match what report consumers render.

mod fields_match;
mod max_length;
mod min_length;
mod not_empty;
mod not_null;
mod pattern;

pub use fields_match::fields_match;
pub use max_length::max_length;
pub use min_length::min_length;
pub use not_empty::not_empty;
pub use not_null::not_null;
pub use pattern::pattern;

use formwork_types::Value;

/// Length of a value, where one is defined: character count for strings,
/// element count for arrays. `None` for everything else, `Null` included.
pub(super) fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}
