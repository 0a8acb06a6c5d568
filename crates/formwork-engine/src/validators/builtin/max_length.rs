//! maxLength — upper bound on a field's length or a list's child count.

use std::sync::Arc;

use formwork_types::{ValidationErrors, ValidatorError};

use crate::control::Control;
use crate::validators::SyncValidator;

use super::length_of;

/// Fails with key `"maxLength"` when the length exceeds `max`.
///
/// On a field, length is the string's character count or the array's
/// element count; a field whose value has no length (`Null` included) has
/// nothing to exceed and passes. On a list, length is the child count.
/// Groups are a misapplication.
pub fn max_length(max: usize) -> SyncValidator {
    Arc::new(move |control: &Control| match control {
        Control::Field(field) => match length_of(&field.value) {
            Some(len) if len > max => Ok(Some(ValidationErrors::of(
                "maxLength",
                format!("must be at most {max} characters long, got {}", field.value),
            ))),
            _ => Ok(None),
        },
        Control::List(list) => {
            if list.len() > max {
                Ok(Some(ValidationErrors::of(
                    "maxLength",
                    format!("must have at most {max} elements, got {}", list.len()),
                )))
            } else {
                Ok(None)
            }
        }
        Control::Group(_) => Err(ValidatorError::InvalidArgument(
            "maxLength: expected a field or a list, got a group".into(),
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{field, group, list};
    use formwork_types::Value;
    use rstest::rstest;

    #[rstest]
    #[case("ab", 2, true)]
    #[case("abc", 2, false)]
    #[case("", 0, true)]
    fn string_lengths(#[case] value: &str, #[case] max: usize, #[case] passes: bool) {
        let result = max_length(max)(&field(value)).expect("not misapplied");
        assert_eq!(result.is_none(), passes, "{value:?} with max {max}");
    }

    #[test]
    fn null_has_nothing_to_exceed() {
        assert_eq!(max_length(0)(&field(Value::Null)), Ok(None));
    }

    #[test]
    fn list_child_count_is_the_length() {
        let one = list(vec![field("a")]);
        assert!(max_length(0)(&one)
            .expect("not misapplied")
            .expect("has errors")
            .contains("maxLength"));
        assert_eq!(max_length(1)(&one), Ok(None));
    }

    #[test]
    fn misapplied_to_a_group_is_an_argument_error() {
        let result = max_length(1)(&group(vec![("a", field(""))]));
        assert!(matches!(result, Err(ValidatorError::InvalidArgument(_))));
    }
}
