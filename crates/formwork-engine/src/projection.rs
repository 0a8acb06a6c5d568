//! Value projection: read a tree's value, rebuild it with set or patch.
//!
//! Reads and writes are structural mirrors. `value` unwraps the tree into
//! plain [`Value`] data; `set_value` and `patch_value` walk the same shape
//! in the other direction, producing a fresh tree whose nodes carry the old
//! tree's validators. Nothing is mutated in place.
//!
//! Set and patch differ only in what an absent slice means: set clears the
//! leaf to `Null`, patch keeps the existing value. A `Null` slice counts as
//! absent for patch, so partial updates can skip fields they do not name.

use formwork_types::Value;

use crate::control::{Control, ControlGroup, ControlList, Field};

impl Control {
    /// The tree's current value.
    ///
    /// Fields project their stored value; lists project an `Array` of child
    /// projections in index order; groups project an `Object` of
    /// `(name, projection)` entries in insertion order.
    pub fn value(&self) -> Value {
        match self {
            Control::Field(field) => field.value.clone(),
            Control::List(list) => {
                Value::Array(list.children.iter().map(Control::value).collect())
            }
            Control::Group(group) => Value::Object(
                group
                    .children
                    .iter()
                    .map(|(name, child)| (name.clone(), child.value()))
                    .collect(),
            ),
        }
    }

    /// Rebuild the tree with `value`, clearing leaves the value does not
    /// cover.
    ///
    /// Each child receives its slice of `value` — by index for lists, by
    /// key for groups. A missing slice (absent key, index out of range, or
    /// a value of the wrong shape altogether) clears that subtree's leaves
    /// to `Null`. Validators carry over unchanged at every node.
    pub fn set_value(&self, value: &Value) -> Control {
        match self {
            Control::Field(field) => Control::Field(Field {
                value: value.clone(),
                validators: field.validators.clone(),
                async_validators: field.async_validators.clone(),
            }),
            Control::List(old) => Control::List(ControlList {
                children: old
                    .children
                    .iter()
                    .enumerate()
                    .map(|(index, child)| {
                        child.set_value(value.index(index).unwrap_or(&Value::Null))
                    })
                    .collect(),
                validators: old.validators.clone(),
                async_validators: old.async_validators.clone(),
            }),
            Control::Group(old) => Control::Group(ControlGroup {
                children: old
                    .children
                    .iter()
                    .map(|(name, child)| {
                        let slice = value.get(name).unwrap_or(&Value::Null);
                        (name.clone(), child.set_value(slice))
                    })
                    .collect(),
                validators: old.validators.clone(),
                async_validators: old.async_validators.clone(),
            }),
        }
    }

    /// Rebuild the tree with `value`, keeping leaves the value does not
    /// cover.
    ///
    /// Like [`set_value`](Control::set_value), except an absent or `Null`
    /// slice preserves the existing leaf value instead of clearing it.
    pub fn patch_value(&self, value: &Value) -> Control {
        match self {
            Control::Field(field) => Control::Field(Field {
                value: if value.is_null() {
                    field.value.clone()
                } else {
                    value.clone()
                },
                validators: field.validators.clone(),
                async_validators: field.async_validators.clone(),
            }),
            Control::List(old) => Control::List(ControlList {
                children: old
                    .children
                    .iter()
                    .enumerate()
                    .map(|(index, child)| {
                        child.patch_value(value.index(index).unwrap_or(&Value::Null))
                    })
                    .collect(),
                validators: old.validators.clone(),
                async_validators: old.async_validators.clone(),
            }),
            Control::Group(old) => Control::Group(ControlGroup {
                children: old
                    .children
                    .iter()
                    .map(|(name, child)| {
                        let slice = value.get(name).unwrap_or(&Value::Null);
                        (name.clone(), child.patch_value(slice))
                    })
                    .collect(),
                validators: old.validators.clone(),
                async_validators: old.async_validators.clone(),
            }),
        }
    }
}
