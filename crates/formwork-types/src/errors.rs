//! The validation error taxonomy.
//!
//! Two channels, kept deliberately separate:
//!
//! - [`ValidationError`] values inside a [`ValidationErrors`] map describe
//!   *why input failed*. They are data, carried in reports, never raised.
//! - [`ValidatorError`] describes *a validator going wrong*: applied to a
//!   node kind it does not support, or an async computation falling over.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// A single named validation failure, carried in a report's error map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A validator misbehaving, as opposed to input failing validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// The validator was applied to a node kind it does not support
    /// (a length rule on a group, say). A programming error: the engine
    /// propagates it to the caller instead of folding it into a report.
    #[error("validator not applicable: {0}")]
    InvalidArgument(String),

    /// An async validator's underlying computation failed. The engine
    /// swallows this, logs it, and treats the validator as having
    /// contributed no error.
    #[error("async validator failed: {0}")]
    Failed(String),
}

/// Named map of validation failures for one node.
///
/// Keys are error names (`"minLength"`, `"notEmpty"`, ...). Inserting under
/// an existing key replaces the previous entry — last write wins, both
/// within one validator's map and when merging maps across validators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, ValidationError>);

impl ValidationErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single named error.
    pub fn of(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(name, ValidationError::new(message));
        errors
    }

    /// Insert an error under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, error: ValidationError) {
        self.0.insert(name.into(), error);
    }

    /// Merge another map into this one. Entries from `other` replace
    /// same-named entries already present.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// Look up an error by name.
    pub fn get(&self, name: &str) -> Option<&ValidationError> {
        self.0.get(name)
    }

    /// True if a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// True if no errors are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of named errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, error)` entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (String, ValidationError);
    type IntoIter = std::collections::btree_map::IntoIter<String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, ValidationError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (String, ValidationError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serializes as `{name: message}`, the shape report consumers parse.
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, error) in &self.0 {
            map.serialize_entry(name, &error.message)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_last_write_wins() {
        let mut errors = ValidationErrors::new();
        errors.insert("x", ValidationError::new("first"));
        errors.insert("x", ValidationError::new("second"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("x"), Some(&ValidationError::new("second")));
    }

    #[test]
    fn merge_overwrites_same_named_entries() {
        let mut base = ValidationErrors::of("x", "old");
        base.insert("keep", ValidationError::new("kept"));
        base.merge(ValidationErrors::of("x", "new"));
        assert_eq!(base.get("x"), Some(&ValidationError::new("new")));
        assert!(base.contains("keep"));
    }

    #[test]
    fn display_is_the_message() {
        let error = ValidationError::new("value cannot be empty");
        assert_eq!(error.to_string(), "value cannot be empty");
    }

    #[test]
    fn serializes_as_name_to_message_map() {
        let mut errors = ValidationErrors::of("minLength", "too short");
        errors.insert("notEmpty", ValidationError::new("empty"));
        let json = serde_json::to_value(&errors).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({"minLength": "too short", "notEmpty": "empty"})
        );
    }
}
