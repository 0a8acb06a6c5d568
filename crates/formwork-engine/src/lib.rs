//! formwork-engine: the core of formwork.
//!
//! This crate provides:
//!
//! - **Control tree**: field, list, and group nodes composed bottom-up
//! - **Projection**: read a tree's value; rebuild it with set or patch
//! - **Validation**: the recursive async engine producing tree-shaped reports
//! - **Built-in validators**: not_empty, min_length, pattern, and friends
//!
//! The engine holds no state between calls: every validation re-reads the
//! tree's current values, and every set/patch produces a fresh tree that
//! carries the old tree's validators.

pub mod control;
pub mod projection;
pub mod validate;
pub mod validators;

pub use control::{field, group, list, Control, ControlGroup, ControlKind, ControlList, Field};
pub use validate::{validate, validate_field, validate_group, validate_list};
pub use validators::{
    AsyncValidator, AsyncValidatorRef, SyncValidator, ValidatorResult, ValueAccessor,
};

// The data types reports and validators are built from.
pub use formwork_types::{
    ChildReports, ValidationError, ValidationErrors, ValidationReport, ValidatorError, Value,
};
