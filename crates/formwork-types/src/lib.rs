//! formwork-types: pure data types for formwork.
//!
//! This crate provides:
//!
//! - **Value**: the dynamically-typed value a form field holds
//! - **Errors**: the validation error taxonomy and the named error map
//! - **Reports**: the recursive validation report and its JSON projection
//!
//! No engine logic lives here — the control tree and the validation
//! algorithm are in `formwork-engine`.

pub mod errors;
pub mod report;
pub mod value;

pub use errors::{ValidationError, ValidationErrors, ValidatorError};
pub use report::{ChildReports, ValidationReport};
pub use value::Value;
