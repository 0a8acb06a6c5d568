//! The validation report: one node's outcome, extended recursively with a
//! sub-report per child so the report tree mirrors the control tree.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::ValidationErrors;

/// Per-child sub-reports, keyed the way the node keys its children.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChildReports {
    /// A leaf report, or a `only_self` report that skipped descent.
    #[default]
    None,
    /// Sub-reports in child index order (list nodes).
    Indexed(Vec<ValidationReport>),
    /// Sub-reports in child insertion order (group nodes).
    Named(Vec<(String, ValidationReport)>),
}

impl ChildReports {
    /// Number of child reports.
    pub fn len(&self) -> usize {
        match self {
            ChildReports::None => 0,
            ChildReports::Indexed(reports) => reports.len(),
            ChildReports::Named(reports) => reports.len(),
        }
    }

    /// True if there are no child reports.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if every child report (if any) is valid.
    pub fn all_valid(&self) -> bool {
        match self {
            ChildReports::None => true,
            ChildReports::Indexed(reports) => reports.iter().all(|r| r.is_valid),
            ChildReports::Named(reports) => reports.iter().all(|(_, r)| r.is_valid),
        }
    }
}

/// The outcome of validating one node.
///
/// `errors` holds only the node's *own* failures; child failures live in the
/// per-child sub-reports and surface at this level solely through
/// `is_valid`, which is false if the node or any descendant failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    /// The node's own named errors.
    pub errors: ValidationErrors,
    /// True iff the node's own validators passed and every child report
    /// present is itself valid.
    pub is_valid: bool,
    /// One sub-report per child, for list and group nodes validated with
    /// descent.
    pub children: ChildReports,
}

impl ValidationReport {
    /// A passing report with no errors and no children.
    pub fn valid() -> Self {
        Self {
            errors: ValidationErrors::new(),
            is_valid: true,
            children: ChildReports::None,
        }
    }

    /// A childless report from a node's own outcome.
    pub fn from_errors(errors: ValidationErrors, is_valid: bool) -> Self {
        Self {
            errors,
            is_valid,
            children: ChildReports::None,
        }
    }

    /// Sub-report for a named child (group nodes).
    pub fn child(&self, name: &str) -> Option<&ValidationReport> {
        match &self.children {
            ChildReports::Named(reports) => reports
                .iter()
                .find(|(child_name, _)| child_name == name)
                .map(|(_, report)| report),
            _ => None,
        }
    }

    /// Sub-report for a positional child (list nodes).
    pub fn child_at(&self, index: usize) -> Option<&ValidationReport> {
        match &self.children {
            ChildReports::Indexed(reports) => reports.get(index),
            _ => None,
        }
    }

    /// The report as a `serde_json::Value` in the flattened wire shape.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Serializes to the flattened shape consumers render from:
///
/// ```json
/// { "errors": {"minLength": "..."}, "isValid": false, "password": { ... } }
/// ```
///
/// Child reports sit alongside `errors`/`isValid`, keyed by child name, with
/// list indices rendered as string keys. `errors` and `isValid` are reserved
/// keys in this projection only; a group child named `errors` would collide
/// here, while the typed form stays unambiguous.
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.children.len()))?;
        map.serialize_entry("errors", &self.errors)?;
        map.serialize_entry("isValid", &self.is_valid)?;
        match &self.children {
            ChildReports::None => {}
            ChildReports::Indexed(reports) => {
                for (index, report) in reports.iter().enumerate() {
                    map.serialize_entry(&index.to_string(), report)?;
                }
            }
            ChildReports::Named(reports) => {
                for (name, report) in reports {
                    map.serialize_entry(name, report)?;
                }
            }
        }
        map.end()
    }
}
