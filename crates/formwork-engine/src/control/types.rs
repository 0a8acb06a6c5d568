//! Node type definitions for the control tree.
//!
//! A form is a tree of [`Control`] nodes: a [`Field`] holds one opaque
//! value, a [`ControlList`] holds ordered children, a [`ControlGroup`]
//! holds named children. Each node carries its *own* validator lists —
//! validators attached to a group run against the group as a whole and
//! never against its children.
//!
//! The kind is an explicit enum discriminant, so exactly one of the
//! structural predicates holds for any node by construction. Children are
//! exclusively owned by their parent; cross-field rules reach siblings
//! through accessor closures, not through links in the tree.

use std::fmt;

use formwork_types::Value;

use crate::validators::{AsyncValidatorRef, SyncValidator};

/// The three node kinds, for diagnostics and dispatch messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Field,
    List,
    Group,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Field => write!(f, "field"),
            ControlKind::List => write!(f, "list"),
            ControlKind::Group => write!(f, "group"),
        }
    }
}

/// A leaf node: one opaque value, no children.
///
/// The engine never inspects the value; only validators do. Consumers write
/// user input straight into `value` and call validation on demand.
#[derive(Clone, Default)]
pub struct Field {
    /// Current value. `Value::Null` is the cleared state.
    pub value: Value,
    /// Synchronous validators, run in order against this node.
    pub validators: Vec<SyncValidator>,
    /// Asynchronous validators, launched together against this node.
    pub async_validators: Vec<AsyncValidatorRef>,
}

impl Field {
    /// Create a field holding `value`, with no validators.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            validators: Vec::new(),
            async_validators: Vec::new(),
        }
    }
}

/// An ordered sequence of child controls, addressed by position.
#[derive(Clone, Default)]
pub struct ControlList {
    /// Children in index order. Report keys are the indices.
    pub children: Vec<Control>,
    /// Synchronous validators for the list as a whole.
    pub validators: Vec<SyncValidator>,
    /// Asynchronous validators for the list as a whole.
    pub async_validators: Vec<AsyncValidatorRef>,
}

impl ControlList {
    /// Create a list over `children`, with no validators of its own.
    pub fn new(children: Vec<Control>) -> Self {
        Self {
            children,
            validators: Vec::new(),
            async_validators: Vec::new(),
        }
    }

    /// Child at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Control> {
        self.children.get(index)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the list has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A named mapping of child controls, in insertion order.
///
/// Insertion order is what enumeration, projection, and reports follow, so
/// output ordering is stable. Lookup scans the entries; forms are small.
#[derive(Clone, Default)]
pub struct ControlGroup {
    /// `(name, child)` entries in insertion order.
    pub children: Vec<(String, Control)>,
    /// Synchronous validators for the group as a whole.
    pub validators: Vec<SyncValidator>,
    /// Asynchronous validators for the group as a whole.
    pub async_validators: Vec<AsyncValidatorRef>,
}

impl ControlGroup {
    /// Create a group over named `children`, with no validators of its own.
    pub fn new(children: Vec<(String, Control)>) -> Self {
        Self {
            children,
            validators: Vec::new(),
            async_validators: Vec::new(),
        }
    }

    /// Child under `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Control> {
        self.children
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, child)| child)
    }

    /// Mutable child under `name`, if present.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.children
            .iter_mut()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, child)| child)
    }

    /// Child names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node in a form tree: exactly one of field, list, or group.
#[derive(Clone)]
pub enum Control {
    Field(Field),
    List(ControlList),
    Group(ControlGroup),
}

impl Control {
    /// The node's kind.
    pub fn kind(&self) -> ControlKind {
        match self {
            Control::Field(_) => ControlKind::Field,
            Control::List(_) => ControlKind::List,
            Control::Group(_) => ControlKind::Group,
        }
    }

    /// True if this node is a field.
    pub fn is_field(&self) -> bool {
        matches!(self, Control::Field(_))
    }

    /// True if this node is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Control::List(_))
    }

    /// True if this node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Control::Group(_))
    }

    /// Narrow to the field, if this is one.
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Control::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Narrow to the list, if this is one.
    pub fn as_list(&self) -> Option<&ControlList> {
        match self {
            Control::List(list) => Some(list),
            _ => None,
        }
    }

    /// Narrow to the group, if this is one.
    pub fn as_group(&self) -> Option<&ControlGroup> {
        match self {
            Control::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Mutable narrowing to the field.
    pub fn as_field_mut(&mut self) -> Option<&mut Field> {
        match self {
            Control::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Mutable narrowing to the list.
    pub fn as_list_mut(&mut self) -> Option<&mut ControlList> {
        match self {
            Control::List(list) => Some(list),
            _ => None,
        }
    }

    /// Mutable narrowing to the group.
    pub fn as_group_mut(&mut self) -> Option<&mut ControlGroup> {
        match self {
            Control::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Attach synchronous validators to this node's own slot.
    pub fn with_validators(mut self, validators: Vec<SyncValidator>) -> Self {
        match &mut self {
            Control::Field(field) => field.validators = validators,
            Control::List(list) => list.validators = validators,
            Control::Group(group) => group.validators = validators,
        }
        self
    }

    /// Attach asynchronous validators to this node's own slot.
    pub fn with_async_validators(mut self, validators: Vec<AsyncValidatorRef>) -> Self {
        match &mut self {
            Control::Field(field) => field.async_validators = validators,
            Control::List(list) => list.async_validators = validators,
            Control::Group(group) => group.async_validators = validators,
        }
        self
    }

    /// This node's own synchronous validators.
    pub fn validators(&self) -> &[SyncValidator] {
        match self {
            Control::Field(field) => &field.validators,
            Control::List(list) => &list.validators,
            Control::Group(group) => &group.validators,
        }
    }

    /// This node's own asynchronous validators.
    pub fn async_validators(&self) -> &[AsyncValidatorRef] {
        match self {
            Control::Field(field) => &field.async_validators,
            Control::List(list) => &list.async_validators,
            Control::Group(group) => &group.async_validators,
        }
    }
}

/// Create a field control holding `value`.
pub fn field(value: impl Into<Value>) -> Control {
    Control::Field(Field::new(value))
}

/// Create a list control over `children`.
pub fn list(children: Vec<Control>) -> Control {
    Control::List(ControlList::new(children))
}

/// Create a group control over named `children`, keeping their order.
pub fn group<K: Into<String>>(children: impl IntoIterator<Item = (K, Control)>) -> Control {
    Control::Group(ControlGroup::new(
        children
            .into_iter()
            .map(|(name, child)| (name.into(), child))
            .collect(),
    ))
}

// Validator closures have no useful Debug form; print their counts.

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .field("validators", &self.validators.len())
            .field("async_validators", &self.async_validators.len())
            .finish()
    }
}

impl fmt::Debug for ControlList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlList")
            .field("children", &self.children)
            .field("validators", &self.validators.len())
            .field("async_validators", &self.async_validators.len())
            .finish()
    }
}

impl fmt::Debug for ControlGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlGroup")
            .field("children", &self.children)
            .field("validators", &self.validators.len())
            .field("async_validators", &self.async_validators.len())
            .finish()
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Field(inner) => inner.fmt(f),
            Control::List(inner) => inner.fmt(f),
            Control::Group(inner) => inner.fmt(f),
        }
    }
}
