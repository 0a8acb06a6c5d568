//! Validator contracts for formwork.
//!
//! A validator inspects one control and either passes — `Ok(None)`, the
//! distinguished "nothing" marker — or reports a non-empty map of named
//! errors. Applying a validator to a node kind it does not support is a
//! programming error and travels on the `Err` channel as
//! [`ValidatorError::InvalidArgument`], never inside a report.
//!
//! Synchronous validators are shared closures; asynchronous validators are
//! trait objects so implementations can hold state (an HTTP client, say).
//! Both receive the control they are attached to, re-reading its value at
//! validation time.

pub mod builtin;

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use formwork_types::{ValidationErrors, ValidatorError, Value};

use crate::control::Control;

/// What a validator produces: pass, a map of named errors, or a
/// validator-level failure.
pub type ValidatorResult = Result<Option<ValidationErrors>, ValidatorError>;

/// A synchronous validator. `Arc` so rebuilt trees share the closure.
pub type SyncValidator = Arc<dyn Fn(&Control) -> ValidatorResult + Send + Sync>;

/// Wrap a closure as a [`SyncValidator`].
pub fn sync<F>(f: F) -> SyncValidator
where
    F: Fn(&Control) -> ValidatorResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// An asynchronous validator.
///
/// Implementations own whatever they need (clients, caches) and must handle
/// their own transient failures; a [`ValidatorError::Failed`] result is
/// contained by the engine and contributes no error to the report.
#[async_trait]
pub trait AsyncValidator: Send + Sync {
    /// Validate `control`, deferring the outcome.
    async fn validate(&self, control: &Control) -> ValidatorResult;
}

/// A shared asynchronous validator, as stored on a control node.
pub type AsyncValidatorRef = Arc<dyn AsyncValidator>;

/// Closures returning boxed futures work as async validators directly.
///
/// The future cannot borrow the control, so clone what the validator needs
/// up front:
///
/// ```ignore
/// let taken = async_validator(|control: &Control| {
///     let value = control.value();
///     async move { /* look `value` up somewhere */ Ok(None) }.boxed()
/// });
/// ```
#[async_trait]
impl<F> AsyncValidator for F
where
    F: Fn(&Control) -> BoxFuture<'static, ValidatorResult> + Send + Sync,
{
    async fn validate(&self, control: &Control) -> ValidatorResult {
        (self)(control).await
    }
}

/// Wrap a boxed-future closure as an [`AsyncValidatorRef`].
pub fn async_validator<F>(f: F) -> AsyncValidatorRef
where
    F: Fn(&Control) -> BoxFuture<'static, ValidatorResult> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Read-only accessor to another part of a tree, for cross-field rules.
///
/// A validator that depends on a sibling or ancestor captures an accessor
/// at construction and resolves it at validation time — never a direct
/// reference into the tree, since construction can precede full-tree
/// assembly and trees are rebuilt by set/patch.
pub type ValueAccessor = Arc<dyn Fn() -> Value + Send + Sync>;
