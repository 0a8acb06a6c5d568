//! The validation engine.
//!
//! Each entry point is a pure function of the tree's current values and
//! validator lists at call time — no dirty/clean state is cached between
//! calls. Within one node, async validators fan out together and are joined
//! before results merge; across children, validation is strictly sequential
//! in child order so reports compose deterministically.
//!
//! Merge policy at every node: sync validators in list order first, then
//! async validators in list order, last write wins per error key — an async
//! error overwrites a same-keyed sync error, never the reverse.
//!
//! Containment policy: an async validator failing with
//! [`ValidatorError::Failed`] contributes no error and is logged, so one
//! misbehaving validator cannot abort validation of the whole tree.
//! [`ValidatorError::InvalidArgument`] is a programming error and always
//! propagates.

use futures::future::join_all;

use formwork_types::{ChildReports, ValidationErrors, ValidationReport, ValidatorError};

use crate::control::Control;

/// Validate a control and its whole subtree, dispatching on the node kind.
pub async fn validate(control: &Control) -> Result<ValidationReport, ValidatorError> {
    tracing::debug!(kind = %control.kind(), "validating control");
    match control {
        Control::Field(_) => validate_field(control).await,
        Control::List(_) => validate_list(control, false).await,
        Control::Group(_) => validate_group(control, false).await,
    }
}

/// Validate a field: its own validators, no children to descend into.
pub async fn validate_field(control: &Control) -> Result<ValidationReport, ValidatorError> {
    if !control.is_field() {
        return Err(ValidatorError::InvalidArgument(format!(
            "validate_field: expected a field, got a {}",
            control.kind()
        )));
    }
    let (errors, is_valid) = run_own_validators(control).await?;
    Ok(ValidationReport::from_errors(errors, is_valid))
}

/// Validate a list: its own validators, then — unless `only_self` — every
/// child in index order, each fully awaited before the next.
pub async fn validate_list(
    control: &Control,
    only_self: bool,
) -> Result<ValidationReport, ValidatorError> {
    let list = control.as_list().ok_or_else(|| {
        ValidatorError::InvalidArgument(format!(
            "validate_list: expected a list, got a {}",
            control.kind()
        ))
    })?;

    let (errors, own_valid) = run_own_validators(control).await?;
    if only_self {
        return Ok(ValidationReport::from_errors(errors, own_valid));
    }

    let mut reports = Vec::with_capacity(list.children.len());
    let mut is_valid = own_valid;
    for child in &list.children {
        let report = Box::pin(validate(child)).await?;
        is_valid &= report.is_valid;
        reports.push(report);
    }

    Ok(ValidationReport {
        errors,
        is_valid,
        children: ChildReports::Indexed(reports),
    })
}

/// Validate a group: its own validators, then — unless `only_self` — every
/// child in insertion order, each fully awaited before the next.
pub async fn validate_group(
    control: &Control,
    only_self: bool,
) -> Result<ValidationReport, ValidatorError> {
    let group = control.as_group().ok_or_else(|| {
        ValidatorError::InvalidArgument(format!(
            "validate_group: expected a group, got a {}",
            control.kind()
        ))
    })?;

    let (errors, own_valid) = run_own_validators(control).await?;
    if only_self {
        return Ok(ValidationReport::from_errors(errors, own_valid));
    }

    let mut reports = Vec::with_capacity(group.children.len());
    let mut is_valid = own_valid;
    for (name, child) in &group.children {
        let report = Box::pin(validate(child)).await?;
        is_valid &= report.is_valid;
        reports.push((name.clone(), report));
    }

    Ok(ValidationReport {
        errors,
        is_valid,
        children: ChildReports::Named(reports),
    })
}

/// Run one node's own validators: async fan-out/fan-in plus the sequential
/// sync pass, merged sync-first so async errors win key collisions.
///
/// A validator returning `Ok(Some(map))` marks the node invalid even when
/// the map is empty — the `None` marker, not map emptiness, is the no-error
/// signal.
async fn run_own_validators(
    control: &Control,
) -> Result<(ValidationErrors, bool), ValidatorError> {
    let async_phase = join_all(
        control
            .async_validators()
            .iter()
            .map(|validator| validator.validate(control)),
    );

    let mut errors = ValidationErrors::new();
    let mut is_valid = true;
    for validator in control.validators() {
        if let Some(found) = validator(control)? {
            errors.merge(found);
            is_valid = false;
        }
    }

    for outcome in async_phase.await {
        match outcome {
            Ok(None) => {}
            Ok(Some(found)) => {
                errors.merge(found);
                is_valid = false;
            }
            Err(err @ ValidatorError::InvalidArgument(_)) => return Err(err),
            Err(err @ ValidatorError::Failed(_)) => {
                tracing::warn!(error = %err, "async validator failed, contributing no error");
            }
        }
    }

    Ok((errors, is_valid))
}

impl Control {
    /// Validate this node and its whole subtree.
    pub async fn validate(&self) -> Result<ValidationReport, ValidatorError> {
        validate(self).await
    }

    /// Validate this node in isolation, without descending into children.
    pub async fn validate_self(&self) -> Result<ValidationReport, ValidatorError> {
        match self {
            Control::Field(_) => validate_field(self).await,
            Control::List(_) => validate_list(self, true).await,
            Control::Group(_) => validate_group(self, true).await,
        }
    }
}
