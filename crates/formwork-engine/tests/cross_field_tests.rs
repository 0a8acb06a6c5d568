//! Cross-field validation patterns layered on top of the engine.
//!
//! The engine itself never links nodes together; a rule that depends on a
//! sibling or ancestor captures a read-only accessor at construction and
//! resolves it when it runs. These tests exercise that contract, plus the
//! engine's promise to re-read values and validator sets on every call.

use std::sync::{Arc, RwLock};

use formwork_engine::validators::builtin::not_empty;
use formwork_engine::validators::sync;
use formwork_engine::{
    field, group, Control, ValidationErrors, ValidatorError, ValueAccessor, Value,
};

/// Snapshot of a shared tree for validation, letting accessors read the
/// live tree without holding a lock across the await.
fn snapshot(tree: &Arc<RwLock<Control>>) -> Control {
    tree.read().expect("not poisoned").clone()
}

/// jobTitle becomes required once occupation reads "Other" — resolved
/// against the whole form at validation time via the accessor.
fn required_for_other(form: ValueAccessor) -> formwork_engine::SyncValidator {
    sync(move |control: &Control| {
        let job_title = control.as_field().ok_or_else(|| {
            ValidatorError::InvalidArgument("requiredForOther: expected a field".into())
        })?;

        let occupation = form()
            .get("occupation")
            .cloned()
            .unwrap_or(Value::Null);

        let empty = matches!(&job_title.value, Value::String(s) if s.is_empty());
        if occupation == Value::from("Other") && empty {
            return Ok(Some(ValidationErrors::of(
                "required",
                "job title is required when occupation is Other",
            )));
        }
        Ok(None)
    })
}

#[tokio::test]
async fn accessor_backed_conditional_validation() -> anyhow::Result<()> {
    let tree = Arc::new(RwLock::new(group(vec![
        ("occupation", field("Other").with_validators(vec![not_empty()])),
        ("jobTitle", field("")),
    ])));

    let accessor: ValueAccessor = {
        let tree = Arc::clone(&tree);
        Arc::new(move || tree.read().expect("not poisoned").value())
    };

    {
        let mut guard = tree.write().expect("not poisoned");
        let job_title = guard
            .as_group_mut()
            .and_then(|g| g.get_mut("jobTitle"))
            .and_then(Control::as_field_mut)
            .expect("jobTitle is a field");
        job_title.validators = vec![required_for_other(accessor)];
    }

    let report = snapshot(&tree).validate().await?;
    assert!(!report.is_valid);
    assert!(report
        .child("jobTitle")
        .expect("present")
        .errors
        .contains("required"));

    // Once occupation is anything else, the same rule passes.
    {
        let mut guard = tree.write().expect("not poisoned");
        guard
            .as_group_mut()
            .and_then(|g| g.get_mut("occupation"))
            .and_then(Control::as_field_mut)
            .expect("occupation is a field")
            .value = Value::from("Engineer");
    }

    let report = snapshot(&tree).validate().await?;
    assert!(report.is_valid);
    Ok(())
}

#[tokio::test]
async fn validator_sets_are_read_per_call() -> anyhow::Result<()> {
    let mut form = group(vec![
        ("occupation", field("Other")),
        ("jobTitle", field("")),
    ]);

    let report = form.validate().await?;
    assert!(report.is_valid, "no rules attached yet");

    // A consumer reacting to the occupation answer wires in a new rule.
    form.as_group_mut()
        .and_then(|g| g.get_mut("jobTitle"))
        .and_then(Control::as_field_mut)
        .expect("jobTitle is a field")
        .validators = vec![not_empty()];

    let report = form.validate().await?;
    assert!(!report.is_valid);

    form.as_group_mut()
        .and_then(|g| g.get_mut("jobTitle"))
        .and_then(Control::as_field_mut)
        .expect("jobTitle is a field")
        .value = Value::from("Influencer");

    let report = form.validate().await?;
    assert!(report.is_valid);
    Ok(())
}

#[tokio::test]
async fn values_are_read_at_validation_time() -> anyhow::Result<()> {
    let mut form = group(vec![(
        "name",
        field("").with_validators(vec![not_empty()]),
    )]);

    assert!(!form.validate().await?.is_valid);

    // Direct write into the leaf, no rebuild: the next call sees it.
    form.as_group_mut()
        .and_then(|g| g.get_mut("name"))
        .and_then(Control::as_field_mut)
        .expect("name is a field")
        .value = Value::from("ada");

    assert!(form.validate().await?.is_valid);
    Ok(())
}
