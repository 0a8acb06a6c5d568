//! Integration tests for value projection: extraction, set, and patch.

use proptest::prelude::*;

use formwork_engine::validators::builtin::not_empty;
use formwork_engine::{field, group, list, Value};

fn obj(entries: Vec<(&str, Value)>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

#[test]
fn extracts_a_flat_group() {
    let form = group(vec![
        ("login", field("some login")),
        ("password", field("some password")),
    ]);

    assert_eq!(
        form.value(),
        obj(vec![
            ("login", Value::from("some login")),
            ("password", Value::from("some password")),
        ])
    );
}

#[test]
fn extracts_a_nested_group() {
    let form = group(vec![
        ("login", field("some login")),
        (
            "nested",
            group(vec![
                ("nestedLogin", field("some nested login")),
                ("nestedPassword", field("some nested password")),
            ]),
        ),
    ]);

    assert_eq!(
        form.value(),
        obj(vec![
            ("login", Value::from("some login")),
            (
                "nested",
                obj(vec![
                    ("nestedLogin", Value::from("some nested login")),
                    ("nestedPassword", Value::from("some nested password")),
                ])
            ),
        ])
    );
}

#[test]
fn extracts_a_group_with_a_nested_list() {
    let form = group(vec![
        ("login", field("some login")),
        (
            "entries",
            list(vec![group(vec![("name", field("first"))])]),
        ),
    ]);

    assert_eq!(
        form.value(),
        obj(vec![
            ("login", Value::from("some login")),
            (
                "entries",
                Value::Array(vec![obj(vec![("name", Value::from("first"))])])
            ),
        ])
    );
}

#[test]
fn set_round_trips_a_matching_shape() {
    let form = group(vec![
        ("name", field("old")),
        ("tags", list(vec![field("a"), field("b")])),
        ("meta", group(vec![("age", field(1i64))])),
    ]);

    let replacement = obj(vec![
        ("name", Value::from("new")),
        (
            "tags",
            Value::Array(vec![Value::from("x"), Value::from("y")]),
        ),
        ("meta", obj(vec![("age", Value::Int(2))])),
    ]);

    assert_eq!(form.set_value(&replacement).value(), replacement);
}

#[test]
fn set_round_trips_null_leaves() {
    let form = list(vec![field("a"), field("b")]);
    let replacement = Value::Array(vec![Value::Null, Value::from("kept")]);
    assert_eq!(form.set_value(&replacement).value(), replacement);
}

#[test]
fn set_with_an_empty_object_clears_every_leaf() {
    let form = group(vec![
        ("a", field("set")),
        ("nested", group(vec![("b", field("also set"))])),
    ]);

    let cleared = form.set_value(&obj(vec![]));

    assert_eq!(
        cleared.value(),
        obj(vec![
            ("a", Value::Null),
            ("nested", obj(vec![("b", Value::Null)])),
        ])
    );
}

#[test]
fn patch_with_an_empty_object_changes_nothing() {
    let form = group(vec![
        ("a", field("set")),
        ("nested", group(vec![("b", field("also set"))])),
    ]);

    let patched = form.patch_value(&obj(vec![]));

    assert_eq!(patched.value(), form.value());
}

#[test]
fn patch_updates_only_the_named_slices() {
    let form = group(vec![
        ("a", field("old-a")),
        ("nested", group(vec![("b", field("old-b")), ("c", field("old-c"))])),
    ]);

    let patched = form.patch_value(&obj(vec![(
        "nested",
        obj(vec![("c", Value::from("new-c"))]),
    )]));

    assert_eq!(
        patched.value(),
        obj(vec![
            ("a", Value::from("old-a")),
            (
                "nested",
                obj(vec![("b", Value::from("old-b")), ("c", Value::from("new-c"))])
            ),
        ])
    );
}

#[tokio::test]
async fn rebuilt_trees_keep_their_validators() {
    let form = group(vec![("name", field("ok").with_validators(vec![not_empty()]))]);

    let cleared = form.set_value(&obj(vec![("name", Value::from(""))]));
    let report = cleared.validate().await.expect("validates");
    assert!(!report.is_valid, "the carried-over validator still fires");

    let refilled = cleared.set_value(&obj(vec![("name", Value::from("back"))]));
    let report = refilled.validate().await.expect("validates");
    assert!(report.is_valid);
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9..1.0e9f64).prop_map(Value::Float),
        ".*".prop_map(Value::from),
    ]
}

proptest! {
    /// set followed by get reproduces any value whose shape matches the tree.
    #[test]
    fn set_then_get_round_trips(a in scalar(), b in scalar(), c in scalar(), d in scalar()) {
        let form = group(vec![
            ("a", field("seed")),
            ("items", list(vec![field("seed"), field("seed")])),
            ("meta", group(vec![("d", field("seed"))])),
        ]);

        let replacement = Value::Object(vec![
            ("a".to_string(), a),
            ("items".to_string(), Value::Array(vec![b, c])),
            ("meta".to_string(), Value::Object(vec![("d".to_string(), d)])),
        ]);

        prop_assert_eq!(form.set_value(&replacement).value(), replacement);
    }
}
