//! End-to-end field selection over derived records.

use fieldpick_api::{Mapping, Record, ToValue, Value};
use fieldpick_engine::{
    convert, convert_or_error, convert_record, convert_record_or_error, convert_records,
    convert_records_or_error, ErrorKind, SelectError,
};

#[derive(Record, Clone)]
struct DoubleNested {
    #[record(rename = "Field1")]
    count: i64,
    #[record(rename = "Field2")]
    ratio: f64,
}

#[derive(Record, Clone)]
struct Internal {
    #[record(rename = "Field1")]
    flag: bool,
    #[record(rename = "Field2")]
    inner: Option<Box<DoubleNested>>,
}

#[derive(Record, Clone)]
struct TestRecord {
    #[record(rename = "Field1")]
    name: String,
    #[record(rename = "Field2")]
    internal: Internal,
}

#[derive(Record)]
struct Leaf {
    #[record(rename = "Field")]
    field: String,
}

#[derive(Record)]
struct Nested {
    #[record(rename = "Nested")]
    nested: Leaf,
}

#[derive(Record)]
struct User {
    #[record(rename = "ID")]
    id: String,
    #[record(rename = "Some")]
    some: Nested,
    #[record(rename = "Other")]
    other: bool,
}

fn test_record() -> TestRecord {
    TestRecord {
        name: "Value 1".into(),
        internal: Internal {
            flag: true,
            inner: Some(Box::new(DoubleNested {
                count: 42,
                ratio: 150.25,
            })),
        },
    }
}

fn user(id: &str, field: &str) -> User {
    User {
        id: id.into(),
        some: Nested {
            nested: Leaf { field: field.into() },
        },
        other: true,
    }
}

fn map<const N: usize>(entries: [(&str, Value); N]) -> Mapping {
    entries.into_iter().collect()
}

fn double_nested() -> Value {
    Value::Map(map([
        ("Field1", Value::Int64(42)),
        ("Field2", Value::Float64(150.25)),
    ]))
}

#[test]
fn no_fields_yields_empty_mapping() {
    assert_eq!(convert_record::<_, &str>(&test_record(), &[]), Mapping::new());
}

#[test]
fn single_top_level_field() {
    assert_eq!(
        convert_record(&test_record(), &["Field1"]),
        map([("Field1", Value::from("Value 1"))])
    );
}

#[test]
fn structured_field_pulls_in_whole_subtree() {
    let expected = map([(
        "Field2",
        Value::Map(map([
            ("Field1", Value::Bool(true)),
            ("Field2", double_nested()),
        ])),
    )]);
    assert_eq!(convert_record(&test_record(), &["Field2"]), expected);
}

#[test]
fn structured_field_equals_union_of_its_leaves() {
    let record = test_record();
    let whole = convert_record(&record, &["Field2"]);
    let leaves = convert_record(
        &record,
        &["Field2.Field1", "Field2.Field2.Field1", "Field2.Field2.Field2"],
    );
    assert_eq!(whole, leaves);
}

#[test]
fn order_of_fields_does_not_change_result() {
    let record = test_record();
    assert_eq!(
        convert_record(&record, &["Field2", "Field1"]),
        convert_record(&record, &["Field1", "Field2"])
    );
}

#[test]
fn partial_nested_selection() {
    let record = test_record();
    assert_eq!(
        convert_record(&record, &["Field2.Field1"]),
        map([("Field2", Value::Map(map([("Field1", Value::Bool(true))])))])
    );
    assert_eq!(
        convert_record(&record, &["Field1", "Field2.Field2"]),
        map([
            ("Field1", Value::from("Value 1")),
            ("Field2", Value::Map(map([("Field2", double_nested())]))),
        ])
    );
    assert_eq!(
        convert_record(&record, &["Field2.Field2.Field1"]),
        map([(
            "Field2",
            Value::Map(map([(
                "Field2",
                Value::Map(map([("Field1", Value::Int64(42))]))
            )]))
        )])
    );
}

#[test]
fn selects_listed_fields_only() {
    let out = convert_record(&user("123", "abc"), &["ID", "Some.Nested.Field"]);
    let expected = map([
        ("ID", Value::from("123")),
        (
            "Some",
            Value::Map(map([(
                "Nested",
                Value::Map(map([("Field", Value::from("abc"))])),
            )])),
        ),
    ]);
    assert_eq!(out, expected);
    assert!(!out.contains_key("Other"));
}

#[test]
fn rename_moves_value_to_destination() {
    let out = convert_record(&user("123", "abc"), &["Some.Nested.Field->Renamed.Location"]);
    assert_eq!(
        out,
        map([(
            "Renamed",
            Value::Map(map([("Location", Value::from("abc"))]))
        )])
    );
    assert!(!out.contains_key("Some"));
}

#[test]
fn scalar_renamed_to_deep_destination() {
    let out = convert_record(&user("123", "abc"), &["ID->a.b.c.d"]);
    let d = ["a", "b", "c"]
        .iter()
        .try_fold(&out, |m, key| m.get(key).and_then(Value::as_map))
        .and_then(|m| m.get("d"));
    assert_eq!(d, Some(&Value::from("123")));
}

#[test]
fn overlapping_fields_later_one_wins() {
    let record = test_record();

    // Whole subtree first, then a leaf write into the same subtree.
    let out = convert_record(&record, &["Field2", "Field1->Field2.Field1"]);
    let field2 = out.get("Field2").and_then(Value::as_map).unwrap();
    assert_eq!(field2.get("Field1"), Some(&Value::from("Value 1")));
    assert_eq!(field2.get("Field2"), Some(&double_nested()));

    // Leaf first, then the whole subtree replaces it.
    let out = convert_record(&record, &["Field1->Field2.Field1", "Field2"]);
    let field2 = out.get("Field2").and_then(Value::as_map).unwrap();
    assert_eq!(field2.get("Field1"), Some(&Value::Bool(true)));
}

#[test]
fn missing_field_fails() {
    let err = convert_record_or_error(&test_record(), &["doesNotExist"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldNotFound);
}

#[test]
fn indexing_through_absent_optional_is_invalid_path() {
    let mut record = test_record();
    record.internal.inner = None;
    let err = convert_record_or_error(&record, &["Field2.Field2.Field1"]).unwrap_err();
    assert_eq!(
        err,
        SelectError::InvalidPath {
            path: "Field2.Field2.Field1".into(),
            segment: "Field2".into(),
            found: "null",
        }
    );
}

#[test]
#[should_panic(expected = "fieldpick::convert: field 'doesNotExist' not found")]
fn convenience_form_panics_on_missing_field() {
    convert_record(&test_record(), &["doesNotExist"]);
}

#[test]
fn collection_maps_element_wise_in_order() {
    let users = vec![user("1", "a"), user("2", "b")];
    let fields = ["ID", "Some.Nested.Field->Field"];
    let out = convert_records(&users, &fields);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], convert_record(&users[0], &fields));
    assert_eq!(out[1], convert_record(&users[1], &fields));
    assert_eq!(out[1].get("Field"), Some(&Value::from("b")));
}

#[test]
fn dynamic_form_handles_single_and_collections() {
    let users = [user("1", "a"), user("2", "b")];

    let single = convert(&users[0], &["ID"]);
    assert_eq!(single, Value::Map(map([("ID", Value::from("1"))])));

    let many = convert(&users, &["ID"]);
    assert_eq!(
        many,
        Value::Array(vec![
            Value::Map(map([("ID", Value::from("1"))])),
            Value::Map(map([("ID", Value::from("2"))])),
        ])
    );

    let as_vec = convert(&users.iter().collect::<Vec<_>>(), &["ID"]);
    assert_eq!(as_vec, many);
}

#[test]
fn collection_failure_reports_element() {
    let users = vec![user("1", "a")];
    let err = convert_records_or_error(&users, &["ID", "Some.Absent"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldNotFound);
    assert!(matches!(err, SelectError::Element { index: 0, .. }));
}

#[test]
fn scalar_input_is_not_a_record() {
    let err = convert_or_error(&42_i64, &["ID"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotARecord);
}

#[test]
fn derived_records_nest_as_values() {
    assert!(user("1", "a").to_value().is_map());
    assert_eq!(user("1", "a").flatten().len(), 3);
}
