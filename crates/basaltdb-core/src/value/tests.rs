use crate::{
    Kind,
    error::{ValueError, ValueErrorKind},
    value::{Document, Value},
};

// ---- helpers -----------------------------------------------------------

fn v_i(x: i64) -> Value {
    Value::Integer(x)
}
fn v_txt(s: &str) -> Value {
    Value::text(s)
}

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        Value::Bool(false),
        v_i(-7),
        Value::Double(2.5),
        v_txt("example"),
        Value::blob(vec![1u8, 2, 3]),
        Value::array([1, 2]),
        Value::document([("a", 1)]),
    ]
}

// ---- kinds -------------------------------------------------------------

#[test]
fn every_kind_has_a_sample() {
    let kinds: Vec<Kind> = samples().iter().map(Value::kind).collect();
    assert_eq!(kinds, Kind::ALL.to_vec());
}

#[test]
fn type_name_matches_kind_label() {
    for value in samples() {
        assert_eq!(value.type_name(), value.kind().label());
    }
}

#[test]
fn only_arrays_and_documents_are_containers() {
    for value in samples() {
        assert_eq!(
            value.is_container(),
            matches!(value, Value::Array(_) | Value::Document(_)),
            "value: {value:?}"
        );
    }
}

// ---- accessors ---------------------------------------------------------

#[test]
fn accessors_return_payload_for_matching_kind() {
    assert_eq!(Value::Bool(true).as_bool(), Ok(true));
    assert_eq!(v_i(10).as_integer(), Ok(10));
    assert_eq!(Value::Double(1.5).as_double(), Ok(1.5));
    assert_eq!(v_txt("x").as_text(), Ok("x"));
    assert_eq!(Value::blob(b"ab".to_vec()).as_blob(), Ok(&b"ab"[..]));
    assert_eq!(
        Value::array([1]).as_array().map(<[Value]>::len),
        Ok(1)
    );
    assert_eq!(
        Value::document([("a", 1)]).as_document().map(Document::len),
        Ok(1)
    );
}

#[test]
fn accessors_fail_with_type_mismatch() {
    let err = v_txt("10").as_integer().unwrap_err();
    assert_eq!(
        err,
        ValueError::TypeMismatch {
            expected: Kind::Integer,
            found: Kind::Text,
        }
    );
    assert_eq!(err.kind(), ValueErrorKind::TypeMismatch);

    // no numeric coercion through accessors
    assert!(v_i(1).as_double().is_err());
    assert!(Value::Double(1.0).as_integer().is_err());
    assert!(Value::Null.as_bool().is_err());
}

#[test]
fn try_from_value_uses_accessors() {
    assert_eq!(i64::try_from(&v_i(3)), Ok(3));
    assert_eq!(String::try_from(&v_txt("a")), Ok("a".to_string()));
    assert_eq!(Vec::<u8>::try_from(&Value::blob(vec![9])), Ok(vec![9]));
    assert!(bool::try_from(&v_i(1)).is_err());
    assert!(f64::try_from(&v_i(1)).is_err());
}

// ---- construction ------------------------------------------------------

#[test]
fn native_conversions_pick_the_right_kind() {
    assert_eq!(Value::from(7u8), v_i(7));
    assert_eq!(Value::from(-7i32), v_i(-7));
    assert_eq!(Value::from(1.5f32), Value::Double(1.5));
    assert_eq!(Value::from("x"), v_txt("x"));
    assert_eq!(Value::from(&b"x"[..]), Value::Blob(vec![b'x']));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(true)), Value::Bool(true));
}

#[test]
fn doubles_accept_non_finite_payloads() {
    assert!(Value::Double(f64::NAN).as_double().unwrap().is_nan());
    assert_eq!(
        Value::Double(f64::NEG_INFINITY).as_double(),
        Ok(f64::NEG_INFINITY)
    );
}

// ---- documents ---------------------------------------------------------

#[test]
fn document_preserves_insertion_order() {
    let doc = Document::new().with("z", 1).with("a", 2).with("m", 3);
    let names: Vec<_> = doc.names().collect();

    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn document_insert_replaces_in_place() {
    let mut doc = Document::new().with("a", 1).with("b", 2);
    let old = doc.insert("a", "x");

    assert_eq!(old, Some(v_i(1)));
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doc.get("a"), Some(&v_txt("x")));
}

#[test]
fn document_remove_keeps_remaining_order() {
    let mut doc: Document = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

    assert_eq!(doc.remove("b"), Some(v_i(2)));
    assert_eq!(doc.remove("b"), None);
    assert!(!doc.contains("b"));
    assert_eq!(doc.names().collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn document_from_iter_collapses_duplicates() {
    let doc: Document = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("a"), Some(&v_i(3)));
}

#[test]
fn document_sorted_fields_use_byte_order() {
    let doc = Document::new().with("b", 1).with("B", 2).with("a", 3);
    let sorted: Vec<_> = doc.sorted_fields().into_iter().map(|(n, _)| n).collect();

    assert_eq!(sorted, vec!["B", "a", "b"]);
}

#[test]
fn document_into_iter_yields_owned_fields() {
    let doc = Document::new().with("a", 1);
    let fields: Vec<(String, Value)> = doc.into_iter().collect();

    assert_eq!(fields, vec![("a".to_string(), v_i(1))]);
}

// ---- json import -------------------------------------------------------

#[test]
fn from_json_splits_integers_and_doubles() {
    let value = Value::from_json_str("[1, 1.0, -3, 1e2, 18446744073709551615]").unwrap();

    assert_eq!(
        value,
        Value::Array(vec![
            v_i(1),
            Value::Double(1.0),
            v_i(-3),
            Value::Double(100.0),
            Value::Double(18_446_744_073_709_551_615.0),
        ])
    );
}

#[test]
fn from_json_keeps_member_order() {
    let value = Value::from_json_str(r#"{"b": {"y": null, "x": true}, "a": "s"}"#).unwrap();
    let doc = value.as_document().unwrap();

    assert_eq!(doc.names().collect::<Vec<_>>(), vec!["b", "a"]);
    let inner = doc.get("b").unwrap().as_document().unwrap();
    assert_eq!(inner.names().collect::<Vec<_>>(), vec!["y", "x"]);
    assert_eq!(inner.get("y"), Some(&Value::Null));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(Value::from_json_str("{").is_err());
}

#[test]
fn from_json_wide_object_keeps_every_member() {
    const WIDTH: usize = 50_000;

    let members: Vec<String> = (0..WIDTH).map(|i| format!("\"k{i}\": {i}")).collect();
    let value = Value::from_json_str(&format!("{{{}}}", members.join(", "))).unwrap();
    let doc = value.as_document().unwrap();

    assert_eq!(doc.len(), WIDTH);
    assert_eq!(doc.names().last(), Some("k49999"));
    assert_eq!(doc.get("k123"), Some(&v_i(123)));
}
