//! Operator matrix for every comparable kind, driven through the public API.

use basaltdb_core::{
    prelude::*,
    value::compare::{Comparator, eval},
};

// ---- converters --------------------------------------------------------

fn from_json(x: &str) -> Value {
    Value::from_json_str(x).expect("fixture should be valid json")
}

fn integer(x: &str) -> Value {
    Value::Integer(x.parse().expect("fixture should be an integer"))
}

fn double(x: &str) -> Value {
    Value::Double(x.parse().expect("fixture should be a double"))
}

fn text(x: &str) -> Value {
    Value::text(x)
}

fn blob(x: &str) -> Value {
    Value::blob(x.as_bytes())
}

type Converter = fn(&str) -> Value;

fn check(cases: &[(&str, &str, &str, bool)], convert: Converter) {
    for &(symbol, a, b, expected) in cases {
        let op = CompareOp::from_symbol(symbol).expect("fixture operator should exist");
        let (left, right) = (convert(a), convert(b));

        let got = eval(op, &left, &right).expect("comparison should succeed");
        assert_eq!(got, expected, "{} {a} {symbol} {b}", left.type_name());
    }
}

// each scalar kind shares the same sixteen cases with its own operands
fn scalar_cases<'a>(low: &'a str, high: &'a str) -> Vec<(&'static str, &'a str, &'a str, bool)> {
    vec![
        ("=", high, low, false),
        ("=", high, high, true),
        ("!=", high, low, true),
        ("!=", high, high, false),
        (">", high, low, true),
        (">", low, high, false),
        (">", high, high, false),
        (">=", high, low, true),
        (">=", low, high, false),
        (">=", high, high, true),
        ("<", high, low, false),
        ("<", low, high, true),
        ("<", high, high, false),
        ("<=", high, low, false),
        ("<=", low, high, true),
        ("<=", high, high, true),
    ]
}

// ---- scalars -----------------------------------------------------------

#[test]
fn bool_operators() {
    check(&scalar_cases("false", "true"), from_json);
}

#[test]
fn integer_operators() {
    check(&scalar_cases("1", "2"), integer);
}

#[test]
fn double_operators() {
    check(&scalar_cases("1", "2"), double);
}

#[test]
fn text_operators() {
    check(&scalar_cases("a", "b"), text);
}

#[test]
fn blob_operators() {
    check(&scalar_cases("a", "b"), blob);
}

// ---- containers --------------------------------------------------------

#[test]
fn array_operators() {
    check(
        &[
            ("=", "[]", "[]", true),
            ("=", "[1]", "[1]", true),
            ("=", "[1]", "[]", false),
            ("=", "[1.0, 2]", "[1, 2]", true),
            ("=", "[1,2,3]", "[1,2,3]", true),
            ("!=", "[1]", "[5]", true),
            ("!=", "[1]", "[1, 1]", true),
            ("!=", "[1,2,3]", "[1,2,3]", false),
            ("!=", "[1]", "[]", true),
            (">", "[2]", "[1]", true),
            (">", "[2]", "[1, 1000]", true),
            (">", "[1]", "[1, 1000]", false),
            (">", "[1, 2]", "[1, 1000]", false),
            (">", "[1, 10]", "[1, true]", true),
            (">", "[1, true]", "[1, 10]", false),
            (">", "[2, 1000]", "[1]", true),
            (">", "[2, 1000]", "[2]", true),
            (">", "[1,2,3]", "[1,2,3]", false),
            (">", "[1,2,3]", "[]", true),
            (">=", "[2]", "[1]", true),
            (">=", "[2]", "[2]", true),
            (">=", "[2]", "[1, 1000]", true),
            (">=", "[1]", "[1, 1000]", false),
            (">=", "[1, 2]", "[1, 2]", true),
            (">=", "[1, 2]", "[1, 1000]", false),
            (">=", "[1, 10]", "[1, true]", true),
            (">=", "[1, true]", "[1, 10]", false),
            (">=", "[2, 1000]", "[1]", true),
            (">=", "[2, 1000]", "[2]", true),
            (">=", "[1,2,3]", "[1,2,3]", true),
            (">=", "[1,2,3]", "[]", true),
            ("<", "[1]", "[2]", true),
            ("<", "[1,2,3]", "[1,2]", false),
            ("<", "[1,2,3]", "[1,2,3]", false),
            ("<", "[1,2]", "[1,2,3]", true),
            ("<", "[1, 1000]", "[2]", true),
            ("<", "[2]", "[2, 1000]", true),
            ("<", "[1,2,3]", "[]", false),
            ("<", "[]", "[1,2,3]", true),
            ("<", "[1, 10]", "[1, true]", false),
            ("<", "[1, true]", "[1, 10]", true),
            ("<=", "[1]", "[2]", true),
            ("<=", "[1, 1000]", "[2]", true),
            ("<=", "[1,2,3]", "[1,2]", false),
            ("<=", "[1,2,3]", "[1,2,3]", true),
            ("<=", "[]", "[]", true),
            ("<=", "[]", "[1,2,3]", true),
        ],
        from_json,
    );
}

#[test]
fn document_operators() {
    check(
        &[
            ("=", "{}", "{}", true),
            ("=", r#"{"a": 1}"#, r#"{"a": 1}"#, true),
            ("=", r#"{"a": 1.0}"#, r#"{"a": 1}"#, true),
            ("=", r#"{"a": 1, "b": 2}"#, r#"{"b": 2, "a": 1}"#, true),
            (
                "=",
                r#"{"a": 1, "b": {"a": 1}}"#,
                r#"{"b": {"a": 1}, "a": 1}"#,
                true,
            ),
            (">", r#"{"a": 2}"#, r#"{"a": 1}"#, true),
            (">", r#"{"b": 1}"#, r#"{"a": 1}"#, true),
            (">", r#"{"a": 1}"#, r#"{"a": 1}"#, false),
            (">", r#"{"a": 1}"#, r#"{"a": true}"#, true),
            ("<", r#"{"a": 1}"#, r#"{"a": 2}"#, true),
            ("<", r#"{"a": 1}"#, r#"{"b": 1}"#, true),
            ("<", r#"{"a": 1}"#, r#"{"a": 1}"#, false),
            ("<", r#"{"a": 1}"#, r#"{"a": true}"#, false),
            (">=", r#"{"a": 1}"#, r#"{"a": 1}"#, true),
            ("<=", r#"{"a": 1}"#, r#"{"a": 1}"#, true),
        ],
        from_json,
    );
}

// ---- mixed kinds -------------------------------------------------------

#[test]
fn integer_and_double_compare_across_kinds() {
    check(
        &[
            ("=", "2", "2.0", true),
            ("<", "2", "2.5", true),
            (">", "3", "2.5", true),
            ("!=", "9007199254740993", "9007199254740992.0", true),
            (">", "9007199254740993", "9007199254740992.0", true),
        ],
        from_json,
    );
}

#[test]
fn incomparable_kinds_only_satisfy_not_equal() {
    let comparator = Comparator::default();
    let pairs = [
        (Value::Integer(1), Value::text("1")),
        (Value::Bool(true), Value::Integer(1)),
        (Value::Null, Value::Integer(0)),
        (Value::text("a"), Value::blob(b"a".to_vec())),
        (Value::array([1]), Value::Document(Document::new())),
    ];

    for (left, right) in &pairs {
        assert_eq!(comparator.compare(left, right).unwrap(), None);
        for op in CompareOp::ALL {
            let expected = op == CompareOp::Ne;
            assert_eq!(comparator.eval(op, left, right).unwrap(), expected, "{op}");
        }
    }
}
