#![cfg(feature = "serde")]
use std::collections::{BTreeMap, HashMap};

use basic_json::{Error, Number, Value, array, encode_to_string, wrap};
use serde::Serialize;
use serde::ser::Serializer;

fn wrapped<T: Serialize + ?Sized>(v: &T) -> String {
    encode_to_string(&wrap(v).unwrap())
}

#[test]
fn primitives() {
    assert_eq!(wrap(&true).unwrap(), Value::True);
    assert_eq!(wrap(&false).unwrap(), Value::False);
    assert_eq!(wrap(&()).unwrap(), Value::Null);
    assert_eq!(wrap(&None::<u8>).unwrap(), Value::Null);
    assert_eq!(wrapped(&-3i16), "-3");
    assert_eq!(wrapped(&u128::MAX), "340282366920938463463374607431768211455");
    assert_eq!(wrapped(&0.25f32), "0.25");
    assert_eq!(wrapped("s"), r#""s""#);
    assert_eq!(wrapped(&'c'), r#""c""#);
}

#[test]
fn sequences_are_wrapped_recursively() {
    let v = vec![vec![Some(1), None], vec![]];
    assert_eq!(wrapped(&v), "[[1,null],[]]");
    assert_eq!(wrapped(&(1, "two", 3.5)), r#"[1,"two",3.5]"#);
}

#[test]
fn string_keyed_maps_become_objects() {
    let mut m = BTreeMap::new();
    m.insert("b", 2);
    m.insert("a", 1);
    assert_eq!(wrapped(&m), r#"{"a":1,"b":2}"#);

    let mut h = HashMap::new();
    h.insert('k', vec!["v"]);
    assert_eq!(wrapped(&h), r#"{"k":["v"]}"#);
}

#[test]
fn values_pass_through() -> Result<(), Error> {
    let v = Value::object([
        ("big", Value::Number(Number::from_decimal("1.000000000000000000001")?)),
        ("list", array([Value::True, Value::Null])),
    ]);
    assert_eq!(wrap(&v)?, v);

    let list = vec![Value::from("a"), Value::from(1)];
    assert_eq!(wrap(&list)?, Value::from(list.clone()));
    Ok(())
}

#[test]
fn serde_json_documents_keep_key_order() -> Result<(), Box<dyn std::error::Error>> {
    let text = r#"{"z":[1,2.5,"x"],"a":{"nested":null},"m":true}"#;
    let doc: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(encode_to_string(&wrap(&doc)?), text);
    Ok(())
}

#[test]
fn date_time_is_rejected_by_name() {
    let err = wrap(&std::time::SystemTime::UNIX_EPOCH).unwrap_err();
    match &err {
        Error::UnsupportedType { type_name } => assert_eq!(type_name, "SystemTime"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "cannot encode type: SystemTime");
}

#[derive(Serialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Serialize)]
struct Meters(f64);

#[derive(Serialize)]
enum Color {
    Red,
    Custom(u8, u8, u8),
}

#[test]
fn domain_types_are_rejected_by_name() {
    let cases: [(Result<Value, Error>, &str); 4] = [
        (wrap(&Point { x: 1, y: 2 }), "Point"),
        (wrap(&Meters(1.0)), "Meters"),
        (wrap(&Color::Red), "Color::Red"),
        (wrap(&Color::Custom(1, 2, 3)), "Color::Custom"),
    ];
    for (result, name) in cases {
        match result {
            Err(Error::UnsupportedType { type_name }) => assert_eq!(type_name, name),
            other => panic!("expected {name} to be rejected, got {other:?}"),
        }
    }
}

#[test]
fn nested_unsupported_type_fails_whole_wrap() {
    let v = vec![Some(Point { x: 0, y: 0 })];
    assert!(matches!(wrap(&v), Err(Error::UnsupportedType { .. })));
}

struct RawBytes(&'static [u8]);

impl Serialize for RawBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}

#[test]
fn byte_arrays_are_not_supported() {
    let err = wrap(&RawBytes(b"abc")).unwrap_err();
    assert_eq!(err.to_string(), "cannot encode type: byte array");
}

#[test]
fn non_string_map_keys_are_rejected() {
    let mut m = BTreeMap::new();
    m.insert(1, "one");
    let err = wrap(&m).unwrap_err();
    assert!(err.to_string().contains("map key"), "{err}");
}

#[test]
fn value_serializes_through_serde_json() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::object([
        ("a", array([1, 2])),
        ("b", Value::from("x")),
        ("ratio", Value::Number(Number::from_decimal("1.5")?)),
        ("id", Value::Number(Number::from_decimal("12345678901234567890")?)),
        ("wide", Value::Number(Number::from_decimal("-98765432109876543210987654321")?)),
    ]);
    assert_eq!(serde_json::to_string(&v)?, encode_to_string(&v));
    Ok(())
}

#[test]
fn decimals_without_native_form_reach_other_formats_as_text() -> Result<(), Box<dyn std::error::Error>> {
    let v = array([
        Value::Number(Number::from_decimal("1.000000000000000000001")?),
        Value::Number(Number::from_decimal("1.50")?),
    ]);
    assert_eq!(encode_to_string(&v), "[1.000000000000000000001,1.50]");
    assert_eq!(serde_json::to_string(&v)?, r#"["1.000000000000000000001","1.50"]"#);
    // wrap still sees the decimal text, so nothing is lost on the way back.
    assert_eq!(wrap(&v)?, v);
    Ok(())
}

#[test]
fn decimals_with_native_form_wrap_to_that_form() -> Result<(), Error> {
    let v = wrap(&Value::Number(Number::from_decimal("2.5")?))?;
    assert_eq!(v, Value::from(2.5));
    assert_eq!(encode_to_string(&v), "2.5");
    Ok(())
}
