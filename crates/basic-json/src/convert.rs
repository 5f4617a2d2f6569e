//! Conversions from native primitives into [`Value`], plus the `array` and
//! `object` builders.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::number::Number;
use crate::object::Object;
use crate::value::{Array, Value};

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

#[cfg(feature = "num-bigint")]
impl From<num_bigint::BigInt> for Value {
    fn from(n: num_bigint::BigInt) -> Self {
        Value::Number(n.into())
    }
}

#[cfg(feature = "num-bigint")]
impl From<num_bigint::BigUint> for Value {
    fn from(n: num_bigint::BigUint) -> Self {
        Value::Number(n.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map.into())
    }
}

/// Absence maps to `null`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Build an array from already-converted items. `None` slots become `null`.
///
/// ```
/// use basic_json::{array, encode_to_string, Value};
///
/// let v = array([Some(Value::from(1)), None, Some(Value::from("x"))]);
/// assert_eq!(encode_to_string(&v), r#"[1,null,"x"]"#);
/// ```
pub fn array<I, T>(items: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Value::Array(items.into_iter().map(Into::into).collect())
}

/// Build an object from alternating keys and values.
///
/// Keys must be string values. An odd number of items, or a key of another
/// kind, fails with [`Error::InvalidArgument`]. A repeated key keeps its first
/// position and takes the last value.
///
/// ```
/// use basic_json::{array, encode_to_string, object, Value};
///
/// let v = object([
///     Value::from("a"), Value::from(1),
///     Value::from("b"), array([Value::True, Value::Null, Value::from("x")]),
/// ])?;
/// assert_eq!(encode_to_string(&v), r#"{"a":1,"b":[true,null,"x"]}"#);
/// # Ok::<(), basic_json::Error>(())
/// ```
pub fn object<I, T>(key_values: I) -> Result<Value>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let items: Vec<Value> = key_values.into_iter().map(Into::into).collect();
    if items.len() % 2 != 0 {
        return Err(Error::invalid(format!(
            "key/value list must be even in length, got {} items",
            items.len()
        )));
    }
    let mut map = IndexMap::with_capacity(items.len() / 2);
    let mut it = items.into_iter().enumerate();
    while let (Some((pos, key)), Some((_, value))) = (it.next(), it.next()) {
        let key = match key {
            Value::String(s) => s,
            other => {
                return Err(Error::invalid(format!(
                    "key at position {} must be a string, got {}",
                    pos,
                    other.kind()
                )));
            }
        };
        map.insert(key, value);
    }
    Ok(Value::Object(map.into()))
}
