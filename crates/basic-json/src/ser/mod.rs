//! Serde integration: `Serialize` for the value model, and [`wrap`] for
//! turning native serde values into a [`Value`].

mod wrap;

use serde::ser::{Serialize, Serializer};

use crate::number::Number;
use crate::object::Object;
use crate::value::{Array, Value};

pub use wrap::wrap;

/// Newtype-struct name that carries arbitrary-precision decimal text across
/// the serde boundary.
///
/// Only used for decimals with no exact native form. Serializers other than
/// [`wrap`] see the inner string and write those as strings.
pub(crate) const DECIMAL_TOKEN: &str = "$basic_json::Decimal";

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::True => serializer.serialize_bool(true),
            Value::False => serializer.serialize_bool(false),
            Value::Null => serializer.serialize_unit(),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(entries) => entries.serialize(serializer),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::I64(n) => serializer.serialize_i64(*n),
            Number::U64(n) => serializer.serialize_u64(*n),
            Number::I128(n) => serializer.serialize_i128(*n),
            Number::U128(n) => serializer.serialize_u128(*n),
            Number::F32(f) => serializer.serialize_f32(*f),
            Number::F64(f) => serializer.serialize_f64(*f),
            Number::Decimal(s) => match Number::native_for_decimal(s) {
                Some(native) => native.serialize(serializer),
                None => serializer.serialize_newtype_struct(DECIMAL_TOKEN, &**s),
            },
        }
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
