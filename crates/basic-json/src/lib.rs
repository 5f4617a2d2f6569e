#![doc = include_str!("../README.md")]

pub mod error;
pub mod number;
pub mod object;
pub mod value;
pub mod encode;
mod convert;

#[cfg(feature = "serde")]
pub mod ser;

pub use crate::convert::{array, object};
pub use crate::encode::sink::{IoSink, Sink, SliceSink};
pub use crate::encode::{encode, encode_into, encode_to_slice, encode_to_string, encode_to_writer};
pub use crate::error::{Error, Result};
pub use crate::number::Number;
pub use crate::object::Object;
pub use crate::value::{Array, Kind, Value};

#[cfg(feature = "serde")]
pub use crate::ser::wrap;
