use core::str::FromStr;

use crate::error::{Error, Result};

/// A JSON number, kept in the native representation it was built from.
///
/// Encoding writes the canonical text of that representation verbatim:
/// integers through `itoa`, floats through `ryu` (shortest round-trip form),
/// and arbitrary-precision decimals exactly as given. Non-finite floats are
/// passed through as `NaN`, `inf` and `-inf`; JSON has no literal for them,
/// so callers that need strictly valid output must not store them.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    I128(i128),
    U128(u128),
    F32(f32),
    F64(f64),
    /// Arbitrary-precision decimal text, validated on construction.
    Decimal(Box<str>),
}

impl Number {
    /// Build an arbitrary-precision number from its decimal text.
    ///
    /// Accepts `-?digits(.digits)?([eE][+-]?digits)?`. Empty or malformed
    /// text is rejected with [`Error::InvalidArgument`].
    pub fn from_decimal(text: &str) -> Result<Number> {
        if text.is_empty() {
            return Err(Error::invalid("decimal text must not be empty"));
        }
        if !is_decimal(text) {
            return Err(Error::invalid(format!("not a decimal number: {:?}", text)));
        }
        Ok(Number::Decimal(text.into()))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I64(n) => Some(n),
            Number::U64(n) => i64::try_from(n).ok(),
            Number::I128(n) => i64::try_from(n).ok(),
            Number::U128(n) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::I64(n) => u64::try_from(n).ok(),
            Number::U64(n) => Some(n),
            Number::I128(n) => u64::try_from(n).ok(),
            Number::U128(n) => u64::try_from(n).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Number::F32(f) => Some(f as f64),
            Number::F64(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_decimal_str(&self) -> Option<&str> {
        match self {
            Number::Decimal(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            Number::F32(f) => f.is_finite(),
            Number::F64(f) => f.is_finite(),
            _ => true,
        }
    }

    /// Hand the canonical text to `f` without allocating.
    pub(crate) fn with_canonical<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        match self {
            Number::I64(n) => f(itoa::Buffer::new().format(*n)),
            Number::U64(n) => f(itoa::Buffer::new().format(*n)),
            Number::I128(n) => f(itoa::Buffer::new().format(*n)),
            Number::U128(n) => f(itoa::Buffer::new().format(*n)),
            Number::F32(n) => f(ryu::Buffer::new().format(*n)),
            Number::F64(n) => f(ryu::Buffer::new().format(*n)),
            Number::Decimal(s) => f(s),
        }
    }

    /// The native representation of a decimal whose canonical text is exactly
    /// `text`, if there is one.
    pub(crate) fn native_for_decimal(text: &str) -> Option<Number> {
        let candidate = if text.contains(['.', 'e', 'E']) {
            Number::F64(text.parse::<f64>().ok()?)
        } else if let Ok(n) = text.parse::<i64>() {
            Number::I64(n)
        } else if let Ok(n) = text.parse::<u64>() {
            Number::U64(n)
        } else if let Ok(n) = text.parse::<i128>() {
            Number::I128(n)
        } else {
            Number::U128(text.parse::<u128>().ok()?)
        };
        candidate.with_canonical(|s| s == text).then_some(candidate)
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.with_canonical(|s| f.write_str(s))
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Number::from_decimal(s)
    }
}

fn is_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_digits = skip_digits(bytes, &mut i);
    if int_digits == 0 {
        return false;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if skip_digits(bytes, &mut i) == 0 {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if skip_digits(bytes, &mut i) == 0 {
            return false;
        }
    }
    i == bytes.len()
}

fn skip_digits(bytes: &[u8], i: &mut usize) -> usize {
    let start = *i;
    while *i < bytes.len() && bytes[*i].is_ascii_digit() {
        *i += 1;
    }
    *i - start
}

macro_rules! from_int {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )*
    };
}

from_int!(I64 as i64: i8, i16, i32, i64, isize);
from_int!(U64 as u64: u8, u16, u32, u64, usize);
from_int!(I128 as i128: i128);
from_int!(U128 as u128: u128);

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::F32(f)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::F64(f)
    }
}

#[cfg(feature = "num-bigint")]
impl From<num_bigint::BigInt> for Number {
    fn from(n: num_bigint::BigInt) -> Self {
        Number::Decimal(n.to_string().into_boxed_str())
    }
}

#[cfg(feature = "num-bigint")]
impl From<num_bigint::BigUint> for Number {
    fn from(n: num_bigint::BigUint) -> Self {
        Number::Decimal(n.to_string().into_boxed_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_grammar() {
        for ok in ["0", "-0", "007", "1.5", "-12.250", "1e10", "1E+3", "2.5e-7"] {
            assert!(is_decimal(ok), "{ok} should be accepted");
        }
        for bad in ["", "-", "+1", ".5", "1.", "1e", "1e+", "0x10", "1_000", " 1", "NaN"] {
            assert!(!is_decimal(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn canonical_text_per_representation() {
        assert_eq!(Number::from(-42i8).to_string(), "-42");
        assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::from(i128::MIN).to_string(), "-170141183460469231731687303715884105728");
        assert_eq!(Number::from(1.0f64).to_string(), "1.0");
        assert_eq!(Number::from(0.1f32).to_string(), "0.1");
        assert_eq!(Number::from(1e21f64).to_string(), "1e21");
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(Number::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::from(f32::NEG_INFINITY).to_string(), "-inf");
        assert!(!Number::from(f64::NAN).is_finite());
    }

    #[test]
    fn native_for_decimal_requires_identical_text() {
        assert_eq!(Number::native_for_decimal("-42"), Some(Number::I64(-42)));
        assert_eq!(Number::native_for_decimal("18446744073709551615"), Some(Number::U64(u64::MAX)));
        assert_eq!(
            Number::native_for_decimal("170141183460469231731687303715884105727"),
            Some(Number::I128(i128::MAX))
        );
        assert_eq!(Number::native_for_decimal("1.5"), Some(Number::F64(1.5)));
        assert_eq!(Number::native_for_decimal("1e21"), Some(Number::F64(1e21)));
        // Same value, different text: kept as decimal.
        assert_eq!(Number::native_for_decimal("007"), None);
        assert_eq!(Number::native_for_decimal("1.50"), None);
        assert_eq!(Number::native_for_decimal("1.000000000000000000001"), None);
        assert_eq!(Number::native_for_decimal("1e400"), None);
        assert_eq!(Number::native_for_decimal("1234567890123456789012345678901234567890"), None);
    }

    #[test]
    fn integer_views_cross_widths() {
        assert_eq!(Number::from(7u8).as_i64(), Some(7));
        assert_eq!(Number::from(-1i32).as_u64(), None);
        assert_eq!(Number::from(u128::MAX).as_u64(), None);
        assert_eq!(Number::from(2.5f64).as_i64(), None);
    }
}
