//! Boolean, fixed-width integer, and floating-point types.
//!
//! Integer types reject malformed literals with
//! [`InvalidFormat`](crate::XsdError::InvalidFormat) and well-formed literals
//! outside their bit width with [`OutOfRange`](crate::XsdError::OutOfRange);
//! nothing is truncated.
//!
//! # Examples
//!
//! ```
//! use xsd_lexical_core::{Byte, XsdDecode};
//!
//! assert_eq!(Byte::decode("+105").unwrap().as_i8(), 105);
//! assert!(Byte::decode("1524").unwrap_err().is_out_of_range());
//! assert!(Byte::decode("INF").unwrap_err().is_invalid_format());
//! ```

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, XsdError};
use crate::lexical::{XsdDecode, XsdEncode, impl_lexical_deserialize, impl_lexical_serialize};

/// `xsd:boolean`.
///
/// Decodes `true`, `false`, `1`, `0` (case-sensitive); encodes `true` or
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Boolean(pub bool);

impl Boolean {
    /// Returns the wrapped value.
    pub fn as_bool(self) -> bool {
        self.0
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "true" } else { "false" })
    }
}

impl XsdEncode for Boolean {
    const XSD_NAME: &'static str = "boolean";
}

impl XsdDecode for Boolean {
    fn decode(text: &str) -> Result<Self> {
        match text {
            "true" | "1" => Ok(Self(true)),
            "false" | "0" => Ok(Self(false)),
            _ => Err(XsdError::invalid_format(Self::XSD_NAME, text)),
        }
    }
}

/// Parses an optionally signed decimal integer literal into `T`.
///
/// For unsigned targets a leading `-` is only accepted on zero.
fn parse_bounded<T>(type_name: &'static str, text: &str, signed: bool) -> Result<T>
where
    T: FromStr<Err = ParseIntError> + Default + PartialEq,
{
    let classify = |err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            XsdError::out_of_range(type_name, text)
        }
        _ => XsdError::invalid_format(type_name, text),
    };

    if !signed {
        if let Some(magnitude) = text.strip_prefix('-') {
            if magnitude.starts_with(['+', '-']) {
                return Err(XsdError::invalid_format(type_name, text));
            }
            let value: T = magnitude.parse().map_err(classify)?;
            if value != T::default() {
                return Err(XsdError::out_of_range(type_name, text));
            }
            return Ok(value);
        }
    }

    text.parse().map_err(classify)
}

macro_rules! bounded_integer {
    ($(#[$meta:meta])* $name:ident, $prim:ty, $xsd:literal, $getter:ident, $signed:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub $prim);

        impl $name {
            /// Smallest representable value.
            pub const MIN: Self = Self(<$prim>::MIN);
            /// Largest representable value.
            pub const MAX: Self = Self(<$prim>::MAX);

            /// Returns the wrapped value.
            pub fn $getter(self) -> $prim {
                self.0
            }
        }

        impl From<$prim> for $name {
            fn from(value: $prim) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl XsdEncode for $name {
            const XSD_NAME: &'static str = $xsd;
        }

        impl XsdDecode for $name {
            fn decode(text: &str) -> Result<Self> {
                parse_bounded::<$prim>(Self::XSD_NAME, text, $signed).map(Self)
            }
        }

        impl_lexical_serialize!($name);
        impl_lexical_deserialize!($name);
    };
}

bounded_integer!(
    /// `xsd:byte`: signed 8-bit integer in `[-128, 127]`.
    Byte, i8, "byte", as_i8, true
);
bounded_integer!(
    /// `xsd:short`: signed 16-bit integer.
    Short, i16, "short", as_i16, true
);
bounded_integer!(
    /// `xsd:int`: signed 32-bit integer.
    Int, i32, "int", as_i32, true
);
bounded_integer!(
    /// `xsd:long`: signed 64-bit integer.
    Long, i64, "long", as_i64, true
);
bounded_integer!(
    /// `xsd:unsignedByte`: integer in `[0, 255]`.
    UnsignedByte, u8, "unsignedByte", as_u8, false
);
bounded_integer!(
    /// `xsd:unsignedShort`: unsigned 16-bit integer.
    UnsignedShort, u16, "unsignedShort", as_u16, false
);
bounded_integer!(
    /// `xsd:unsignedInt`: unsigned 32-bit integer.
    UnsignedInt, u32, "unsignedInt", as_u32, false
);
bounded_integer!(
    /// `xsd:unsignedLong`: unsigned 64-bit integer.
    UnsignedLong, u64, "unsignedLong", as_u64, false
);

/// Sign, then digits with at most one dot, over the whole input.
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("static regex must compile")
});

/// `xsd:decimal`, held at 32-bit floating-point precision.
///
/// # Examples
///
/// ```
/// use xsd_lexical_core::{Decimal, XsdDecode, XsdEncode};
///
/// let d = Decimal::decode("-12.50").unwrap();
/// assert_eq!(d.encode().unwrap(), "-12.5");
///
/// assert!(Decimal::decode("1e5").is_err());
/// assert!(Decimal::decode("1.2.3").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Decimal(pub f32);

impl Decimal {
    /// Returns the wrapped value.
    pub fn as_f32(self) -> f32 {
        self.0
    }
}

impl From<f32> for Decimal {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl XsdEncode for Decimal {
    const XSD_NAME: &'static str = "decimal";
}

impl XsdDecode for Decimal {
    fn decode(text: &str) -> Result<Self> {
        if !DECIMAL_RE.is_match(text) {
            return Err(XsdError::invalid_format(Self::XSD_NAME, text));
        }
        match text.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(Self(value)),
            _ => Err(XsdError::invalid_format(Self::XSD_NAME, text)),
        }
    }
}

/// `xsd:double`: 64-bit floating point, using the primitive's own text form.
///
/// Special values follow Rust's spelling (`inf`, `NaN`, any case on decode)
/// rather than XSD's `INF` / `-INF` / `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Double(pub f64);

impl Double {
    /// Returns the wrapped value.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl XsdEncode for Double {
    const XSD_NAME: &'static str = "double";
}

impl XsdDecode for Double {
    fn decode(text: &str) -> Result<Self> {
        text.parse::<f64>()
            .map(Self)
            .map_err(|_| XsdError::invalid_format(Self::XSD_NAME, text))
    }
}

/// `xsd:float`: 32-bit floating point, using the primitive's own text form.
///
/// Special values are spelled as for [`Double`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Float(pub f32);

impl Float {
    /// Returns the wrapped value.
    pub fn as_f32(self) -> f32 {
        self.0
    }
}

impl From<f32> for Float {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl XsdEncode for Float {
    const XSD_NAME: &'static str = "float";
}

impl XsdDecode for Float {
    fn decode(text: &str) -> Result<Self> {
        text.parse::<f32>()
            .map(Self)
            .map_err(|_| XsdError::invalid_format(Self::XSD_NAME, text))
    }
}

impl_lexical_serialize!(Boolean, Decimal, Double, Float);
impl_lexical_deserialize!(Boolean, Decimal, Double, Float);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_literals() {
        assert!(Boolean::decode("true").unwrap().as_bool());
        assert!(!Boolean::decode("false").unwrap().as_bool());
        assert!(Boolean::decode("1").unwrap().as_bool());
        assert!(!Boolean::decode("0").unwrap().as_bool());
    }

    #[test]
    fn test_boolean_rejects_other_text() {
        for text in ["ok", "TRUE", "True", "", " true", "2"] {
            assert!(
                Boolean::decode(text).unwrap_err().is_invalid_format(),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_boolean_encodes_words() {
        assert_eq!(Boolean(true).encode().unwrap(), "true");
        assert_eq!(Boolean(false).encode().unwrap(), "false");
    }

    #[test]
    fn test_byte_bounds() {
        assert_eq!(Byte::decode("-128").unwrap(), Byte::MIN);
        assert_eq!(Byte::decode("127").unwrap(), Byte::MAX);
        assert_eq!(Byte::decode("27").unwrap().as_i8(), 27);
        assert_eq!(Byte::decode("-34").unwrap().as_i8(), -34);
        assert_eq!(Byte::decode("+105").unwrap().as_i8(), 105);
        assert_eq!(Byte::decode("0").unwrap().as_i8(), 0);
        assert!(Byte::decode("1524").unwrap_err().is_out_of_range());
        assert!(Byte::decode("128").unwrap_err().is_out_of_range());
        assert!(Byte::decode("-129").unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_byte_rejects_malformed_literals() {
        for text in ["0A", "INF", "", "+", "-", "1.0", " 1", "++1"] {
            assert!(
                Byte::decode(text).unwrap_err().is_invalid_format(),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_integer_encoding_is_plain_decimal() {
        assert_eq!(Byte(-128).encode().unwrap(), "-128");
        assert_eq!(Byte(127).encode().unwrap(), "127");
        assert_eq!(Byte::decode("+007").unwrap().encode().unwrap(), "7");
        assert_eq!(Long(i64::MIN).encode().unwrap(), "-9223372036854775808");
    }

    #[test]
    fn test_unsigned_sign_handling() {
        assert_eq!(UnsignedByte::decode("255").unwrap().as_u8(), 255);
        assert_eq!(UnsignedByte::decode("+1").unwrap().as_u8(), 1);
        assert_eq!(UnsignedByte::decode("-0").unwrap().as_u8(), 0);
        assert!(UnsignedByte::decode("-1").unwrap_err().is_out_of_range());
        assert!(UnsignedByte::decode("256").unwrap_err().is_out_of_range());
        assert!(UnsignedByte::decode("-+1").unwrap_err().is_invalid_format());
        assert!(UnsignedLong::decode("18446744073709551616").unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_wider_integers() {
        assert_eq!(Short::decode("-32768").unwrap(), Short::MIN);
        assert!(Short::decode("32768").unwrap_err().is_out_of_range());
        assert_eq!(Int::decode("2147483647").unwrap(), Int::MAX);
        assert_eq!(UnsignedInt::decode("4294967295").unwrap(), UnsignedInt::MAX);
        assert_eq!(UnsignedShort::decode("65535").unwrap(), UnsignedShort::MAX);
    }

    #[test]
    fn test_decimal_pattern_gate() {
        assert_eq!(Decimal::decode("1.5").unwrap().as_f32(), 1.5);
        assert_eq!(Decimal::decode("+.5").unwrap().as_f32(), 0.5);
        assert_eq!(Decimal::decode("-3.").unwrap().as_f32(), -3.0);
        assert_eq!(Decimal::decode("42").unwrap().as_f32(), 42.0);
        for text in ["", "+", ".", "1.2.3", "1e5", "inf", "NaN", " 1", "1,5", "--1"] {
            assert!(
                Decimal::decode(text).unwrap_err().is_invalid_format(),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decimal_uses_single_precision() {
        let d = Decimal::decode("0.1").unwrap();
        assert_eq!(d.as_f32(), 0.1_f32);
        assert_eq!(d.encode().unwrap(), "0.1");
    }

    #[test]
    fn test_decimal_rejects_values_beyond_single_precision() {
        let huge = format!("1{}", "0".repeat(40));
        assert!(Decimal::decode(&huge).unwrap_err().is_invalid_format());
        assert!(Decimal::decode(&format!("-{huge}")).unwrap_err().is_invalid_format());

        let mut dest = Decimal(1.5);
        assert!(dest.decode_into(&huge).is_err());
        assert_eq!(dest.as_f32(), 1.5);

        let large = format!("1{}", "0".repeat(38));
        assert!(Decimal::decode(&large).unwrap().as_f32().is_finite());
    }

    #[test]
    fn test_double_and_float_use_primitive_forms() {
        assert_eq!(Double::decode("2.5").unwrap().as_f64(), 2.5);
        assert_eq!(Double(1.0e-3).encode().unwrap(), "0.001");
        assert_eq!(Float::decode("-0.25").unwrap().as_f32(), -0.25);
        assert!(Double::decode("two").unwrap_err().is_invalid_format());
        assert!(Float::decode("").unwrap_err().is_invalid_format());
    }
}
