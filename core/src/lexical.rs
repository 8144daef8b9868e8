//! Encode/decode capability shared by every value type.
//!
//! [`XsdEncode`] produces the canonical lexical form of a value and
//! [`XsdDecode`] parses one. Document serializers reach both through serde:
//! the `impl_lexical_serialize!` / `impl_lexical_deserialize!` macros wire a
//! type's `Serialize` to [`XsdEncode::encode`] and its `Deserialize` (plus
//! `FromStr`) to [`XsdDecode::decode`].
//!
//! # Examples
//!
//! ```
//! use xsd_lexical_core::{Boolean, XsdDecode, XsdEncode};
//!
//! let flag = Boolean::decode("1").unwrap();
//! assert_eq!(flag.encode().unwrap(), "true");
//!
//! // A failed decode leaves the destination untouched.
//! let mut dest = Boolean::from(false);
//! assert!(dest.decode_into("yes").is_err());
//! assert!(!dest.as_bool());
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};

use crate::error::Result;

/// Conversion of a value to its XSD lexical representation.
///
/// The [`Display`](fmt::Display) impl writes the canonical form; `encode`
/// exists so callers can treat every type uniformly and propagate errors.
pub trait XsdEncode: fmt::Display {
    /// XSD built-in type name (e.g. `"dateTime"`).
    const XSD_NAME: &'static str;

    /// Returns the canonical lexical form of this value.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in types.
    fn encode(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

/// Conversion of XSD lexical text into a value.
pub trait XsdDecode: Sized {
    /// Parses `text` into a new value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat`](crate::XsdError::InvalidFormat),
    /// [`OutOfRange`](crate::XsdError::OutOfRange), or
    /// [`InvalidEncoding`](crate::XsdError::InvalidEncoding) depending on
    /// how `text` is rejected.
    fn decode(text: &str) -> Result<Self>;

    /// Replaces `self` with the value decoded from `text`.
    ///
    /// On failure `self` keeps its prior value.
    fn decode_into(&mut self, text: &str) -> Result<()> {
        *self = Self::decode(text)?;
        Ok(())
    }
}

/// Serde visitor that accepts a string and runs it through [`XsdDecode`].
pub(crate) struct LexicalVisitor<T>(PhantomData<T>);

impl<T> LexicalVisitor<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T> Visitor<'de> for LexicalVisitor<T>
where
    T: XsdDecode + XsdEncode,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an xsd:{} lexical string", T::XSD_NAME)
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        T::decode(value).map_err(|e| E::custom(e.to_string()))
    }
}

/// Implements `serde::Serialize` through [`XsdEncode::encode`].
macro_rules! impl_lexical_serialize {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    let text = $crate::XsdEncode::encode(self)
                        .map_err(<S::Error as ::serde::ser::Error>::custom)?;
                    serializer.serialize_str(&text)
                }
            }
        )+
    };
}

/// Implements `serde::Deserialize` and `FromStr` through [`XsdDecode::decode`].
macro_rules! impl_lexical_deserialize {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    deserializer.deserialize_str($crate::lexical::LexicalVisitor::<$ty>::new())
                }
            }

            impl ::std::str::FromStr for $ty {
                type Err = $crate::XsdError;

                fn from_str(text: &str) -> ::std::result::Result<Self, Self::Err> {
                    <$ty as $crate::XsdDecode>::decode(text)
                }
            }
        )+
    };
}

pub(crate) use impl_lexical_deserialize;
pub(crate) use impl_lexical_serialize;
