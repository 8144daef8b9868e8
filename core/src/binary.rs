//! `xsd:base64Binary`.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;
use crate::lexical::{XsdDecode, XsdEncode, impl_lexical_deserialize, impl_lexical_serialize};

/// Arbitrary bytes carried as standard, padded base64 text.
///
/// # Examples
///
/// ```
/// use xsd_lexical_core::{Base64Binary, XsdDecode, XsdEncode};
///
/// let data = Base64Binary::from("qwertyuiop");
/// assert_eq!(data.encode().unwrap(), "cXdlcnR5dWlvcA==");
///
/// let back = Base64Binary::decode("cXdlcnR5dWlvcA==").unwrap();
/// assert_eq!(back.binary(), b"qwertyuiop");
///
/// assert!(Base64Binary::decode("qaz123").unwrap_err().is_invalid_encoding());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Base64Binary(pub Vec<u8>);

impl Base64Binary {
    /// Returns the decoded bytes.
    pub fn binary(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the wrapper and returns the bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Base64Binary {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Base64Binary {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<&str> for Base64Binary {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl fmt::Display for Base64Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(&self.0))
    }
}

impl XsdEncode for Base64Binary {
    const XSD_NAME: &'static str = "base64Binary";
}

impl XsdDecode for Base64Binary {
    fn decode(text: &str) -> Result<Self> {
        let bytes = STANDARD.decode(text)?;
        Ok(Self(bytes))
    }
}

impl_lexical_serialize!(Base64Binary);
impl_lexical_deserialize!(Base64Binary);
