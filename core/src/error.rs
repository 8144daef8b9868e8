//! Error types for lexical encoding and decoding.
//!
//! Every decode failure falls into one of three kinds: the text does not match
//! the type's lexical pattern, the text is well formed but names a value the
//! type cannot hold, or binary text is not valid base64.

use thiserror::Error;

/// Errors produced when converting between values and their lexical form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XsdError {
    /// Text does not match the lexical pattern of the target type.
    #[error("invalid {type_name} lexical form: {text:?}")]
    InvalidFormat {
        /// XSD name of the target type (e.g. `"date"`).
        type_name: &'static str,
        /// The rejected text.
        text: String,
    },

    /// Text is well formed but the value lies outside the type's range.
    #[error("{type_name} value out of range: {text:?}")]
    OutOfRange {
        /// XSD name of the target type (e.g. `"byte"`).
        type_name: &'static str,
        /// The rejected text or field description.
        text: String,
    },

    /// Binary text is not valid standard base64.
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
}

impl XsdError {
    pub(crate) fn invalid_format(type_name: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidFormat {
            type_name,
            text: text.into(),
        }
    }

    pub(crate) fn out_of_range(type_name: &'static str, text: impl Into<String>) -> Self {
        Self::OutOfRange {
            type_name,
            text: text.into(),
        }
    }

    /// Returns `true` for [`XsdError::InvalidFormat`].
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns `true` for [`XsdError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` for [`XsdError::InvalidEncoding`].
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, Self::InvalidEncoding(_))
    }
}

/// Convenience alias for results with [`XsdError`].
pub type Result<T> = std::result::Result<T, XsdError>;
