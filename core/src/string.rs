//! String-family types and their whitespace handling.
//!
//! Each type is a restriction of the one before it in the XSD hierarchy
//! (`string` → `normalizedString` → `token` → `Name` → `NCName` → `ID` /
//! `ENTITY`) but is modeled as its own type with its own encoding contract.
//! The whitespace facet is applied on encode; decode keeps the text as
//! received.
//!
//! The name-character patterns of `Name`, `NCName`, `ID`, and `ENTITY` are
//! not checked.
//!
//! # Examples
//!
//! ```
//! use xsd_lexical_core::{AnyUri, NormalizedString, XsdEncode};
//!
//! assert_eq!(AnyUri::new(" 123 ").encode().unwrap(), "123");
//! assert_eq!(NormalizedString::new("a\tb").encode().unwrap(), "a b");
//! ```

use std::fmt;

use crate::error::Result;
use crate::lexical::{XsdDecode, XsdEncode, impl_lexical_deserialize, impl_lexical_serialize};
use crate::whitespace::WhiteSpace;

macro_rules! string_type {
    ($(#[$meta:meta])* $name:ident, $xsd:literal, $mode:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub String);

        impl $name {
            /// Whitespace facet applied when encoding.
            pub const WHITE_SPACE: WhiteSpace = $mode;

            /// Wraps `value` without normalizing it.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the stored text as given.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the stored text.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&Self::WHITE_SPACE.apply(&self.0))
            }
        }

        impl XsdEncode for $name {
            const XSD_NAME: &'static str = $xsd;
        }

        impl XsdDecode for $name {
            fn decode(text: &str) -> Result<Self> {
                Ok(Self(text.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl_lexical_serialize!($name);
        impl_lexical_deserialize!($name);
    };
}

string_type!(
    /// `xsd:string`: any character data, whitespace preserved.
    XsdString,
    "string",
    WhiteSpace::Preserve
);

string_type!(
    /// `xsd:normalizedString`: tabs and line breaks replaced by spaces.
    NormalizedString,
    "normalizedString",
    WhiteSpace::Replace
);

string_type!(
    /// `xsd:token`: normalized and trimmed.
    Token,
    "token",
    WhiteSpace::Collapse
);

string_type!(
    /// `xsd:Name`: an XML 1.0 name.
    Name,
    "Name",
    WhiteSpace::Collapse
);

string_type!(
    /// `xsd:NCName`: a name without colons.
    NcName,
    "NCName",
    WhiteSpace::Collapse
);

string_type!(
    /// `xsd:ID`: a document-unique identifier.
    Id,
    "ID",
    WhiteSpace::Collapse
);

string_type!(
    /// `xsd:ENTITY`: the name of an unparsed entity.
    Entity,
    "ENTITY",
    WhiteSpace::Collapse
);

string_type!(
    /// `xsd:anyURI`: a URI reference.
    AnyUri,
    "anyURI",
    WhiteSpace::Collapse
);

/// `xsd:ENTITIES`: a whitespace-separated list of [`Entity`] values.
///
/// Encode only.
///
/// # Examples
///
/// ```
/// use xsd_lexical_core::{Entities, Entity, XsdEncode};
///
/// let list = Entities::from(vec![Entity::new("logo"), Entity::new(" banner\t")]);
/// assert_eq!(list.encode().unwrap(), "logo banner");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Entities(pub Vec<Entity>);

impl Entities {
    /// Returns the entities in order.
    pub fn entities(&self) -> &[Entity] {
        &self.0
    }
}

impl From<Vec<Entity>> for Entities {
    fn from(value: Vec<Entity>) -> Self {
        Self(value)
    }
}

impl FromIterator<Entity> for Entities {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Entities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entity) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{entity}")?;
        }
        Ok(())
    }
}

impl XsdEncode for Entities {
    const XSD_NAME: &'static str = "ENTITIES";
}

impl_lexical_serialize!(Entities);
