//! Decodable XSD types addressable by name from the command line and batch
//! files.

use std::fmt;

use serde::{Deserialize, Serialize};
use xsd_lexical_core::{
    AnyUri, Base64Binary, Boolean, Byte, Date, DateTime, Decimal, Double, Entity, Float, GYear, Id,
    Int, Long, Name, NcName, NormalizedString, Short, Token, UnsignedByte, UnsignedInt,
    UnsignedLong, UnsignedShort, XsdDecode, XsdEncode, XsdString,
};

/// XSD type names that support decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum XsdKind {
    #[serde(rename = "string")]
    #[value(name = "string")]
    String,
    #[serde(rename = "normalizedString")]
    #[value(name = "normalizedString")]
    NormalizedString,
    #[serde(rename = "token")]
    #[value(name = "token")]
    Token,
    #[serde(rename = "Name")]
    #[value(name = "Name")]
    Name,
    #[serde(rename = "NCName")]
    #[value(name = "NCName")]
    NcName,
    #[serde(rename = "ID")]
    #[value(name = "ID")]
    Id,
    #[serde(rename = "ENTITY")]
    #[value(name = "ENTITY")]
    Entity,
    #[serde(rename = "anyURI")]
    #[value(name = "anyURI")]
    AnyUri,
    #[serde(rename = "boolean")]
    #[value(name = "boolean")]
    Boolean,
    #[serde(rename = "byte")]
    #[value(name = "byte")]
    Byte,
    #[serde(rename = "short")]
    #[value(name = "short")]
    Short,
    #[serde(rename = "int")]
    #[value(name = "int")]
    Int,
    #[serde(rename = "long")]
    #[value(name = "long")]
    Long,
    #[serde(rename = "unsignedByte")]
    #[value(name = "unsignedByte")]
    UnsignedByte,
    #[serde(rename = "unsignedShort")]
    #[value(name = "unsignedShort")]
    UnsignedShort,
    #[serde(rename = "unsignedInt")]
    #[value(name = "unsignedInt")]
    UnsignedInt,
    #[serde(rename = "unsignedLong")]
    #[value(name = "unsignedLong")]
    UnsignedLong,
    #[serde(rename = "decimal")]
    #[value(name = "decimal")]
    Decimal,
    #[serde(rename = "double")]
    #[value(name = "double")]
    Double,
    #[serde(rename = "float")]
    #[value(name = "float")]
    Float,
    #[serde(rename = "base64Binary")]
    #[value(name = "base64Binary")]
    Base64Binary,
    #[serde(rename = "date")]
    #[value(name = "date")]
    Date,
    #[serde(rename = "dateTime")]
    #[value(name = "dateTime")]
    DateTime,
    #[serde(rename = "gYear")]
    #[value(name = "gYear")]
    GYear,
}

fn canonical<T>(text: &str) -> xsd_lexical_core::Result<String>
where
    T: XsdDecode + XsdEncode,
{
    T::decode(text)?.encode()
}

impl XsdKind {
    /// XSD built-in type name.
    pub fn xsd_name(self) -> &'static str {
        match self {
            Self::String => XsdString::XSD_NAME,
            Self::NormalizedString => NormalizedString::XSD_NAME,
            Self::Token => Token::XSD_NAME,
            Self::Name => Name::XSD_NAME,
            Self::NcName => NcName::XSD_NAME,
            Self::Id => Id::XSD_NAME,
            Self::Entity => Entity::XSD_NAME,
            Self::AnyUri => AnyUri::XSD_NAME,
            Self::Boolean => Boolean::XSD_NAME,
            Self::Byte => Byte::XSD_NAME,
            Self::Short => Short::XSD_NAME,
            Self::Int => Int::XSD_NAME,
            Self::Long => Long::XSD_NAME,
            Self::UnsignedByte => UnsignedByte::XSD_NAME,
            Self::UnsignedShort => UnsignedShort::XSD_NAME,
            Self::UnsignedInt => UnsignedInt::XSD_NAME,
            Self::UnsignedLong => UnsignedLong::XSD_NAME,
            Self::Decimal => Decimal::XSD_NAME,
            Self::Double => Double::XSD_NAME,
            Self::Float => Float::XSD_NAME,
            Self::Base64Binary => Base64Binary::XSD_NAME,
            Self::Date => Date::XSD_NAME,
            Self::DateTime => DateTime::XSD_NAME,
            Self::GYear => GYear::XSD_NAME,
        }
    }

    /// Decodes `text` as this type and returns its canonical re-encoding.
    pub fn canonicalize(self, text: &str) -> xsd_lexical_core::Result<String> {
        match self {
            Self::String => canonical::<XsdString>(text),
            Self::NormalizedString => canonical::<NormalizedString>(text),
            Self::Token => canonical::<Token>(text),
            Self::Name => canonical::<Name>(text),
            Self::NcName => canonical::<NcName>(text),
            Self::Id => canonical::<Id>(text),
            Self::Entity => canonical::<Entity>(text),
            Self::AnyUri => canonical::<AnyUri>(text),
            Self::Boolean => canonical::<Boolean>(text),
            Self::Byte => canonical::<Byte>(text),
            Self::Short => canonical::<Short>(text),
            Self::Int => canonical::<Int>(text),
            Self::Long => canonical::<Long>(text),
            Self::UnsignedByte => canonical::<UnsignedByte>(text),
            Self::UnsignedShort => canonical::<UnsignedShort>(text),
            Self::UnsignedInt => canonical::<UnsignedInt>(text),
            Self::UnsignedLong => canonical::<UnsignedLong>(text),
            Self::Decimal => canonical::<Decimal>(text),
            Self::Double => canonical::<Double>(text),
            Self::Float => canonical::<Float>(text),
            Self::Base64Binary => canonical::<Base64Binary>(text),
            Self::Date => canonical::<Date>(text),
            Self::DateTime => canonical::<DateTime>(text),
            Self::GYear => canonical::<GYear>(text),
        }
    }
}

impl fmt::Display for XsdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xsd_name())
    }
}
