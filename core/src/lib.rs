//! XML Schema primitive value types with lexical encoding and decoding.
//!
//! Each type wraps one primitive value and converts it to and from the text
//! XSD prescribes for attribute values and character data:
//!
//! - [`Date`], [`DateTime`], [`GYear`] (encode and decode) and
//!   [`GYearMonth`], [`GMonth`], [`GMonthDay`], [`GDay`] (encode only):
//!   calendar values with an optional [`Zone`].
//! - [`Duration`]: `PT<h>H<m>M<s>S` spans (encode only).
//! - [`Base64Binary`]: bytes as padded base64.
//! - [`Boolean`], [`Byte`] and the other fixed-width integers, [`Decimal`],
//!   [`Double`], [`Float`].
//! - [`XsdString`], [`NormalizedString`], [`Token`], [`Name`], [`NcName`],
//!   [`Id`], [`Entity`], [`Entities`], [`AnyUri`]: strings with a
//!   [`WhiteSpace`] facet applied on encode.
//!
//! Every type implements [`XsdEncode`] (plus `Display` and
//! `serde::Serialize`); decodable types also implement [`XsdDecode`] (plus
//! `FromStr` and `serde::Deserialize`), so serde-based XML serializers pick
//! up the lexical forms directly.
//!
//! # Example
//!
//! ```
//! use xsd_lexical_core::*;
//!
//! let born = Date::new(2020, 6, 22, Zone::Utc).unwrap();
//! assert_eq!(born.encode().unwrap(), "2020-06-22Z");
//!
//! let stamp = DateTime::decode("2001-10-26T21:32:52+02:00").unwrap();
//! assert_eq!(stamp.time().hour(), 21);
//! assert!(!stamp.zone().is_utc());
//!
//! let err = Byte::decode("1524").unwrap_err();
//! assert!(err.is_out_of_range());
//! ```

mod binary;
mod calendar;
mod duration;
mod error;
mod lexical;
mod numeric;
mod string;
mod whitespace;

pub use binary::Base64Binary;
pub use calendar::{
    Date, DateTime, GDay, GMonth, GMonthDay, GYear, GYearMonth, Zone, ZoneOffset, ZonedTime,
};
pub use duration::Duration;
pub use error::{Result, XsdError};
pub use lexical::{XsdDecode, XsdEncode};
pub use numeric::{
    Boolean, Byte, Decimal, Double, Float, Int, Long, Short, UnsignedByte, UnsignedInt,
    UnsignedLong, UnsignedShort,
};
pub use string::{
    AnyUri, Entities, Entity, Id, Name, NcName, NormalizedString, Token, XsdString,
};
pub use whitespace::{WhiteSpace, whitespace_collapse, whitespace_preserve, whitespace_replace};
