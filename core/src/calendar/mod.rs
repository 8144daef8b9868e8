//! Calendar types with optional time zones.
//!
//! Every calendar value wraps a [`ZonedTime`]: a civil date-time plus the
//! [`Zone`] its text carried. Decoding runs the text through an ordered list
//! of lexical rules (zone suffix first, then the bare form) and keeps the
//! first rule whose match also names a real calendar value. A value decoded
//! without a suffix stays in [`Zone::Local`] and re-encodes without one.
//!
//! # Examples
//!
//! ```
//! use xsd_lexical_core::{Date, XsdDecode, XsdEncode, Zone};
//!
//! let utc = Date::decode("2001-10-26Z").unwrap();
//! assert_eq!(utc.time().zone(), Zone::Utc);
//! assert_eq!(utc.encode().unwrap(), "2001-10-26Z");
//!
//! let floating = Date::decode("2001-10-26").unwrap();
//! assert!(floating.time().zone().is_local());
//! assert_eq!(floating.encode().unwrap(), "2001-10-26");
//! ```

/// Declares a calendar newtype over [`ZonedTime`] with its accessors and
/// `Serialize` impl.
macro_rules! calendar_value {
    ($(#[$meta:meta])* $name:ident, $xsd:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name($crate::ZonedTime);

        impl $name {
            /// Returns the wrapped date-time and zone.
            pub fn time(&self) -> &$crate::ZonedTime {
                &self.0
            }

            /// Zone the value is expressed in.
            pub fn zone(&self) -> $crate::Zone {
                self.0.zone()
            }
        }

        impl $crate::XsdEncode for $name {
            const XSD_NAME: &'static str = $xsd;
        }

        $crate::lexical::impl_lexical_serialize!($name);
    };
}

mod date;
mod gregorian;

use std::fmt;
use std::str::FromStr;

use chrono::{
    Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
};
use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::error::{Result, XsdError};

pub use date::{Date, DateTime};
pub use gregorian::{GDay, GMonth, GMonthDay, GYear, GYearMonth};

/// Largest offset magnitude allowed in a lexical zone suffix (14:00).
const MAX_OFFSET_SECONDS: i32 = 14 * 3600;

/// Year used to anchor values that have no year of their own. It is a leap
/// year so that `--02-29` stays representable.
pub(crate) const REFERENCE_YEAR: i32 = 2000;

const YEAR: &str = r"(?P<year>-?[0-9]{4,})";
const MONTH: &str = r"(?P<month>[0-9]{2})";
const DAY: &str = r"(?P<day>[0-9]{2})";
const TIME: &str =
    r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})(?:\.(?P<fraction>[0-9]+))?";
const ZONE: &str = r"(?P<zone>Z|[+-][0-9]{2}:[0-9]{2})";

/// Time zone classification of a calendar value.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use xsd_lexical_core::Zone;
///
/// let zone = Zone::fixed(FixedOffset::east_opt(2 * 3600).unwrap()).unwrap();
/// assert_eq!(zone.to_string(), "+02:00");
/// assert_eq!(Zone::Utc.to_string(), "Z");
/// assert_eq!(Zone::Local.to_string(), "");
///
/// // +00:00 is an explicit offset, not UTC.
/// let zero: Zone = "+00:00".parse().unwrap();
/// assert!(!zero.is_utc());
/// ```
///
/// Offset zones come only from [`Zone::fixed`] or parsing, so every zone
/// encodes to a suffix that decodes back to it:
///
/// ```compile_fail
/// use chrono::FixedOffset;
/// use xsd_lexical_core::Zone;
///
/// let zone = Zone::Offset(FixedOffset::east_opt(15 * 3600).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    /// No zone in the lexical form; the value is read in the ambient zone.
    #[default]
    Local,
    /// Coordinated Universal Time, written `Z`.
    Utc,
    /// Fixed offset from UTC, written `±HH:MM`.
    Offset(ZoneOffset),
}

/// A whole-minute offset within ±14:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneOffset(FixedOffset);

impl ZoneOffset {
    /// Returns the offset as a chrono value.
    pub fn fixed(self) -> FixedOffset {
        self.0
    }

    /// Signed offset in seconds east of UTC.
    pub fn seconds(self) -> i32 {
        self.0.local_minus_utc()
    }
}

impl Zone {
    /// Builds a fixed-offset zone.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](XsdError::OutOfRange) when the offset exceeds
    /// ±14:00 or is not a whole number of minutes.
    pub fn fixed(offset: FixedOffset) -> Result<Self> {
        let seconds = offset.local_minus_utc();
        if seconds.abs() > MAX_OFFSET_SECONDS || seconds % 60 != 0 {
            return Err(XsdError::out_of_range("timezone", offset.to_string()));
        }
        Ok(Self::Offset(ZoneOffset(offset)))
    }

    /// Returns `true` for [`Zone::Utc`].
    pub fn is_utc(self) -> bool {
        matches!(self, Self::Utc)
    }

    /// Returns `true` for [`Zone::Local`].
    pub fn is_local(self) -> bool {
        matches!(self, Self::Local)
    }

    /// Offset from UTC, or `None` for the ambient zone.
    pub fn offset(self) -> Option<FixedOffset> {
        match self {
            Self::Local => None,
            Self::Utc => FixedOffset::east_opt(0),
            Self::Offset(offset) => Some(offset.fixed()),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => Ok(()),
            Self::Utc => f.write_str("Z"),
            Self::Offset(offset) => {
                let seconds = offset.seconds();
                let sign = if seconds < 0 { '-' } else { '+' };
                let seconds = seconds.abs();
                write!(f, "{sign}{:02}:{:02}", seconds / 3600, seconds % 3600 / 60)
            }
        }
    }
}

impl FromStr for Zone {
    type Err = XsdError;

    /// Parses a zone suffix (`Z`, `+HH:MM`, `-HH:MM`); the empty string is
    /// the ambient zone.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || XsdError::invalid_format("timezone", s);
        match s {
            "" => return Ok(Self::Local),
            "Z" => return Ok(Self::Utc),
            _ => {}
        }

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let is_two_digits =
            |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !is_two_digits(hours) || !is_two_digits(minutes) {
            return Err(invalid());
        }
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }
        let seconds = sign * (hours * 3600 + minutes * 60);
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(invalid());
        }
        FixedOffset::east_opt(seconds)
            .map(|offset| Self::Offset(ZoneOffset(offset)))
            .ok_or_else(invalid)
    }
}

/// A civil date-time together with the zone it was written in.
///
/// This is the instant every calendar type exposes through `time()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZonedTime {
    naive: NaiveDateTime,
    zone: Zone,
}

impl ZonedTime {
    /// Pairs a civil date-time with a zone.
    pub fn new(naive: NaiveDateTime, zone: Zone) -> Self {
        Self { naive, zone }
    }

    /// Civil date-time as written, without zone adjustment.
    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// Zone the value was written in.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Returns `true` when the value carries the `Z` designator.
    pub fn is_utc(&self) -> bool {
        self.zone.is_utc()
    }

    pub fn year(&self) -> i32 {
        self.naive.year()
    }

    /// Month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.naive.month()
    }

    /// Day of month, starting at 1.
    pub fn day(&self) -> u32 {
        self.naive.day()
    }

    pub fn hour(&self) -> u32 {
        self.naive.hour()
    }

    pub fn minute(&self) -> u32 {
        self.naive.minute()
    }

    pub fn second(&self) -> u32 {
        self.naive.second()
    }

    /// Sub-second part in nanoseconds.
    pub fn nanosecond(&self) -> u32 {
        self.naive.nanosecond()
    }

    /// Resolves the value to an absolute instant.
    ///
    /// Ambient-zone values use the host's local offset for that date-time;
    /// returns `None` when the local time does not exist (e.g. inside a DST
    /// gap).
    pub fn to_fixed(&self) -> Option<chrono::DateTime<FixedOffset>> {
        match self.zone.offset() {
            Some(offset) => offset.from_local_datetime(&self.naive).single(),
            None => Local
                .from_local_datetime(&self.naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
        }
    }
}

/// One candidate lexical form of a calendar type.
pub(crate) struct LexicalRule {
    label: &'static str,
    pattern: Regex,
}

impl LexicalRule {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).expect("static regex must compile"),
        }
    }
}

/// Builds the zone-suffixed rule followed by the bare fallback for `body`.
pub(crate) fn zone_rules(body: &str) -> Vec<LexicalRule> {
    vec![
        LexicalRule::new("with-zone", &format!("^{body}{ZONE}$")),
        LexicalRule::new("without-zone", &format!("^{body}$")),
    ]
}

/// Tries each rule in order and returns the first value `build` accepts.
///
/// `build` receives the captures of a lexically matching rule and returns
/// `None` when the fields do not form a real calendar value.
pub(crate) fn decode_with_rules<F>(
    type_name: &'static str,
    rules: &[LexicalRule],
    text: &str,
    build: F,
) -> Result<ZonedTime>
where
    F: Fn(&Captures<'_>) -> Option<NaiveDateTime>,
{
    for rule in rules {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        let zone = match caps.name("zone") {
            Some(m) => match m.as_str().parse::<Zone>() {
                Ok(zone) => zone,
                Err(_) => {
                    trace!(type_name, rule = rule.label, text, "Zone suffix out of range");
                    continue;
                }
            },
            None => Zone::Local,
        };
        match build(&caps) {
            Some(naive) => {
                trace!(type_name, rule = rule.label, text, "Decoded calendar value");
                return Ok(ZonedTime::new(naive, zone));
            }
            None => {
                trace!(type_name, rule = rule.label, text, "Fields do not form a calendar value");
            }
        }
    }

    debug!(type_name, text, "No lexical rule accepted calendar text");
    Err(XsdError::invalid_format(type_name, text))
}

pub(crate) fn field<T: FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

/// Converts fractional-second digits to nanoseconds, truncating past the
/// ninth digit.
pub(crate) fn fraction_nanos(digits: Option<&str>) -> u32 {
    let Some(digits) = digits else {
        return 0;
    };
    let mut nanos = 0u32;
    for (i, b) in digits.bytes().take(9).enumerate() {
        nanos += u32::from(b - b'0') * 10u32.pow(8 - i as u32);
    }
    nanos
}

pub(crate) fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Builds a midnight date-time, reporting impossible fields as out of range.
pub(crate) fn checked_date(
    type_name: &'static str,
    year: i32,
    month: u32,
    day: u32,
) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(midnight)
        .ok_or_else(|| {
            XsdError::out_of_range(type_name, format!("year={year} month={month} day={day}"))
        })
}

/// Writes a year with at least four digits and a leading `-` when negative.
pub(crate) fn write_year(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}
