//! `xsd:date` and `xsd:dateTime`.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use regex::Captures;

use super::{
    DAY, LexicalRule, MONTH, TIME, YEAR, Zone, ZonedTime, checked_date, decode_with_rules, field,
    fraction_nanos, midnight, write_year,
};
use crate::error::{Result, XsdError};
use crate::lexical::{XsdDecode, XsdEncode, impl_lexical_deserialize};

static DATE_RULES: LazyLock<Vec<LexicalRule>> =
    LazyLock::new(|| super::zone_rules(&format!("{YEAR}-{MONTH}-{DAY}")));

static DATE_TIME_RULES: LazyLock<Vec<LexicalRule>> =
    LazyLock::new(|| super::zone_rules(&format!("{YEAR}-{MONTH}-{DAY}T{TIME}")));

fn date_fields(caps: &Captures<'_>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        field(caps, "year")?,
        field(caps, "month")?,
        field(caps, "day")?,
    )
}

fn time_fields(caps: &Captures<'_>) -> Option<NaiveTime> {
    let nanos = fraction_nanos(caps.name("fraction").map(|m| m.as_str()));
    NaiveTime::from_hms_nano_opt(
        field(caps, "hour")?,
        field(caps, "minute")?,
        field(caps, "second")?,
        nanos,
    )
}

calendar_value!(
    /// `xsd:date`: `[-]YYYY-MM-DD` with an optional zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_lexical_core::{Date, XsdDecode, XsdEncode, Zone};
    ///
    /// let born = Date::new(2020, 6, 22, Zone::Utc).unwrap();
    /// assert_eq!(born.encode().unwrap(), "2020-06-22Z");
    ///
    /// let parsed = Date::decode("2001-10-26+02:00").unwrap();
    /// assert_eq!((parsed.time().year(), parsed.time().month()), (2001, 10));
    /// assert!(!parsed.zone().is_utc());
    ///
    /// assert!(Date::decode("2001-13-26+02:00").is_err());
    /// ```
    Date,
    "date"
);

impl Date {
    /// Builds a date from calendar fields.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](XsdError::OutOfRange) when the fields do not
    /// name a real date.
    pub fn new(year: i32, month: u32, day: u32, zone: Zone) -> Result<Self> {
        let naive = checked_date(Self::XSD_NAME, year, month, day)?;
        Ok(Self(ZonedTime::new(naive, zone)))
    }

    pub fn from_naive_date(date: NaiveDate, zone: Zone) -> Self {
        Self(ZonedTime::new(midnight(date), zone))
    }

    /// Calendar date without zone.
    pub fn date(&self) -> NaiveDate {
        self.0.naive().date()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.0;
        write_year(f, t.year())?;
        write!(f, "-{:02}-{:02}{}", t.month(), t.day(), t.zone())
    }
}

impl XsdDecode for Date {
    fn decode(text: &str) -> Result<Self> {
        decode_with_rules(Self::XSD_NAME, &DATE_RULES, text, |caps| {
            date_fields(caps).map(midnight)
        })
        .map(Self)
    }
}

calendar_value!(
    /// `xsd:dateTime`: `[-]YYYY-MM-DDThh:mm:ss[.fff…]` with an optional zone.
    ///
    /// Fractional seconds of any length are accepted; digits beyond
    /// nanosecond resolution are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_lexical_core::{DateTime, XsdDecode, XsdEncode, Zone};
    ///
    /// let dt = DateTime::new(2020, 6, 22, 12, 0, 0, Zone::Utc).unwrap();
    /// assert_eq!(dt.encode().unwrap(), "2020-06-22T12:00:00Z");
    ///
    /// let parsed = DateTime::decode("2001-10-26T21:32:52.12679").unwrap();
    /// assert_eq!(parsed.time().nanosecond(), 126_790_000);
    /// assert!(parsed.zone().is_local());
    ///
    /// assert!(DateTime::decode("2001-10-26T25:32:52+02:00").is_err());
    /// ```
    DateTime,
    "dateTime"
);

impl DateTime {
    /// Builds a date-time from calendar fields with a zero sub-second part.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](XsdError::OutOfRange) when the fields do not
    /// name a real date-time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        zone: Zone,
    ) -> Result<Self> {
        let date = checked_date(Self::XSD_NAME, year, month, day)?.date();
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            XsdError::out_of_range(
                Self::XSD_NAME,
                format!("hour={hour} minute={minute} second={second}"),
            )
        })?;
        Ok(Self(ZonedTime::new(date.and_time(time), zone)))
    }

    /// Wraps a civil date-time; a leap-second fraction is folded back into
    /// the regular second.
    pub fn from_naive(naive: NaiveDateTime, zone: Zone) -> Self {
        let nanos = naive.nanosecond() % 1_000_000_000;
        let naive = naive.with_nanosecond(nanos).unwrap_or(naive);
        Self(ZonedTime::new(naive, zone))
    }

    /// Replaces the sub-second part.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](XsdError::OutOfRange) unless
    /// `nanos < 1_000_000_000`.
    pub fn with_nanosecond(self, nanos: u32) -> Result<Self> {
        if nanos >= 1_000_000_000 {
            return Err(XsdError::out_of_range(
                Self::XSD_NAME,
                format!("nanosecond={nanos}"),
            ));
        }
        let naive = self.0.naive().with_nanosecond(nanos).ok_or_else(|| {
            XsdError::out_of_range(Self::XSD_NAME, format!("nanosecond={nanos}"))
        })?;
        Ok(Self(ZonedTime::new(naive, self.0.zone())))
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(value: chrono::DateTime<Utc>) -> Self {
        Self::from_naive(value.naive_utc(), Zone::Utc)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.0;
        write_year(f, t.year())?;
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            t.month(),
            t.day(),
            t.hour(),
            t.minute(),
            t.second()
        )?;
        let nanos = t.nanosecond();
        if nanos != 0 {
            let digits = format!("{nanos:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        write!(f, "{}", t.zone())
    }
}

impl XsdDecode for DateTime {
    fn decode(text: &str) -> Result<Self> {
        decode_with_rules(Self::XSD_NAME, &DATE_TIME_RULES, text, |caps| {
            Some(date_fields(caps)?.and_time(time_fields(caps)?))
        })
        .map(Self)
    }
}

impl_lexical_deserialize!(Date, DateTime);
