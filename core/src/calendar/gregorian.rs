//! Partial and recurring Gregorian types: `gYear`, `gYearMonth`, `gMonth`,
//! `gMonthDay`, `gDay`.
//!
//! Only `gYear` decodes; the other four encode only. Values without a year
//! of their own are anchored in [`REFERENCE_YEAR`] (and January for `gDay`).

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::{
    LexicalRule, REFERENCE_YEAR, YEAR, Zone, ZonedTime, checked_date, decode_with_rules, field,
    midnight, write_year,
};
use crate::error::Result;
use crate::lexical::{XsdDecode, XsdEncode, impl_lexical_deserialize};

static G_YEAR_RULES: LazyLock<Vec<LexicalRule>> = LazyLock::new(|| super::zone_rules(YEAR));

calendar_value!(
    /// `xsd:gYear`: a Gregorian year, `[-]YYYY` with an optional zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_lexical_core::{GYear, XsdDecode, XsdEncode, Zone};
    ///
    /// let y = GYear::decode("1999-05:00").unwrap();
    /// assert_eq!(y.year(), 1999);
    /// assert_eq!(y.encode().unwrap(), "1999-05:00");
    /// assert_eq!(GYear::new(-44, Zone::Utc).unwrap().encode().unwrap(), "-0044Z");
    /// ```
    GYear,
    "gYear"
);

impl GYear {
    /// Builds a year value; the instant is January 1st of that year.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](crate::XsdError::OutOfRange) for years the
    /// calendar cannot represent.
    pub fn new(year: i32, zone: Zone) -> Result<Self> {
        let naive = checked_date(Self::XSD_NAME, year, 1, 1)?;
        Ok(Self(ZonedTime::new(naive, zone)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for GYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.0.year())?;
        write!(f, "{}", self.0.zone())
    }
}

impl XsdDecode for GYear {
    fn decode(text: &str) -> Result<Self> {
        decode_with_rules(Self::XSD_NAME, &G_YEAR_RULES, text, |caps| {
            NaiveDate::from_ymd_opt(field(caps, "year")?, 1, 1).map(midnight)
        })
        .map(Self)
    }
}

impl_lexical_deserialize!(GYear);

calendar_value!(
    /// `xsd:gYearMonth`: `[-]YYYY-MM` with an optional zone. Encode only.
    GYearMonth,
    "gYearMonth"
);

impl GYearMonth {
    /// Builds a year-month value; the instant is the first of that month.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](crate::XsdError::OutOfRange) for a month
    /// outside `1..=12` or an unrepresentable year.
    pub fn new(year: i32, month: u32, zone: Zone) -> Result<Self> {
        let naive = checked_date(Self::XSD_NAME, year, month, 1)?;
        Ok(Self(ZonedTime::new(naive, zone)))
    }
}

impl fmt::Display for GYearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.0.year())?;
        write!(f, "-{:02}{}", self.0.month(), self.0.zone())
    }
}

calendar_value!(
    /// `xsd:gMonth`: a recurring month, `--MM` with an optional zone.
    /// Encode only.
    GMonth,
    "gMonth"
);

impl GMonth {
    /// Builds a month value.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](crate::XsdError::OutOfRange) for a month
    /// outside `1..=12`.
    pub fn new(month: u32, zone: Zone) -> Result<Self> {
        let naive = checked_date(Self::XSD_NAME, REFERENCE_YEAR, month, 1)?;
        Ok(Self(ZonedTime::new(naive, zone)))
    }
}

impl fmt::Display for GMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}{}", self.0.month(), self.0.zone())
    }
}

calendar_value!(
    /// `xsd:gMonthDay`: a recurring day of the year, `--MM-DD` with an
    /// optional zone. Encode only.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_lexical_core::{GMonthDay, XsdEncode, Zone};
    ///
    /// let leap_day = GMonthDay::new(2, 29, Zone::Local).unwrap();
    /// assert_eq!(leap_day.encode().unwrap(), "--02-29");
    /// ```
    GMonthDay,
    "gMonthDay"
);

impl GMonthDay {
    /// Builds a month-day value. February 29th is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](crate::XsdError::OutOfRange) when the day does
    /// not exist in that month.
    pub fn new(month: u32, day: u32, zone: Zone) -> Result<Self> {
        let naive = checked_date(Self::XSD_NAME, REFERENCE_YEAR, month, day)?;
        Ok(Self(ZonedTime::new(naive, zone)))
    }
}

impl fmt::Display for GMonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "--{:02}-{:02}{}",
            self.0.month(),
            self.0.day(),
            self.0.zone()
        )
    }
}

calendar_value!(
    /// `xsd:gDay`: a recurring day of the month, `---DD` with an optional
    /// zone. Encode only.
    GDay,
    "gDay"
);

impl GDay {
    /// Builds a day-of-month value.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](crate::XsdError::OutOfRange) for a day outside
    /// `1..=31`.
    pub fn new(day: u32, zone: Zone) -> Result<Self> {
        let naive = checked_date(Self::XSD_NAME, REFERENCE_YEAR, 1, day)?;
        Ok(Self(ZonedTime::new(naive, zone)))
    }
}

impl fmt::Display for GDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---{:02}{}", self.0.day(), self.0.zone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn plus(hours: i32) -> Zone {
        Zone::fixed(FixedOffset::east_opt(hours * 3600).unwrap()).unwrap()
    }

    #[test]
    fn test_g_year_decode() {
        let plain = GYear::decode("2001").unwrap();
        assert_eq!(plain.year(), 2001);
        assert!(plain.zone().is_local());

        assert!(GYear::decode("2001Z").unwrap().zone().is_utc());
        assert_eq!(GYear::decode("-0044").unwrap().year(), -44);
        assert_eq!(GYear::decode("2001+03:00").unwrap().zone(), plus(3));

        for text in ["01", "2001-10", "year", "2001 ", "+2001"] {
            assert!(
                GYear::decode(text).unwrap_err().is_invalid_format(),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_g_year_round_trip() {
        for text in ["2001", "2001Z", "-0044+01:00", "10000"] {
            assert_eq!(GYear::decode(text).unwrap().encode().unwrap(), text);
        }
    }

    #[test]
    fn test_g_year_month_encode() {
        let ym = GYearMonth::new(2001, 10, Zone::Utc).unwrap();
        assert_eq!(ym.encode().unwrap(), "2001-10Z");
        assert_eq!(ym.time().day(), 1);
        assert!(GYearMonth::new(2001, 13, Zone::Utc).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_g_month_encode() {
        assert_eq!(GMonth::new(5, Zone::Local).unwrap().encode().unwrap(), "--05");
        assert_eq!(GMonth::new(12, plus(-5)).unwrap().encode().unwrap(), "--12-05:00");
        assert!(GMonth::new(0, Zone::Utc).is_err());
    }

    #[test]
    fn test_g_month_day_encode() {
        assert_eq!(
            GMonthDay::new(12, 25, Zone::Utc).unwrap().encode().unwrap(),
            "--12-25Z"
        );
        assert!(GMonthDay::new(2, 30, Zone::Utc).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_g_day_encode() {
        let day = GDay::new(7, plus(2)).unwrap();
        assert_eq!(day.encode().unwrap(), "---07+02:00");
        assert_eq!(day.time().day(), 7);
        assert!(GDay::new(32, Zone::Utc).is_err());
    }
}
