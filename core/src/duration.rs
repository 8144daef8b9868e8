//! `xsd:duration`, restricted to hours, minutes, and seconds. Encode only.

use std::fmt;

use chrono::TimeDelta;

use crate::error::{Result, XsdError};
use crate::lexical::{XsdEncode, impl_lexical_serialize};

/// Elapsed time written as `[-]PT<h>H<m>M<s>S`.
///
/// Zero components are omitted; hours are not folded into days. A zero span
/// is written `PT0S`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use xsd_lexical_core::{Duration, XsdEncode};
///
/// let d = Duration::from(TimeDelta::hours(1) + TimeDelta::seconds(30));
/// assert_eq!(d.encode().unwrap(), "PT1H30S");
///
/// let d = Duration::from(TimeDelta::milliseconds(-90_250));
/// assert_eq!(d.encode().unwrap(), "-PT1M30.25S");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(pub TimeDelta);

impl Duration {
    /// Converts an unsigned standard-library duration.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`](XsdError::OutOfRange) when the span does not
    /// fit a signed 64-bit millisecond count.
    pub fn from_std(span: std::time::Duration) -> Result<Self> {
        TimeDelta::from_std(span)
            .map(Self)
            .map_err(|_| XsdError::out_of_range(Self::XSD_NAME, format!("{span:?}")))
    }

    /// Returns the wrapped span.
    pub fn span(&self) -> TimeDelta {
        self.0
    }
}

impl From<TimeDelta> for Duration {
    fn from(value: TimeDelta) -> Self {
        Self(value)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.num_seconds();
        let nanos = self.0.subsec_nanos();
        if secs < 0 || nanos < 0 {
            f.write_str("-")?;
        }
        let secs = secs.unsigned_abs();
        let nanos = nanos.unsigned_abs();

        let hours = secs / 3600;
        let minutes = secs % 3600 / 60;
        let seconds = secs % 60;

        f.write_str("PT")?;
        if hours > 0 {
            write!(f, "{hours}H")?;
        }
        if minutes > 0 {
            write!(f, "{minutes}M")?;
        }
        if seconds > 0 || nanos > 0 {
            write!(f, "{seconds}")?;
            if nanos > 0 {
                let digits = format!("{nanos:09}");
                write!(f, ".{}", digits.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        } else if hours == 0 && minutes == 0 {
            f.write_str("0S")?;
        }
        Ok(())
    }
}

impl XsdEncode for Duration {
    const XSD_NAME: &'static str = "duration";
}

impl_lexical_serialize!(Duration);
