//! Time handling for the iRail API.
//!
//! iRail encodes instants as epoch-second strings ("1500000000") and
//! durations as second counts. This module turns those into the `HH:MM`
//! clock times and `H:MM` durations shown in the terminal, and validates the
//! `HHMM` / `DDMMYY` values a user may pass to a route query.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use std::fmt;

use super::DomainError;

/// Time zone of the Belgian rail network.
pub const NETWORK_TIMEZONE: Tz = chrono_tz::Europe::Brussels;

/// Number of digits in an epoch-second string.
///
/// Anything else means the upstream format changed and must not be guessed at.
const EPOCH_DIGITS: usize = 10;

/// Error returned when parsing an invalid query time or date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct TimeError {
    field: &'static str,
    reason: &'static str,
}

impl TimeError {
    fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// An instant in seconds since the Unix epoch.
///
/// # Examples
///
/// ```
/// use irail::domain::{Epoch, NETWORK_TIMEZONE};
///
/// let epoch = Epoch::parse("1500000000").unwrap();
/// assert_eq!(epoch.format_hhmm(NETWORK_TIMEZONE), "04:40");
///
/// assert!(Epoch::parse("150000000").is_err());
/// assert!(Epoch::parse("15000000O0").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(i64);

impl Epoch {
    /// Create an epoch from a raw second count.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Parse an epoch from the API's fixed-width string form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.len() != EPOCH_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidTimestamp(s.to_string()));
        }

        s.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimestamp(s.to_string()))
    }

    /// Returns the second count.
    pub fn secs(self) -> i64 {
        self.0
    }

    /// Converts to a zoned datetime, if the instant is representable.
    pub fn to_datetime(self, tz: Tz) -> Option<DateTime<Tz>> {
        DateTime::from_timestamp(self.0, 0).map(|dt| dt.with_timezone(&tz))
    }

    /// Formats the wall-clock time in `tz` as `HH:MM`.
    pub fn format_hhmm(self, tz: Tz) -> String {
        self.to_datetime(tz)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}

impl fmt::Debug for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

/// Format an epoch-second string as `HH:MM` in the given time zone.
///
/// Fails with [`DomainError::InvalidTimestamp`] unless the input is exactly
/// ten ASCII digits.
pub fn format_time(timestamp: &str, tz: Tz) -> Result<String, DomainError> {
    Epoch::parse(timestamp).map(|epoch| epoch.format_hhmm(tz))
}

/// Format a second count as `H:MM`.
///
/// ```
/// use irail::domain::format_duration;
///
/// assert_eq!(format_duration(0), "0:00");
/// assert_eq!(format_duration(3000), "0:50");
/// assert_eq!(format_duration(5460), "1:31");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours}:{minutes:02}")
}

/// A departure/arrival time passed to a route query, `HHMM` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTime(NaiveTime);

impl QueryTime {
    /// Parse `HHMM` (exactly four digits, hour 00-23, minute 00-59).
    ///
    /// ```
    /// use irail::domain::QueryTime;
    ///
    /// assert!(QueryTime::parse("0000").is_ok());
    /// assert!(QueryTime::parse("2359").is_ok());
    /// assert!(QueryTime::parse("159").is_err());
    /// assert!(QueryTime::parse("2536").is_err());
    /// assert!(QueryTime::parse("2396").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(TimeError::new("time", "expected HHMM format"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| TimeError::new("time", "invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("time", "hour must be 00-23"));
        }

        let minute = parse_two_digits(&bytes[2..4])
            .ok_or_else(|| TimeError::new("time", "invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("time", "minute must be 00-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("time", "invalid time"))
    }

    /// The `HHMM` form the API expects.
    pub fn as_param(&self) -> String {
        self.0.format("%H%M").to_string()
    }
}

/// A travel date passed to a route query, `DDMMYY` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDate(NaiveDate);

impl QueryDate {
    /// Parse `DDMMYY` into a real calendar date in 2000-2099.
    ///
    /// ```
    /// use irail::domain::QueryDate;
    ///
    /// assert!(QueryDate::parse("290224").is_ok());
    /// assert!(QueryDate::parse("290223").is_err());
    /// assert!(QueryDate::parse("2902").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return Err(TimeError::new("date", "expected DDMMYY format"));
        }

        let day = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| TimeError::new("date", "invalid day digits"))?;
        let month = parse_two_digits(&bytes[2..4])
            .ok_or_else(|| TimeError::new("date", "invalid month digits"))?;
        let year = parse_two_digits(&bytes[4..6])
            .ok_or_else(|| TimeError::new("date", "invalid year digits"))?;

        NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
            .map(Self)
            .ok_or_else(|| TimeError::new("date", "no such calendar date"))
    }

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The `DDMMYY` form the API expects.
    pub fn as_param(&self) -> String {
        self.0.format("%d%m%y").to_string()
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every 10-digit epoch formats to the zone's wall clock
        #[test]
        fn ten_digit_epochs_format(secs in 1_000_000_000i64..=9_999_999_999) {
            let formatted = format_time(&secs.to_string(), NETWORK_TIMEZONE).unwrap();
            let expected = DateTime::from_timestamp(secs, 0)
                .unwrap()
                .with_timezone(&NETWORK_TIMEZONE)
                .format("%H:%M")
                .to_string();
            prop_assert_eq!(formatted, expected);
        }

        /// Formatting is deterministic and always HH:MM
        #[test]
        fn formatted_shape(secs in 1_000_000_000i64..=9_999_999_999) {
            let s = secs.to_string();
            let a = format_time(&s, NETWORK_TIMEZONE).unwrap();
            let b = format_time(&s, NETWORK_TIMEZONE).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.len(), 5);
            prop_assert_eq!(a.as_bytes()[2], b':');
        }

        /// Shorter or longer digit strings are rejected
        #[test]
        fn wrong_width_rejected(s in "[0-9]{0,9}|[0-9]{11,15}") {
            prop_assert!(format_time(&s, NETWORK_TIMEZONE).is_err());
        }

        /// A non-digit anywhere is rejected
        #[test]
        fn non_digit_rejected(prefix in "[0-9]{0,9}", bad in "[^0-9]", pos in 0usize..10) {
            let mut s: String = prefix.chars().chain(std::iter::repeat('0')).take(9).collect();
            s.insert_str(pos.min(9), &bad);
            prop_assert!(format_time(&s, NETWORK_TIMEZONE).is_err());
        }

        /// Duration formatting matches the arithmetic definition
        #[test]
        fn duration_definition(d in 0u64..10_000_000) {
            prop_assert_eq!(
                format_duration(d),
                format!("{}:{:02}", d / 3600, (d % 3600) / 60)
            );
        }

        /// Any in-range HHMM parses and roundtrips
        #[test]
        fn query_time_roundtrip(hour in 0u32..24, minute in 0u32..60) {
            let s = format!("{hour:02}{minute:02}");
            prop_assert_eq!(QueryTime::parse(&s).unwrap().as_param(), s);
        }

        /// Out-of-range minutes are rejected
        #[test]
        fn query_time_bad_minute(hour in 0u32..24, minute in 60u32..100) {
            let s = format!("{hour:02}{minute:02}");
            prop_assert!(QueryTime::parse(&s).is_err());
        }
    }
}
