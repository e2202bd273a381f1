//! Delay and cancellation state of a stop.

use super::DomainError;
use super::sentinel::{DELAY_CANCELLED, DELAY_ON_TIME};

/// How late a train is at a stop.
///
/// # Examples
///
/// ```
/// use irail::domain::Delay;
///
/// assert_eq!(Delay::parse("0").unwrap(), Delay::OnTime);
/// assert_eq!(Delay::parse("cancel").unwrap(), Delay::Cancelled);
/// assert_eq!(Delay::parse("300").unwrap().minutes(), 5);
/// assert!(Delay::parse("late").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    OnTime,
    Late { seconds: i64 },
    Cancelled,
}

impl Delay {
    /// Parse the API's `delay` field.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            DELAY_ON_TIME => Ok(Delay::OnTime),
            DELAY_CANCELLED => Ok(Delay::Cancelled),
            other => match other.parse::<i64>() {
                Ok(0) => Ok(Delay::OnTime),
                Ok(seconds) => Ok(Delay::Late { seconds }),
                Err(_) => Err(DomainError::InvalidDelay(other.to_string())),
            },
        }
    }

    /// Parse an optional `delay` field; absent means on time.
    pub fn from_field(field: Option<&str>) -> Result<Self, DomainError> {
        field.map_or(Ok(Delay::OnTime), Delay::parse)
    }

    /// Delay in whole minutes (zero unless late).
    pub fn minutes(&self) -> i64 {
        match self {
            Delay::Late { seconds } => seconds / 60,
            _ => 0,
        }
    }

    /// Delay in seconds (zero unless late).
    pub fn seconds(&self) -> i64 {
        match self {
            Delay::Late { seconds } => *seconds,
            _ => 0,
        }
    }

    pub fn is_late(&self) -> bool {
        matches!(self, Delay::Late { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Delay::Cancelled)
    }

    /// Short marker such as `+5`, empty when on time or cancelled.
    pub fn marker(&self) -> String {
        match self {
            Delay::Late { .. } => format!("{:+}", self.minutes()),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sentinels() {
        assert_eq!(Delay::parse("0"), Ok(Delay::OnTime));
        assert_eq!(Delay::parse("cancel"), Ok(Delay::Cancelled));
    }

    #[test]
    fn parse_seconds() {
        assert_eq!(Delay::parse("360"), Ok(Delay::Late { seconds: 360 }));
        assert_eq!(Delay::parse("360").unwrap().minutes(), 6);
        assert_eq!(Delay::parse("59").unwrap().minutes(), 0);
    }

    #[test]
    fn sentinel_is_case_sensitive() {
        assert_eq!(
            Delay::parse("CANCEL"),
            Err(DomainError::InvalidDelay("CANCEL".into()))
        );
    }

    #[test]
    fn missing_field_is_on_time() {
        assert_eq!(Delay::from_field(None), Ok(Delay::OnTime));
        assert_eq!(Delay::from_field(Some("120")), Ok(Delay::Late { seconds: 120 }));
    }

    #[test]
    fn markers() {
        assert_eq!(Delay::OnTime.marker(), "");
        assert_eq!(Delay::Cancelled.marker(), "");
        assert_eq!(Delay::Late { seconds: 300 }.marker(), "+5");
        assert_eq!(Delay::Late { seconds: -120 }.marker(), "-2");
    }

    #[test]
    fn predicates() {
        assert!(Delay::Late { seconds: 60 }.is_late());
        assert!(!Delay::OnTime.is_late());
        assert!(Delay::Cancelled.is_cancelled());
        assert_eq!(Delay::Cancelled.seconds(), 0);
    }
}
