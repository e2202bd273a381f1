//! Domain error types.
//!
//! These errors mean the upstream payload broke its contract: a field was
//! present but not in the shape iRail documents. They are distinct from
//! API/IO errors and are never recovered inside the normalizer.

/// Domain-level errors for validation of upstream data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Epoch timestamp is not a 10-digit numeric string
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Vehicle id does not look like `[prefix.]IC545`
    #[error("invalid vehicle identifier: {0:?}")]
    InvalidVehicleIdentifier(String),

    /// Delay is neither a second count nor a known sentinel
    #[error("invalid delay: {0:?}")]
    InvalidDelay(String),

    /// Itinerary arrives before it departs
    #[error("itinerary arrives before it departs")]
    ArrivalBeforeDeparture,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidTimestamp("123".into());
        assert_eq!(err.to_string(), "invalid timestamp: \"123\"");

        let err = DomainError::InvalidVehicleIdentifier("BE.NMBS.".into());
        assert_eq!(err.to_string(), "invalid vehicle identifier: \"BE.NMBS.\"");

        let err = DomainError::InvalidDelay("late".into());
        assert_eq!(err.to_string(), "invalid delay: \"late\"");

        let err = DomainError::ArrivalBeforeDeparture;
        assert_eq!(err.to_string(), "itinerary arrives before it departs");
    }
}
