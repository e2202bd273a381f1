//! Top-level command errors and how they end the process.

use std::io;
use std::process::ExitCode;

use crate::api::IrailError;
use crate::domain::DomainError;
use crate::stations::StationError;

/// Errors a command can end with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] IrailError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The journey planner found no route
    #[error("No routes found!")]
    NoConnectionsFound,

    #[error("No station like {0} found.")]
    StationNotFound(String),

    /// User closed the input in the middle of a choice
    #[error("Aborted!")]
    Aborted,

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

impl From<StationError> for AppError {
    fn from(err: StationError) -> Self {
        match err {
            StationError::NotFound(name) => AppError::StationNotFound(name),
            StationError::Api(e) => AppError::Api(e),
            StationError::Aborted => AppError::Aborted,
            StationError::Io(e) => AppError::Io(e),
        }
    }
}

impl AppError {
    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(e) if e.is_connectivity() => {
                "Your internet connection doesn't seem to be working.".to_string()
            }
            AppError::Api(_) => "The iRail API doesn't seem to be working.".to_string(),
            other => other.to_string(),
        }
    }

    /// Process exit code.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            AppError::NoConnectionsFound => 0,
            AppError::Domain(_) | AppError::Aborted | AppError::Io(_) => 1,
            AppError::StationNotFound(_) => 2,
            AppError::Api(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(AppError::NoConnectionsFound.code(), 0);
        assert_eq!(AppError::Aborted.code(), 1);
        assert_eq!(AppError::Domain(DomainError::ArrivalBeforeDeparture).code(), 1);
        assert_eq!(AppError::StationNotFound("x".into()).code(), 2);
        assert_eq!(AppError::Api(IrailError::RateLimited).code(), 3);
    }

    #[test]
    fn upstream_failure_message() {
        let err = AppError::Api(IrailError::Api {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.user_message(), "The iRail API doesn't seem to be working.");
    }

    #[test]
    fn station_errors_map_across() {
        let err: AppError = StationError::NotFound("Amsterdam".into()).into();
        assert!(matches!(err, AppError::StationNotFound(ref s) if s == "Amsterdam"));
        assert_eq!(err.user_message(), "No station like Amsterdam found.");

        let err: AppError = StationError::Aborted.into();
        assert_eq!(err.user_message(), "Aborted!");
    }

    #[test]
    fn domain_message_passes_through() {
        let err = AppError::Domain(DomainError::InvalidTimestamp("123".into()));
        assert_eq!(err.user_message(), "invalid timestamp: \"123\"");
    }
}
