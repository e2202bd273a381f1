//! iRail client error types.

/// Errors from the iRail HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum IrailError {
    /// Could not reach the API at all (connect failure or timeout)
    #[error("network unavailable: {0}")]
    NetworkUnavailable(#[source] reqwest::Error),

    /// HTTP request failed after a connection was made
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Rate limited by the API
    #[error("rate limited by iRail API")]
    RateLimited,
}

impl IrailError {
    /// True when the failure is on the user's side of the connection rather
    /// than in the upstream API.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, IrailError::NetworkUnavailable(_))
    }
}

impl From<reqwest::Error> for IrailError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            IrailError::NetworkUnavailable(err)
        } else {
            IrailError::Http(err)
        }
    }
}
