//! iRail HTTP client.
//!
//! Provides blocking methods for the iRail endpoints this tool uses. Every
//! request carries a bounded timeout so an unreachable API fails with
//! `NetworkUnavailable` instead of hanging.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::domain::{QueryDate, QueryTime};

use super::error::IrailError;
use super::types::{
    ConnectionsResponse, LiveboardResponse, RawConnection, StationSuggestion, StationsResponse,
    VehicleResponse,
};

/// Default base URL for the iRail API.
pub const DEFAULT_BASE_URL: &str = "https://api.irail.be";

/// Default URL of the station search endpoint.
pub const DEFAULT_STATIONS_URL: &str = "https://irail.be/stations/NMBS/";

/// Default response language.
pub const DEFAULT_LANG: &str = "en";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of body characters kept in a JSON error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the iRail client.
#[derive(Debug, Clone)]
pub struct IrailConfig {
    /// Base URL for the API (defaults to production iRail)
    pub base_url: String,
    /// URL of the station search endpoint
    pub stations_url: String,
    /// Language for station names (`en`, `nl`, `fr`, `de`)
    pub lang: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl IrailConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            stations_url: DEFAULT_STATIONS_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted iRail).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom station search URL.
    pub fn with_stations_url(mut self, url: impl Into<String>) -> Self {
        self.stations_url = url.into();
        self
    }

    /// Set the response language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for IrailConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a route query's time is a departure or an arrival time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TimeSelection {
    #[default]
    Depart,
    Arrive,
}

impl TimeSelection {
    /// The `timeSel` value the API expects.
    pub fn as_param(&self) -> &'static str {
        match self {
            TimeSelection::Depart => "depart",
            TimeSelection::Arrive => "arrive",
        }
    }
}

/// Parameters of one journey-planner query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Resolved origin station name
    pub from: String,
    /// Resolved destination station name
    pub to: String,
    pub time: Option<QueryTime>,
    pub date: Option<QueryDate>,
    pub selection: TimeSelection,
}

impl RouteRequest {
    /// A departure-time query for now.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            time: None,
            date: None,
            selection: TimeSelection::Depart,
        }
    }

    pub fn with_time(mut self, time: Option<QueryTime>) -> Self {
        self.time = time;
        self
    }

    pub fn with_date(mut self, date: Option<QueryDate>) -> Self {
        self.date = date;
        self
    }

    pub fn with_selection(mut self, selection: TimeSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Query parameters specific to this request.
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("from", self.from.clone()),
            ("to", self.to.clone()),
            ("timeSel", self.selection.as_param().to_string()),
        ];
        if let Some(time) = &self.time {
            params.push(("time", time.as_param()));
        }
        if let Some(date) = &self.date {
            params.push(("date", date.as_param()));
        }
        params
    }
}

/// The iRail endpoints this tool consumes.
///
/// Implemented by [`IrailClient`] for the live API and by
/// [`MockIrailClient`](super::MockIrailClient) for fixtures.
pub trait IrailApi {
    /// Candidate itineraries for a route; empty when nothing was found.
    fn connections(&self, request: &RouteRequest) -> Result<Vec<RawConnection>, IrailError>;

    /// Live departure board of a station.
    fn liveboard(&self, station: &str) -> Result<LiveboardResponse, IrailError>;

    /// Stop sequence of a vehicle.
    fn vehicle(&self, id: &str) -> Result<VehicleResponse, IrailError>;

    /// Stations matching free text.
    fn stations(&self, query: &str) -> Result<Vec<StationSuggestion>, IrailError>;
}

/// iRail API client.
#[derive(Debug, Clone)]
pub struct IrailClient {
    http: reqwest::blocking::Client,
    base_url: String,
    stations_url: String,
    lang: String,
}

impl IrailClient {
    /// Create a new iRail client with the given configuration.
    pub fn new(config: IrailConfig) -> Result<Self, IrailError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("irail-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            stations_url: config.stations_url,
            lang: config.lang,
        })
    }

    /// Parameters every API call carries.
    fn common_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_string()),
            ("fast", "true".to_string()),
            ("lang", self.lang.clone()),
        ]
    }

    fn endpoint(&self, feature: &str) -> String {
        format!("{}/{}/", self.base_url, feature)
    }

    /// GET `url` and decode the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, IrailError> {
        debug!(url, ?params, "requesting");

        let response = self.http.get(url).query(params).send()?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(IrailError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(IrailError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text()?;
        trace!(bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|e| IrailError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

impl IrailApi for IrailClient {
    fn connections(&self, request: &RouteRequest) -> Result<Vec<RawConnection>, IrailError> {
        let mut params = self.common_params();
        params.extend(request.params());

        match self.get_json::<ConnectionsResponse>(&self.endpoint("connections"), &params) {
            Ok(response) => Ok(response.connection.unwrap_or_default()),
            // iRail answers "no results" with a 404 error document
            Err(IrailError::Api { status: 404, .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn liveboard(&self, station: &str) -> Result<LiveboardResponse, IrailError> {
        let mut params = self.common_params();
        params.push(("station", station.to_string()));
        self.get_json(&self.endpoint("liveboard"), &params)
    }

    fn vehicle(&self, id: &str) -> Result<VehicleResponse, IrailError> {
        let mut params = self.common_params();
        params.push(("id", id.to_string()));
        self.get_json(&self.endpoint("vehicle"), &params)
    }

    fn stations(&self, query: &str) -> Result<Vec<StationSuggestion>, IrailError> {
        let response: StationsResponse =
            self.get_json(&self.stations_url, &[("q", query.to_string())])?;
        Ok(response.graph)
    }
}
