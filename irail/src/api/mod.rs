//! iRail API client.
//!
//! This module provides an HTTP client for the public iRail API
//! (<https://api.irail.be>), which serves Belgian rail data: station
//! liveboards, journey planning and vehicle schedules.
//!
//! Key characteristics of iRail:
//! - Every number is string-encoded, times are epoch seconds
//! - Upstream sentinels (`"1"`, `"0"`, `"cancel"`) carry meaning and are
//!   matched literally, see [`crate::domain::sentinel`]
//! - "No results" is a 404 error document, not an empty list

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_LANG, DEFAULT_STATIONS_URL, DEFAULT_TIMEOUT_SECS, IrailApi,
    IrailClient, IrailConfig, RouteRequest, TimeSelection,
};
pub use convert::{
    convert_liveboard, convert_vehicle, normalize_connection, normalize_connections, via_count,
};
pub use error::IrailError;
pub use mock::MockIrailClient;
pub use types::{
    ConnectionsResponse, Direction, LiveboardResponse, PlatformInfo, RawConnection, RawDeparture,
    RawDepartures, RawStop, RawStops, RawVehicleStop, RawVia, RawViaStop, RawVias, StationInfo,
    StationSuggestion, StationsResponse, VehicleResponse,
};
