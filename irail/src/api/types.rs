//! iRail API response DTOs.
//!
//! These types map directly to the iRail JSON responses (`format=json`).
//! iRail sends every number as a string and omits fields rather than sending
//! null, so optional fields use `Option` and numeric fields stay `String`
//! until the normalizer validates them.

use serde::Deserialize;

/// Response from `/connections/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionsResponse {
    /// When this response was generated (epoch seconds).
    pub timestamp: Option<String>,

    /// Candidate itineraries; absent when nothing was found.
    pub connection: Option<Vec<RawConnection>>,
}

/// One itinerary as returned by the journey planner.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConnection {
    /// Position of the connection in the response.
    pub id: Option<String>,

    /// Boarding stop at the origin.
    pub departure: RawStop,

    /// Alighting stop at the destination.
    pub arrival: RawStop,

    /// Travel time in seconds.
    pub duration: String,

    /// Transfers, when the itinerary has any.
    pub vias: Option<RawVias>,
}

/// Departure or arrival end of a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStop {
    /// Station name in the requested language.
    pub station: Option<String>,

    pub stationinfo: StationInfo,

    /// Scheduled time (epoch seconds).
    pub time: String,

    /// Delay in seconds, or `"cancel"`.
    pub delay: Option<String>,

    /// Platform name (duplicated in `platforminfo`).
    pub platform: Option<String>,

    pub platforminfo: Option<PlatformInfo>,

    /// Vehicle id, e.g. `BE.NMBS.IC1832`.
    pub vehicle: String,

    /// Terminus of the vehicle.
    pub direction: Direction,

    /// `"1"` when this stop is cancelled.
    pub canceled: Option<String>,
}

/// Transfer wrapper: a count plus the transfers themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVias {
    /// Number of transfers (string-encoded).
    pub number: Option<String>,

    #[serde(default)]
    pub via: Vec<RawVia>,
}

/// One transfer inside a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVia {
    /// `"0"` for the implicit first via.
    pub id: String,

    /// Station name in the requested language.
    pub station: Option<String>,

    pub stationinfo: StationInfo,

    /// Arrival at the transfer station.
    pub arrival: RawViaStop,

    /// Departure from the transfer station.
    pub departure: RawViaStop,

    /// Vehicle the traveller changes to.
    pub vehicle: String,

    pub direction: Direction,
}

/// Arrival or departure half of a via.
#[derive(Debug, Clone, Deserialize)]
pub struct RawViaStop {
    pub time: String,
    pub delay: Option<String>,
    pub platform: Option<String>,
    pub platforminfo: Option<PlatformInfo>,
    pub canceled: Option<String>,
}

/// Station metadata attached to stops.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInfo {
    /// iRail station id, e.g. `BE.NMBS.008892007`.
    pub id: Option<String>,

    /// Canonical (Dutch/French) station name.
    pub standardname: String,

    /// Name in the requested language.
    pub name: Option<String>,
}

/// Platform name plus whether it is the scheduled one.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformInfo {
    pub name: String,

    /// `"1"` when the platform is unchanged.
    pub normal: String,
}

/// Direction of travel.
#[derive(Debug, Clone, Deserialize)]
pub struct Direction {
    pub name: String,
}

/// Response from `/liveboard/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveboardResponse {
    /// Station name in the requested language.
    pub station: String,

    pub stationinfo: Option<StationInfo>,

    /// When this board was generated (epoch seconds).
    pub timestamp: String,

    /// Departures; absent when no trains leave soon.
    pub departures: Option<RawDepartures>,
}

/// Departure list wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDepartures {
    pub number: Option<String>,

    #[serde(default)]
    pub departure: Vec<RawDeparture>,
}

/// One row of a liveboard.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeparture {
    /// Destination of the train.
    pub station: String,

    pub time: String,
    pub delay: Option<String>,
    pub vehicle: String,
    pub platform: Option<String>,
    pub platforminfo: Option<PlatformInfo>,
    pub canceled: Option<String>,
}

/// Response from `/vehicle/`.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleResponse {
    /// Vehicle id, e.g. `BE.NMBS.IC1832`.
    pub vehicle: String,

    /// When this schedule was generated (epoch seconds).
    pub timestamp: String,

    pub stops: RawStops,
}

/// Stop list wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStops {
    pub number: Option<String>,

    #[serde(default)]
    pub stop: Vec<RawVehicleStop>,
}

/// One stop of a vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVehicleStop {
    pub station: String,
    pub time: String,
    pub delay: Option<String>,
    pub platform: Option<String>,
    pub canceled: Option<String>,
}

/// Response from the station search (`irail.be/stations/NMBS/?q=`).
#[derive(Debug, Clone, Deserialize)]
pub struct StationsResponse {
    #[serde(rename = "@graph", default)]
    pub graph: Vec<StationSuggestion>,
}

/// One station matching a free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationSuggestion {
    /// Linked-data URI, e.g. `http://irail.be/stations/NMBS/008892007`.
    #[serde(rename = "@id")]
    pub id: String,

    /// Display name.
    pub name: String,
}
