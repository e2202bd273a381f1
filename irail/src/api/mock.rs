//! Mock iRail client for testing without API access.
//!
//! Loads sample responses from JSON files and serves them as if they were
//! live API responses.

use std::cell::RefCell;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::client::{IrailApi, RouteRequest};
use super::error::IrailError;
use super::types::{
    ConnectionsResponse, LiveboardResponse, RawConnection, StationSuggestion, StationsResponse,
    VehicleResponse,
};

const CONNECTIONS_FILE: &str = "connections.json";
const LIVEBOARD_FILE: &str = "liveboard.json";
const VEHICLE_FILE: &str = "vehicle.json";
const STATIONS_FILE: &str = "stations.json";

/// Mock iRail client that serves data from JSON files.
///
/// Each endpoint has at most one canned response. Station search filters the
/// canned suggestions by case-insensitive substring, so one `stations.json`
/// can serve several queries.
#[derive(Debug, Default)]
pub struct MockIrailClient {
    connections: Option<Vec<RawConnection>>,
    liveboard: Option<LiveboardResponse>,
    vehicle: Option<VehicleResponse>,
    stations: Vec<StationSuggestion>,
    route_requests: RefCell<Vec<RouteRequest>>,
}

impl MockIrailClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Recognizes `connections.json`, `liveboard.json`, `vehicle.json` and
    /// `stations.json`, each holding the body the matching endpoint returns.
    /// Missing files leave that endpoint answering 404.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, IrailError> {
        let data_dir = data_dir.as_ref();

        if !data_dir.is_dir() {
            return Err(IrailError::Api {
                status: 0,
                message: format!("Mock data directory not found: {:?}", data_dir),
            });
        }

        let connections = load::<ConnectionsResponse>(data_dir, CONNECTIONS_FILE)?
            .map(|response| response.connection.unwrap_or_default());
        let stations = load::<StationsResponse>(data_dir, STATIONS_FILE)?
            .map(|response| response.graph)
            .unwrap_or_default();

        Ok(Self {
            connections,
            liveboard: load(data_dir, LIVEBOARD_FILE)?,
            vehicle: load(data_dir, VEHICLE_FILE)?,
            stations,
            route_requests: RefCell::new(Vec::new()),
        })
    }

    /// A mock with no canned responses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_connections(mut self, connections: Vec<RawConnection>) -> Self {
        self.connections = Some(connections);
        self
    }

    pub fn with_liveboard(mut self, liveboard: LiveboardResponse) -> Self {
        self.liveboard = Some(liveboard);
        self
    }

    pub fn with_vehicle(mut self, vehicle: VehicleResponse) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn with_stations(mut self, stations: Vec<StationSuggestion>) -> Self {
        self.stations = stations;
        self
    }

    /// Route queries received so far, oldest first.
    pub fn route_requests(&self) -> Vec<RouteRequest> {
        self.route_requests.borrow().clone()
    }
}

/// Read and parse `name` under `dir`; `Ok(None)` when the file is absent.
fn load<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Option<T>, IrailError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Ok(None);
    }

    let json = std::fs::read_to_string(&path).map_err(|e| IrailError::Api {
        status: 0,
        message: format!("Failed to read {:?}: {}", path, e),
    })?;

    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| IrailError::Json {
            message: format!("Failed to parse {:?}: {}", path, e),
            body: None,
        })
}

fn not_found(what: &str) -> IrailError {
    IrailError::Api {
        status: 404,
        message: format!("No mock data for {}", what),
    }
}

impl IrailApi for MockIrailClient {
    fn connections(&self, request: &RouteRequest) -> Result<Vec<RawConnection>, IrailError> {
        self.route_requests.borrow_mut().push(request.clone());
        // Same as the live API: a missing result is an empty list
        Ok(self.connections.clone().unwrap_or_default())
    }

    fn liveboard(&self, station: &str) -> Result<LiveboardResponse, IrailError> {
        self.liveboard
            .clone()
            .ok_or_else(|| not_found(&format!("liveboard {}", station)))
    }

    fn vehicle(&self, id: &str) -> Result<VehicleResponse, IrailError> {
        self.vehicle
            .clone()
            .ok_or_else(|| not_found(&format!("vehicle {}", id)))
    }

    fn stations(&self, query: &str) -> Result<Vec<StationSuggestion>, IrailError> {
        let needle = query.to_lowercase();
        Ok(self
            .stations
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn suggestion(name: &str) -> StationSuggestion {
        StationSuggestion {
            id: format!("http://irail.be/stations/NMBS/{}", name.len()),
            name: name.to_string(),
        }
    }

    #[test]
    fn loads_fixture_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(STATIONS_FILE),
            r#"{"@graph": [
                {"@id": "http://irail.be/stations/NMBS/008892007", "name": "Gent-Sint-Pieters"},
                {"@id": "http://irail.be/stations/NMBS/008893120", "name": "Gent-Dampoort"},
                {"@id": "http://irail.be/stations/NMBS/008891009", "name": "Brugge"}
            ]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(CONNECTIONS_FILE),
            r#"{"timestamp": "1500000000"}"#,
        )
        .unwrap();

        let mock = MockIrailClient::new(dir.path()).unwrap();

        assert_eq!(mock.stations("gent").unwrap().len(), 2);
        assert_eq!(mock.stations("Brugge").unwrap()[0].name, "Brugge");
        assert!(mock.stations("Oostende").unwrap().is_empty());

        let request = RouteRequest::new("Gent-Sint-Pieters", "Brugge");
        assert!(mock.connections(&request).unwrap().is_empty());
        assert_eq!(mock.route_requests(), vec![request]);
    }

    #[test]
    fn missing_endpoint_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockIrailClient::new(dir.path()).unwrap();

        assert!(matches!(
            mock.liveboard("Gent-Sint-Pieters"),
            Err(IrailError::Api { status: 404, .. })
        ));
        assert!(matches!(
            mock.vehicle("BE.NMBS.IC1832"),
            Err(IrailError::Api { status: 404, .. })
        ));
    }

    #[test]
    fn malformed_fixture_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(VEHICLE_FILE), "{ not json").unwrap();

        assert!(matches!(
            MockIrailClient::new(dir.path()),
            Err(IrailError::Json { .. })
        ));
    }

    #[test]
    fn missing_directory() {
        assert!(MockIrailClient::new("/nonexistent/irail/fixtures").is_err());
    }

    #[test]
    fn in_memory_builders() {
        let mock = MockIrailClient::empty().with_stations(vec![suggestion("Leuven")]);
        assert_eq!(mock.stations("leu").unwrap(), vec![suggestion("Leuven")]);
        assert!(mock.connections(&RouteRequest::new("A", "B")).unwrap().is_empty());
    }
}
