//! Conversion from iRail DTOs to domain types.
//!
//! Connections are normalized strictly: one malformed timestamp, vehicle id
//! or delay aborts the whole query, since a half-rendered itinerary is worse
//! than none. Liveboards are converted leniently and skip bad rows.

use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::domain::sentinel::{CANCELED_FLAG, PLACEHOLDER_VIA_ID};
use crate::domain::{
    Delay, Departure, DomainError, Epoch, Itinerary, Leg, Liveboard, Platform, Transfer, Vehicle,
    VehicleSchedule, VehicleStop,
};

use super::types::{
    LiveboardResponse, PlatformInfo, RawConnection, RawDeparture, RawStop, RawVia, RawViaStop,
    VehicleResponse,
};

/// Number of transfers announced by a connection.
///
/// Reads `vias.number`; an absent `vias` record or count means zero. An
/// unparseable count falls back to the length of the via list.
pub fn via_count(connection: &RawConnection) -> usize {
    let Some(vias) = &connection.vias else {
        return 0;
    };

    match vias.number.as_deref().map(str::parse::<usize>) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            warn!(number = ?vias.number, "unparseable via count, using list length");
            vias.via.len()
        }
        None => vias.via.len(),
    }
}

/// Convert one raw connection into a validated [`Itinerary`].
pub fn normalize_connection(raw: &RawConnection, tz: Tz) -> Result<Itinerary, DomainError> {
    let departure = convert_stop(&raw.departure, tz)?;
    let arrival = convert_stop(&raw.arrival, tz)?;

    let vias = raw.vias.as_ref().map(|v| v.via.as_slice()).unwrap_or(&[]);
    let transfers = vias
        .iter()
        .map(|via| convert_via(via, tz))
        .collect::<Result<Vec<_>, _>>()?;

    let announced = via_count(raw);
    if announced != transfers.len() {
        warn!(
            announced,
            listed = transfers.len(),
            "via count disagrees with via list"
        );
    }

    let itinerary = Itinerary::new(departure, transfers, arrival)?;

    match raw.duration.parse::<i64>() {
        Ok(d) if d == itinerary.duration_secs() => {}
        Ok(d) => warn!(
            reported = d,
            computed = itinerary.duration_secs(),
            "duration disagrees with stop times"
        ),
        Err(_) => warn!(duration = %raw.duration, "unparseable duration"),
    }

    Ok(itinerary)
}

/// Convert every connection of a response, preserving order.
pub fn normalize_connections(raw: &[RawConnection], tz: Tz) -> Result<Vec<Itinerary>, DomainError> {
    let itineraries = raw
        .iter()
        .map(|connection| normalize_connection(connection, tz))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = itineraries.len(), "normalized connections");
    Ok(itineraries)
}

/// Platform from `platforminfo`, falling back to the bare `platform` field.
fn convert_platform(info: Option<&PlatformInfo>, platform: Option<&str>) -> Platform {
    match (info, platform) {
        (Some(info), _) => Platform::from_wire(&info.name, &info.normal),
        (None, Some(name)) if !name.is_empty() => Platform::new(name, false),
        _ => Platform::unknown(),
    }
}

fn is_canceled(flag: Option<&str>) -> bool {
    flag == Some(CANCELED_FLAG)
}

/// A cancelled flag overrides whatever the delay field says.
fn convert_delay(delay: Option<&str>, canceled: Option<&str>) -> Result<Delay, DomainError> {
    let delay = Delay::from_field(delay)?;
    Ok(if is_canceled(canceled) {
        Delay::Cancelled
    } else {
        delay
    })
}

fn convert_stop(stop: &RawStop, tz: Tz) -> Result<Leg, DomainError> {
    let epoch = Epoch::parse(&stop.time)?;

    Ok(Leg {
        station: stop.stationinfo.standardname.clone(),
        epoch,
        time: epoch.format_hhmm(tz),
        platform: convert_platform(stop.platforminfo.as_ref(), stop.platform.as_deref()),
        delay: convert_delay(stop.delay.as_deref(), stop.canceled.as_deref())?,
        vehicle: Vehicle::parse(&stop.vehicle)?,
        direction: stop.direction.name.clone(),
    })
}

fn convert_via_stop(
    half: &RawViaStop,
    station: &str,
    vehicle: &Vehicle,
    direction: &str,
    tz: Tz,
) -> Result<Leg, DomainError> {
    let epoch = Epoch::parse(&half.time)?;

    Ok(Leg {
        station: station.to_string(),
        epoch,
        time: epoch.format_hhmm(tz),
        platform: convert_platform(half.platforminfo.as_ref(), half.platform.as_deref()),
        delay: convert_delay(half.delay.as_deref(), half.canceled.as_deref())?,
        vehicle: vehicle.clone(),
        direction: direction.to_string(),
    })
}

fn convert_via(via: &RawVia, tz: Tz) -> Result<Transfer, DomainError> {
    let station = via.stationinfo.standardname.as_str();
    let vehicle = Vehicle::parse(&via.vehicle)?;
    let direction = via.direction.name.as_str();

    Ok(Transfer {
        station: station.to_string(),
        arrival: convert_via_stop(&via.arrival, station, &vehicle, direction, tz)?,
        departure: convert_via_stop(&via.departure, station, &vehicle, direction, tz)?,
        vehicle,
        direction: direction.to_string(),
        placeholder: via.id == PLACEHOLDER_VIA_ID,
    })
}

/// Convert a liveboard response.
///
/// Departures that fail validation are logged and skipped rather than
/// failing the whole board. A malformed board timestamp is an error.
pub fn convert_liveboard(board: &LiveboardResponse, tz: Tz) -> Result<Liveboard, DomainError> {
    let time = Epoch::parse(&board.timestamp)?.format_hhmm(tz);
    let station = board
        .stationinfo
        .as_ref()
        .map(|info| info.standardname.clone())
        .unwrap_or_else(|| board.station.clone());

    let raw = board
        .departures
        .as_ref()
        .map(|d| d.departure.as_slice())
        .unwrap_or(&[]);

    let mut departures = Vec::with_capacity(raw.len());
    for item in raw {
        match convert_departure(item, tz) {
            Ok(departure) => departures.push(departure),
            Err(e) => warn!(vehicle = %item.vehicle, error = %e, "skipping departure"),
        }
    }

    Ok(Liveboard {
        station,
        time,
        departures,
    })
}

fn convert_departure(item: &RawDeparture, tz: Tz) -> Result<Departure, DomainError> {
    let epoch = Epoch::parse(&item.time)?;
    let delay = convert_delay(item.delay.as_deref(), item.canceled.as_deref())?;

    Ok(Departure {
        epoch,
        time: epoch.format_hhmm(tz),
        cancelled: delay.is_cancelled(),
        delay,
        vehicle: Vehicle::parse(&item.vehicle)?,
        direction: item.station.clone(),
        platform: convert_platform(item.platforminfo.as_ref(), item.platform.as_deref()),
    })
}

/// Convert a vehicle response. Every stop must be valid.
pub fn convert_vehicle(response: &VehicleResponse, tz: Tz) -> Result<VehicleSchedule, DomainError> {
    let time = Epoch::parse(&response.timestamp)?.format_hhmm(tz);

    let stops = response
        .stops
        .stop
        .iter()
        .map(|stop| {
            let epoch = Epoch::parse(&stop.time)?;
            Ok(VehicleStop {
                station: stop.station.clone(),
                epoch,
                time: epoch.format_hhmm(tz),
                delay: convert_delay(stop.delay.as_deref(), stop.canceled.as_deref())?,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(VehicleSchedule {
        vehicle: response.vehicle.clone(),
        time,
        stops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ConnectionsResponse;
    use crate::domain::NETWORK_TIMEZONE;

    const TZ: Tz = NETWORK_TIMEZONE;

    fn stop_json(station: &str, time: &str, vehicle: &str, normal: &str) -> String {
        format!(
            r#"{{
                "stationinfo": {{"standardname": "{station}"}},
                "time": "{time}",
                "delay": "0",
                "vehicle": "{vehicle}",
                "platform": "4",
                "platforminfo": {{"name": "4", "normal": "{normal}"}},
                "direction": {{"name": "Oostende"}}
            }}"#
        )
    }

    fn via_json(id: &str, station: &str, arr: &str, dep: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "stationinfo": {{"standardname": "{station}"}},
                "arrival": {{"time": "{arr}", "delay": "0",
                    "platforminfo": {{"name": "12", "normal": "1"}}}},
                "departure": {{"time": "{dep}", "delay": "120",
                    "platforminfo": {{"name": "3", "normal": "0"}}}},
                "vehicle": "BE.NMBS.L2960",
                "direction": {{"name": "Leuven"}}
            }}"#
        )
    }

    fn connection(vias: Option<&str>) -> RawConnection {
        let vias = vias.map(|v| format!(r#", "vias": {v}"#)).unwrap_or_default();
        let json = format!(
            r#"{{
                "id": "0",
                "departure": {},
                "arrival": {},
                "duration": "4200"
                {vias}
            }}"#,
            stop_json("Gent-Sint-Pieters", "1500000000", "BE.NMBS.IC1832", "1"),
            stop_json("Leuven", "1500004200", "BE.NMBS.L2960", "0"),
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn no_vias_means_zero_transfers() {
        let raw = connection(None);
        assert_eq!(via_count(&raw), 0);

        let itinerary = normalize_connection(&raw, TZ).unwrap();
        assert_eq!(itinerary.transfer_count(), 0);
        assert_eq!(itinerary.duration_secs(), 4200);
    }

    #[test]
    fn two_vias() {
        let vias = format!(
            r#"{{"number": "2", "via": [{}, {}]}}"#,
            via_json("0", "Brussel-Zuid", "1500001800", "1500002100"),
            via_json("1", "Brussel-Noord", "1500002400", "1500003000"),
        );
        let raw = connection(Some(&vias));
        assert_eq!(via_count(&raw), 2);

        let itinerary = normalize_connection(&raw, TZ).unwrap();
        assert_eq!(itinerary.transfer_count(), 2);

        let transfers = itinerary.transfers();
        assert!(transfers[0].is_placeholder());
        assert!(!transfers[1].is_placeholder());
        assert_eq!(transfers[1].station, "Brussel-Noord");
        assert_eq!(transfers[1].vehicle.code(), "L");
        assert_eq!(transfers[1].departure.delay, Delay::Late { seconds: 120 });
        assert!(transfers[1].departure.platform.is_changed());
        assert!(!transfers[1].arrival.platform.is_changed());
    }

    #[test]
    fn vias_without_number_count_the_list() {
        let vias = format!(
            r#"{{"via": [{}]}}"#,
            via_json("1", "Brussel-Noord", "1500002400", "1500003000"),
        );
        assert_eq!(via_count(&connection(Some(&vias))), 1);
    }

    #[test]
    fn legs_are_formatted() {
        let itinerary = normalize_connection(&connection(None), TZ).unwrap();

        let departure = itinerary.departure();
        assert_eq!(departure.station, "Gent-Sint-Pieters");
        assert_eq!(departure.time, "04:40");
        assert_eq!(departure.vehicle.code(), "IC");
        assert_eq!(departure.direction, "Oostende");
        assert!(!departure.platform.is_changed());

        assert!(itinerary.arrival().platform.is_changed());
    }

    #[test]
    fn invalid_timestamp_propagates() {
        let mut raw = connection(None);
        raw.arrival.time = "15000042".to_string();

        assert_eq!(
            normalize_connection(&raw, TZ),
            Err(DomainError::InvalidTimestamp("15000042".into()))
        );
    }

    #[test]
    fn invalid_vehicle_propagates() {
        let mut raw = connection(None);
        raw.departure.vehicle = "BE.NMBS.bus".to_string();

        assert!(matches!(
            normalize_connection(&raw, TZ),
            Err(DomainError::InvalidVehicleIdentifier(_))
        ));
    }

    #[test]
    fn one_bad_connection_fails_the_batch() {
        let good = connection(None);
        let mut bad = connection(None);
        bad.departure.delay = Some("soon".to_string());

        assert!(normalize_connections(&[good.clone()], TZ).is_ok());
        assert_eq!(
            normalize_connections(&[good, bad], TZ),
            Err(DomainError::InvalidDelay("soon".into()))
        );
    }

    #[test]
    fn canceled_flag_overrides_delay() {
        let mut raw = connection(None);
        raw.departure.canceled = Some("1".to_string());
        raw.departure.delay = Some("60".to_string());

        let itinerary = normalize_connection(&raw, TZ).unwrap();
        assert!(itinerary.departure().delay.is_cancelled());
    }

    #[test]
    fn missing_platform_info_falls_back() {
        let mut raw = connection(None);
        raw.departure.platforminfo = None;
        raw.arrival.platforminfo = None;
        raw.arrival.platform = None;

        let itinerary = normalize_connection(&raw, TZ).unwrap();
        assert_eq!(itinerary.departure().platform.label(), "4");
        assert_eq!(itinerary.arrival().platform.label(), "?");
    }

    #[test]
    fn empty_response_normalizes_to_nothing() {
        let response: ConnectionsResponse =
            serde_json::from_str(r#"{"timestamp": "1500000000"}"#).unwrap();
        let raw = response.connection.unwrap_or_default();
        assert!(normalize_connections(&raw, TZ).unwrap().is_empty());
    }

    #[test]
    fn liveboard_skips_bad_rows() {
        let json = r#"{
            "station": "Ghent-Sint-Pieters",
            "stationinfo": {"standardname": "Gent-Sint-Pieters"},
            "timestamp": "1500000000",
            "departures": {
                "number": "3",
                "departure": [
                    {"station": "Oostende", "time": "1500000300", "delay": "0",
                     "vehicle": "BE.NMBS.IC1534", "platform": "11",
                     "platforminfo": {"name": "11", "normal": "1"}, "canceled": "0"},
                    {"station": "Brugge", "time": "garbage", "delay": "0",
                     "vehicle": "BE.NMBS.IC2034", "platform": "2"},
                    {"station": "Kortrijk", "time": "1500000600", "delay": "cancel",
                     "vehicle": "BE.NMBS.L560", "platform": "5", "canceled": "1"}
                ]
            }
        }"#;
        let response: LiveboardResponse = serde_json::from_str(json).unwrap();

        let board = convert_liveboard(&response, TZ).unwrap();
        assert_eq!(board.station, "Gent-Sint-Pieters");
        assert_eq!(board.time, "04:40");
        assert_eq!(board.departures.len(), 2);
        assert_eq!(board.departures[0].direction, "Oostende");
        assert!(board.departures[1].cancelled);
        assert_eq!(board.departures[1].vehicle.code(), "L");
    }

    #[test]
    fn vehicle_schedule() {
        let json = r#"{
            "vehicle": "BE.NMBS.IC1832",
            "timestamp": "1500000000",
            "stops": {
                "number": "2",
                "stop": [
                    {"station": "Oostende", "time": "1500000000", "delay": "0"},
                    {"station": "Brugge", "time": "1500000900", "delay": "180"}
                ]
            }
        }"#;
        let response: VehicleResponse = serde_json::from_str(json).unwrap();

        let schedule = convert_vehicle(&response, TZ).unwrap();
        assert_eq!(schedule.vehicle, "BE.NMBS.IC1832");
        assert_eq!(schedule.stops.len(), 2);
        assert_eq!(schedule.stops[1].time, "04:55");
        assert_eq!(schedule.stops[1].delay.minutes(), 3);
    }
}
