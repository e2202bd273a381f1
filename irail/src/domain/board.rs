//! Liveboard and vehicle schedule types.

use super::{Delay, Epoch, Platform, Vehicle};

/// One departure on a station's liveboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub epoch: Epoch,
    pub time: String,
    pub delay: Delay,
    pub vehicle: Vehicle,
    /// Destination of the train
    pub direction: String,
    pub platform: Platform,
    pub cancelled: bool,
}

/// A station's live departure board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Liveboard {
    pub station: String,
    /// Time the board was generated, `HH:MM`
    pub time: String,
    pub departures: Vec<Departure>,
}

/// One stop in a vehicle's schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleStop {
    pub station: String,
    pub epoch: Epoch,
    pub time: String,
    pub delay: Delay,
}

impl VehicleStop {
    /// Expected time at the stop, delay included.
    pub fn expected_secs(&self) -> i64 {
        self.epoch.secs() + self.delay.seconds()
    }

    /// True once the expected time lies before `now`.
    pub fn is_passed(&self, now: i64) -> bool {
        self.expected_secs() < now
    }
}

/// The ordered stops of one vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSchedule {
    /// Vehicle id as given by the API, e.g. `BE.NMBS.IC1832`
    pub vehicle: String,
    /// Time the schedule was generated, `HH:MM`
    pub time: String,
    pub stops: Vec<VehicleStop>,
}

impl VehicleSchedule {
    /// True if `now` lies strictly between the first and last scheduled stop.
    pub fn is_on_the_move(&self, now: i64) -> bool {
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => first.epoch.secs() < now && last.epoch.secs() > now,
            _ => false,
        }
    }
}
