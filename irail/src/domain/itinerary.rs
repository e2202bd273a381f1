//! Itinerary types.
//!
//! An `Itinerary` is one complete door-to-door option returned by the
//! journey planner: a departure stop, zero or more transfers where the
//! traveller changes vehicle, and an arrival stop.

use super::{Delay, DomainError, Epoch, Platform, Vehicle};

/// One stop of a directly travelled segment, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    /// Station display name
    pub station: String,
    /// Scheduled time at the stop
    pub epoch: Epoch,
    /// `epoch` formatted as `HH:MM` in the network time zone
    pub time: String,
    pub platform: Platform,
    pub delay: Delay,
    /// Vehicle serving the stop
    pub vehicle: Vehicle,
    /// Terminus the vehicle is heading to
    pub direction: String,
}

/// An intermediate stop where the traveller changes vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Station display name
    pub station: String,
    /// Arrival at the transfer station
    pub arrival: Leg,
    /// Departure from the transfer station
    pub departure: Leg,
    /// Vehicle the traveller changes to
    pub vehicle: Vehicle,
    /// Direction of that vehicle
    pub direction: String,
    /// Implicit first via, rendered without a vehicle-change banner
    pub placeholder: bool,
}

impl Transfer {
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// A complete itinerary from origin to destination.
///
/// # Invariants
///
/// - Legs and transfers alternate, starting and ending with a leg
/// - Transfer count is the number of transfers
/// - Duration is the arrival epoch minus the departure epoch, never negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    departure: Leg,
    transfers: Vec<Transfer>,
    arrival: Leg,
}

impl Itinerary {
    /// Constructs an itinerary from its outermost legs and transfers.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ArrivalBeforeDeparture`] if the arrival epoch
    /// precedes the departure epoch.
    pub fn new(departure: Leg, transfers: Vec<Transfer>, arrival: Leg) -> Result<Self, DomainError> {
        if arrival.epoch < departure.epoch {
            return Err(DomainError::ArrivalBeforeDeparture);
        }

        Ok(Self {
            departure,
            transfers,
            arrival,
        })
    }

    pub fn departure(&self) -> &Leg {
        &self.departure
    }

    pub fn arrival(&self) -> &Leg {
        &self.arrival
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    /// Total travel time in seconds.
    pub fn duration_secs(&self) -> i64 {
        self.arrival.epoch.secs() - self.departure.epoch.secs()
    }

    /// Desirability score used for ranking; lower is better.
    ///
    /// Arrival plus half the duration, so a much longer trip needs a much
    /// earlier arrival to win.
    pub fn score(&self) -> i64 {
        self.arrival.epoch.secs() + self.duration_secs() / 2
    }
}
