//! Domain types for the iRail client.
//!
//! This module contains the validated view of iRail data. Types enforce
//! their invariants at construction time, so rendering and ranking code can
//! trust the values it receives.

mod board;
mod delay;
mod error;
mod itinerary;
mod platform;
pub mod sentinel;
mod time;
mod vehicle;

pub use board::{Departure, Liveboard, VehicleSchedule, VehicleStop};
pub use delay::Delay;
pub use error::DomainError;
pub use itinerary::{Itinerary, Leg, Transfer};
pub use platform::{PLATFORM_WIDTH, Platform};
pub use time::{
    Epoch, NETWORK_TIMEZONE, QueryDate, QueryTime, TimeError, format_duration, format_time,
};
pub use vehicle::{Vehicle, parse_vehicle};

#[cfg(test)]
pub(crate) use itinerary::fixtures;
