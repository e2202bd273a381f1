//! Station name resolution.
//!
//! Users type partial names ("gent"); the iRail API wants exact ones
//! ("Gent-Sint-Pieters"). The resolver searches the iRail station list and
//! asks the user to pick when several stations match.

mod error;
mod resolve;

pub use error::StationError;
pub use resolve::resolve_station;
