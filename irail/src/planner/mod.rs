//! Route planning presentation: ranking and interactive selection.
//!
//! The journey planner returns several candidate itineraries. This module
//! orders them by the "arrival plus half duration" score and walks the user
//! through them: the best one is expanded straight away, the rest can be
//! expanded one at a time or all at once.

mod list;
mod rank;
mod select;

pub use list::{ItineraryList, SelectionError};
pub use rank::rank_itineraries;
pub use select::{EXPAND_ALL, LoopOutcome, LoopState, SelectionLoop};
