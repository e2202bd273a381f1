//! Belgian train information in the terminal.
//!
//! A command-line client for the public iRail API: station liveboards,
//! vehicle schedules and, at its core, route planning. Route options are
//! normalized into itineraries, ranked and presented through an
//! interactive expand/drill-down loop.

pub mod api;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod logging;
pub mod planner;
pub mod prompt;
pub mod render;
pub mod stations;
