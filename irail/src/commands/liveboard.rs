//! `irail liveboard`: departures from a station.

use std::io::Write;
use std::thread;
use std::time::Duration;

use chrono_tz::Tz;
use tracing::debug;

use crate::api::{IrailApi, convert_liveboard};
use crate::domain::{Departure, Liveboard};
use crate::error::AppError;
use crate::prompt::Prompter;
use crate::render::{RenderContext, render_liveboard, write_lines};
use crate::stations::resolve_station;

/// Delay between refreshes of a continuous board.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

const CURSOR_UP_ONE: &str = "\x1b[1A";
const ERASE_LINE: &str = "\x1b[2K";

/// What to show on a liveboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveboardOptions {
    /// Station name as typed by the user
    pub station: String,
    /// Only trains heading to a destination starting with one of these
    pub destinations: Vec<String>,
    /// Only trains whose vehicle label starts with one of these
    pub train_types: Vec<String>,
    /// Show `IC1534` instead of `IC`
    pub show_vehicle: bool,
    /// Redraw every [`REFRESH_INTERVAL`]
    pub continuous: bool,
}

/// Departures passing the destination and train type filters.
///
/// Both filters are prefix matches ignoring case; an empty filter list
/// lets everything through.
pub fn filter_departures<'a>(
    board: &'a Liveboard,
    destinations: &[String],
    train_types: &[String],
) -> Vec<&'a Departure> {
    let destinations: Vec<String> = destinations.iter().map(|d| d.to_lowercase()).collect();
    let train_types: Vec<String> = train_types.iter().map(|t| t.to_uppercase()).collect();

    board
        .departures
        .iter()
        .filter(|departure| {
            destinations.is_empty() || {
                let direction = departure.direction.to_lowercase();
                destinations.iter().any(|d| direction.starts_with(d.as_str()))
            }
        })
        .filter(|departure| {
            train_types.is_empty() || {
                let label = departure.vehicle.label(true);
                train_types.iter().any(|t| label.starts_with(t.as_str()))
            }
        })
        .collect()
}

/// Escapes that erase the last `lines` lines of output.
pub fn erase_lines(lines: usize) -> String {
    format!("{CURSOR_UP_ONE}{ERASE_LINE}").repeat(lines)
}

/// Fetch and draw the board once for an already resolved station.
///
/// Returns the number of lines written.
pub fn draw_liveboard(
    api: &dyn IrailApi,
    out: &mut dyn Write,
    ctx: &RenderContext,
    tz: Tz,
    station: &str,
    options: &LiveboardOptions,
) -> Result<usize, AppError> {
    let board = convert_liveboard(&api.liveboard(station)?, tz)?;
    let departures = filter_departures(&board, &options.destinations, &options.train_types);
    debug!(
        total = board.departures.len(),
        shown = departures.len(),
        "liveboard fetched"
    );

    let lines = render_liveboard(
        &board,
        &departures,
        &options.destinations,
        options.show_vehicle,
        ctx,
    );
    write_lines(out, &lines, ctx)?;
    out.flush()?;
    Ok(lines.len())
}

/// Run the liveboard command.
///
/// A continuous board never returns on its own; it ends with the process
/// or with the first error.
pub fn liveboard(
    api: &dyn IrailApi,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    ctx: &RenderContext,
    tz: Tz,
    options: &LiveboardOptions,
) -> Result<(), AppError> {
    let station = resolve_station(api, prompter, out, ctx, &options.station)?;

    let mut drawn = draw_liveboard(api, out, ctx, tz, &station, options)?;
    while options.continuous {
        thread::sleep(REFRESH_INTERVAL);
        write!(out, "{}", erase_lines(drawn))?;
        drawn = draw_liveboard(api, out, ctx, tz, &station, options)?;
    }
    Ok(())
}
