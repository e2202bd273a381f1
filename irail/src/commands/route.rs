//! `irail route`: plan a journey and browse the options.

use std::io::Write;

use chrono_tz::Tz;
use tracing::{debug, info};

use crate::api::{IrailApi, RouteRequest, normalize_connections};
use crate::error::AppError;
use crate::planner::{ItineraryList, LoopOutcome, SelectionLoop, rank_itineraries};
use crate::prompt::Prompter;
use crate::render::{RenderContext, route_header, write_lines};
use crate::stations::resolve_station;

/// Run a route query.
///
/// `query.from` and `query.to` are free text; both are resolved to station
/// names before the journey planner is called. Nothing but prompts is
/// written until the planner has returned at least one valid itinerary.
pub fn route(
    api: &dyn IrailApi,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    ctx: &RenderContext,
    tz: Tz,
    query: &RouteRequest,
) -> Result<LoopOutcome, AppError> {
    let from = resolve_station(api, prompter, out, ctx, &query.from)?;
    let to = resolve_station(api, prompter, out, ctx, &query.to)?;

    let request = RouteRequest {
        from,
        to,
        ..query.clone()
    };
    info!(from = %request.from, to = %request.to, "planning route");

    let raw = api.connections(&request)?;
    if raw.is_empty() {
        return Err(AppError::NoConnectionsFound);
    }

    let ranked = rank_itineraries(normalize_connections(&raw, tz)?);
    debug!(count = ranked.len(), "ranked itineraries");

    write_lines(out, &route_header(&request.from, &request.to, ctx), ctx)?;

    let mut selection = SelectionLoop::new(ItineraryList::new(ranked), ctx);
    Ok(selection.run(prompter, out)?)
}
