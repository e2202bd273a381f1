//! `irail vehicle`: stops of one train.

use std::io::Write;

use chrono_tz::Tz;
use tracing::debug;

use crate::api::{IrailApi, convert_vehicle};
use crate::error::AppError;
use crate::render::{RenderContext, render_vehicle, write_lines};

/// Print every stop of vehicle `id`, dimming the ones passed before `now`
/// (epoch seconds).
pub fn vehicle(
    api: &dyn IrailApi,
    out: &mut dyn Write,
    ctx: &RenderContext,
    tz: Tz,
    id: &str,
    now: i64,
) -> Result<(), AppError> {
    let schedule = convert_vehicle(&api.vehicle(id)?, tz)?;
    debug!(
        vehicle = %schedule.vehicle,
        stops = schedule.stops.len(),
        on_the_move = schedule.is_on_the_move(now),
        "vehicle schedule fetched"
    );

    write_lines(out, &render_vehicle(&schedule, now, ctx), ctx)?;
    Ok(())
}
