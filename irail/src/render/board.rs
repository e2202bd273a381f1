//! Liveboard and vehicle schedule rendering.

use crate::domain::{Delay, Departure, Liveboard, VehicleSchedule, VehicleStop};

use super::context::RenderContext;
use super::route::platform_spans;
use super::style::{Line, Span, Style, center, justify, pad_left};

/// Columns of the `HH:MM ` prefix in board headers.
const HEADER_TIME_COLUMNS: usize = 6;

/// Width of the delay column.
const DELAY_COLUMNS: usize = 3;

/// Width the vehicle label is right-aligned to.
const VEHICLE_COLUMNS: usize = 7;

/// `HH:MM` followed by `title` centered in the rest of the line, reversed.
fn board_header(time: &str, title: &str, ctx: &RenderContext) -> Line {
    let title = center(title, ctx.width.saturating_sub(HEADER_TIME_COLUMNS));
    Line::styled(format!("{time} {title}"), Style::REVERSE)
}

/// `<station> (direction: <filters or all>)` header of a liveboard.
pub fn liveboard_header(board: &Liveboard, destinations: &[String], ctx: &RenderContext) -> Line {
    let direction = if destinations.is_empty() {
        "all".to_string()
    } else {
        destinations.join(", ")
    };
    board_header(
        &board.time,
        &format!("{} (direction: {})", board.station, direction),
        ctx,
    )
}

/// Red `+N` right-aligned in the delay column.
fn delay_span(delay: &Delay) -> Span {
    Span::new(pad_left(&delay.marker(), DELAY_COLUMNS), Style::RED)
}

/// One row: time, delay, vehicle, destination, platform.
pub fn departure_line(departure: &Departure, show_vehicle: bool, ctx: &RenderContext) -> Line {
    let mut left = Line::from_spans(vec![
        Span::plain(departure.time.clone()),
        Span::plain(" "),
        delay_span(&departure.delay),
        Span::plain(" "),
    ]);
    left.push(Span::plain(pad_left(
        &departure.vehicle.label(show_vehicle),
        VEHICLE_COLUMNS,
    )));
    left.push(Span::plain(" "));
    left.push(Span::plain(departure.direction.clone()));

    let right = Line::from_spans(platform_spans(&departure.platform).to_vec());
    let line = justify(left, right, ctx.width);

    if departure.cancelled {
        line.restyle(Style::CANCELLED)
    } else {
        line
    }
}

/// All lines of a liveboard, clipped to the screen height.
///
/// Leaves two rows for the header and the shell prompt.
pub fn render_liveboard(
    board: &Liveboard,
    departures: &[&Departure],
    destinations: &[String],
    show_vehicle: bool,
    ctx: &RenderContext,
) -> Vec<Line> {
    let mut lines = vec![liveboard_header(board, destinations, ctx)];

    if departures.is_empty() {
        lines.push(Line::plain("No trains!"));
        return lines;
    }

    let rows = ctx.height.saturating_sub(2);
    lines.extend(
        departures
            .iter()
            .take(rows)
            .map(|departure| departure_line(departure, show_vehicle, ctx)),
    );
    lines
}

/// Header of a vehicle schedule.
pub fn vehicle_header(schedule: &VehicleSchedule, ctx: &RenderContext) -> Line {
    board_header(&schedule.time, &schedule.vehicle, ctx)
}

/// One stop; dimmed once the train has passed it.
pub fn stop_line(stop: &VehicleStop, now: i64) -> Line {
    let line = Line::from_spans(vec![
        Span::plain(stop.time.clone()),
        Span::plain(" "),
        delay_span(&stop.delay),
        Span::plain(" "),
        Span::plain(stop.station.clone()),
    ]);

    if stop.is_passed(now) {
        line.restyle(Style::DIM)
    } else {
        line
    }
}

/// Header plus one line per stop.
pub fn render_vehicle(schedule: &VehicleSchedule, now: i64, ctx: &RenderContext) -> Vec<Line> {
    std::iter::once(vehicle_header(schedule, ctx))
        .chain(schedule.stops.iter().map(|stop| stop_line(stop, now)))
        .collect()
}
