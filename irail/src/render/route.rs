//! Itinerary rendering.
//!
//! Layout of an expanded itinerary:
//!
//! ```text
//! Gent-Sint-Pieters                                    08:04   4
//!                      ↓ IC (Brussels Airport) ↓
//! Brussel-Zuid                              08:34  12 | 08:41   3
//!                          ↓ L (Leuven) ↓
//! Leuven                                    09:20   7
//! ```
//!
//! The arrival line keeps an empty slot the width of ` | HH:MM PPP` so its
//! time sits in the same column as the arrival times of transfer rows.

use crate::domain::{Itinerary, Leg, PLATFORM_WIDTH, Platform, Transfer, Vehicle, format_duration};

use super::context::RenderContext;
use super::style::{Line, Span, Style, center, justify};

/// Width of ` | HH:MM PPP`.
const ARRIVAL_SLOT: usize = 3 + 5 + 1 + PLATFORM_WIDTH;

/// Three reverse-styled lines naming the route.
pub fn route_header(origin: &str, destination: &str, ctx: &RenderContext) -> Vec<Line> {
    let blank = Line::styled(" ".repeat(ctx.width), Style::REVERSE);
    let title = center(&format!("{origin} - {destination}"), ctx.width);

    vec![blank.clone(), Line::styled(title, Style::REVERSE), blank]
}

/// Platform right-aligned in its column, reversed when changed.
pub(super) fn platform_spans(platform: &Platform) -> [Span; 2] {
    let style = if platform.is_changed() {
        Style::REVERSE
    } else {
        Style::PLAIN
    };
    [
        Span::plain(platform.padding()),
        Span::new(platform.label(), style),
    ]
}

/// `HH:MM [+N] PPP` for one stop.
fn stop_spans(leg: &Leg) -> Vec<Span> {
    let mut spans = vec![Span::plain(leg.time.clone())];
    if leg.delay.is_late() {
        spans.push(Span::plain(" "));
        spans.push(Span::new(leg.delay.marker(), Style::RED));
    }
    spans.push(Span::plain(" "));
    spans.extend(platform_spans(&leg.platform));
    spans
}

fn strike_if_cancelled(line: Line, leg: &Leg) -> Line {
    if leg.delay.is_cancelled() {
        line.restyle(Style::CANCELLED)
    } else {
        line
    }
}

/// Station on the left, time and platform against the right edge.
///
/// With `arrival_slot`, the right part is shifted left by the width of a
/// transfer row's departure half.
pub fn leg_line(leg: &Leg, arrival_slot: bool, ctx: &RenderContext) -> Line {
    let mut right = Line::from_spans(stop_spans(leg));
    if arrival_slot {
        right.push(Span::spaces(ARRIVAL_SLOT));
    }

    let line = justify(Line::plain(leg.station.clone()), right, ctx.width);
    strike_if_cancelled(line, leg)
}

/// `↓ IC (Oostende) ↓`, centered and reversed.
pub fn vehicle_banner(vehicle: &Vehicle, direction: &str, ctx: &RenderContext) -> Line {
    let text = format!("\u{2193} {} ({}) \u{2193}", vehicle.code(), direction);
    Line::styled(center(&text, ctx.width), Style::REVERSE)
}

/// Vehicle banner (unless placeholder) followed by `arr plat | dep plat`.
pub fn transfer_lines(transfer: &Transfer, ctx: &RenderContext) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2);
    if !transfer.is_placeholder() {
        lines.push(vehicle_banner(&transfer.vehicle, &transfer.direction, ctx));
    }

    let mut right = Line::from_spans(stop_spans(&transfer.arrival));
    right.push(Span::plain(" | "));
    right.extend(stop_spans(&transfer.departure));

    let row = justify(Line::plain(transfer.station.clone()), right, ctx.width);
    let row = if transfer.arrival.delay.is_cancelled() || transfer.departure.delay.is_cancelled() {
        row.restyle(Style::CANCELLED)
    } else {
        row
    };
    lines.push(row);
    lines
}

/// Every line of an expanded itinerary.
pub fn render_itinerary(itinerary: &Itinerary, ctx: &RenderContext) -> Vec<Line> {
    let departure = itinerary.departure();
    let arrival = itinerary.arrival();

    let mut lines = vec![
        leg_line(departure, false, ctx),
        vehicle_banner(&departure.vehicle, &departure.direction, ctx),
    ];
    for transfer in itinerary.transfers() {
        lines.extend(transfer_lines(transfer, ctx));
    }
    lines.push(vehicle_banner(&arrival.vehicle, &arrival.direction, ctx));
    lines.push(leg_line(arrival, true, ctx));
    lines
}

fn duration_text(itinerary: &Itinerary) -> String {
    format_duration(u64::try_from(itinerary.duration_secs()).unwrap_or(0))
}

/// Reverse-styled overview of the best itinerary.
pub fn summary_line(itinerary: &Itinerary, ctx: &RenderContext) -> Line {
    let left = format!(
        "Optimal connection: {} --> {}",
        itinerary.departure().time,
        itinerary.arrival().time
    );
    let right = format!(
        "Duration: {} Changes: {}",
        duration_text(itinerary),
        itinerary.transfer_count()
    );

    justify(Line::plain(left), Line::plain(right), ctx.width).restyle(Style::REVERSE)
}

/// `"<index>: <dep> --> <arr>  <minutes>  <changes>"`.
pub fn choice_line(index: usize, itinerary: &Itinerary) -> Line {
    Line::plain(format!(
        "{}: {} --> {}  {}  {}",
        index,
        itinerary.departure().time,
        itinerary.arrival().time,
        itinerary.duration_secs() / 60,
        itinerary.transfer_count()
    ))
}

/// `"Other options:"` followed by one numbered line per itinerary.
pub fn choice_lines<'a>(itineraries: impl IntoIterator<Item = &'a Itinerary>) -> Vec<Line> {
    std::iter::once(Line::plain("Other options:"))
        .chain(
            itineraries
                .into_iter()
                .enumerate()
                .map(|(index, itinerary)| choice_line(index, itinerary)),
        )
        .collect()
}
