//! Terminal rendering.
//!
//! Renderers are pure: they turn domain values plus a [`RenderContext`] into
//! styled [`Line`]s. Only [`write_lines`] touches an output stream.

mod board;
mod context;
mod route;
mod style;

use std::io::{self, Write};

pub use board::{
    departure_line, liveboard_header, render_liveboard, render_vehicle, stop_line, vehicle_header,
};
pub use context::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderContext};
pub use route::{
    choice_line, choice_lines, leg_line, render_itinerary, route_header, summary_line,
    transfer_lines, vehicle_banner,
};
pub use style::{Line, Span, Style, center, center_padding, justify, pad_left};

/// Write each line, styled according to `ctx`, followed by a newline.
pub fn write_lines<W: Write + ?Sized>(
    out: &mut W,
    lines: &[Line],
    ctx: &RenderContext,
) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.render(ctx.color))?;
    }
    Ok(())
}
