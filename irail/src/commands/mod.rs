//! The `irail` subcommands.
//!
//! Each command takes its collaborators explicitly: the API behind
//! [`IrailApi`](crate::api::IrailApi), a [`Prompter`](crate::prompt::Prompter)
//! when it asks questions, the output stream and the render context.

mod liveboard;
mod route;
mod vehicle;

pub use liveboard::{
    LiveboardOptions, REFRESH_INTERVAL, draw_liveboard, erase_lines, filter_departures, liveboard,
};
pub use route::route;
pub use vehicle::vehicle;
