//! Command-line arguments.

use chrono_tz::Tz;
use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};

use crate::api::{
    DEFAULT_BASE_URL, DEFAULT_LANG, DEFAULT_STATIONS_URL, DEFAULT_TIMEOUT_SECS, IrailConfig,
    RouteRequest, TimeSelection,
};
use crate::commands::LiveboardOptions;
use crate::domain::{NETWORK_TIMEZONE, QueryDate, QueryTime};
use crate::render::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderContext};

/// Belgian train information from the iRail API, in your terminal
#[derive(Debug, Parser)]
#[command(name = "irail", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// terminal width in columns
    #[arg(long, global = true, env = "COLUMNS", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// terminal height in rows
    #[arg(long, global = true, env = "LINES", default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// iRail API base URL
    #[arg(long, global = true, env = "IRAIL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// station search URL
    #[arg(long, global = true, env = "IRAIL_STATIONS_URL", default_value = DEFAULT_STATIONS_URL)]
    pub stations_url: String,

    /// language of station names (en, nl, fr, de)
    #[arg(long, global = true, env = "IRAIL_LANG", default_value = DEFAULT_LANG)]
    pub lang: String,

    /// request timeout in seconds
    #[arg(long, global = true, env = "IRAIL_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// time zone times are shown in
    #[arg(
        long,
        global = true,
        env = "IRAIL_TIMEZONE",
        default_value_t = NETWORK_TIMEZONE,
        value_parser = parse_timezone
    )]
    pub timezone: Tz,

    /// print plain text without ANSI styling; any NO_COLOR value but
    /// `0`, `false`, `no` or `off` counts
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// log debug diagnostics to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// plan a journey between two stations
    Route(RouteArgs),

    /// show departures from a station
    Liveboard(LiveboardArgs),

    /// show the stops of a train
    Vehicle {
        /// vehicle id, e.g. IC1832 or BE.NMBS.IC1832
        id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RouteArgs {
    /// departure station (partial names are looked up)
    pub from: String,
    /// arrival station (partial names are looked up)
    pub to: String,
    /// time as HHMM, e.g. 0830
    #[arg(short, long, value_parser = parse_query_time)]
    pub time: Option<QueryTime>,
    /// date as DDMMYY, e.g. 150324
    #[arg(short, long, value_parser = parse_query_date)]
    pub date: Option<QueryDate>,
    /// whether the time is a departure or an arrival time
    #[arg(short, long, value_enum, default_value_t = TimeSelection::Depart)]
    pub selection: TimeSelection,
}

#[derive(Debug, Clone, Args)]
pub struct LiveboardArgs {
    /// station (partial names are looked up)
    pub station: String,
    /// only trains heading to a destination starting with this (repeatable)
    #[arg(short = 'd', long = "destination")]
    pub destinations: Vec<String>,
    /// only trains of this type, e.g. IC or L (repeatable)
    #[arg(short = 't', long = "train-type")]
    pub train_types: Vec<String>,
    /// show the train number next to its type
    #[arg(short = 'v', long)]
    pub show_vehicle: bool,
    /// refresh the board every minute
    #[arg(short, long)]
    pub continuous: bool,
}

impl Cli {
    /// API client settings.
    pub fn config(&self) -> IrailConfig {
        IrailConfig::new()
            .with_base_url(&self.base_url)
            .with_stations_url(&self.stations_url)
            .with_lang(&self.lang)
            .with_timeout(self.timeout)
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.width, self.height).with_color(!self.no_color)
    }
}

impl RouteArgs {
    /// The route query, with station names still as typed.
    pub fn request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to)
            .with_time(self.time)
            .with_date(self.date)
            .with_selection(self.selection)
    }
}

impl LiveboardArgs {
    pub fn options(&self) -> LiveboardOptions {
        LiveboardOptions {
            station: self.station.clone(),
            destinations: self.destinations.clone(),
            train_types: self.train_types.clone(),
            show_vehicle: self.show_vehicle,
            continuous: self.continuous,
        }
    }
}

fn parse_query_time(s: &str) -> Result<QueryTime, String> {
    QueryTime::parse(s).map_err(|e| e.to_string())
}

fn parse_query_date(s: &str) -> Result<QueryDate, String> {
    QueryDate::parse(s).map_err(|e| e.to_string())
}

fn parse_timezone(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>()
        .map_err(|e| format!("unknown time zone {s:?}: {e}"))
}
