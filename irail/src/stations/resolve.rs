//! Free text to canonical station name.

use std::io::Write;

use tracing::debug;

use crate::api::IrailApi;
use crate::prompt::{Prompter, Reply};
use crate::render::{Line, RenderContext, write_lines};

use super::error::StationError;

/// Resolve `suggestion` (e.g. `gent`) to one station name.
///
/// A single match is taken as is. Several matches are listed and the user
/// picks one by number; out-of-range numbers are asked again.
pub fn resolve_station(
    api: &dyn IrailApi,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    ctx: &RenderContext,
    suggestion: &str,
) -> Result<String, StationError> {
    let mut candidates = api.stations(suggestion)?;
    debug!(suggestion, matches = candidates.len(), "station search");

    match candidates.len() {
        0 => return Err(StationError::NotFound(suggestion.to_string())),
        1 => return Ok(candidates.remove(0).name),
        _ => {}
    }

    let listing: Vec<Line> = candidates
        .iter()
        .enumerate()
        .map(|(index, station)| Line::plain(format!("{}: {}", index, station.name)))
        .collect();
    write_lines(out, &listing, ctx)?;

    let question = format!("Which station do you mean by {suggestion}?");
    loop {
        match prompter.integer(out, &question)? {
            Reply::Answer(index) => match usize::try_from(index) {
                Ok(i) if i < candidates.len() => return Ok(candidates.remove(i).name),
                _ => writeln!(out, "Error: {} is not one of the listed stations.", index)?,
            },
            Reply::Abort => return Err(StationError::Aborted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockIrailClient, StationSuggestion};
    use crate::prompt::LinePrompter;
    use std::io::Cursor;

    fn api() -> MockIrailClient {
        let stations = ["Gent-Sint-Pieters", "Gent-Dampoort", "Brugge"]
            .iter()
            .map(|name| StationSuggestion {
                id: format!("http://irail.be/stations/NMBS/{name}"),
                name: name.to_string(),
            })
            .collect();
        MockIrailClient::empty().with_stations(stations)
    }

    fn resolve(suggestion: &str, input: &str) -> (Result<String, StationError>, String) {
        let mut prompter = LinePrompter::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        let ctx = RenderContext::default().with_color(false);

        let result = resolve_station(&api(), &mut prompter, &mut out, &ctx, suggestion);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_match_needs_no_prompt() {
        let (result, text) = resolve("brug", "");
        assert_eq!(result.unwrap(), "Brugge");
        assert!(text.is_empty());
    }

    #[test]
    fn several_matches_are_listed() {
        let (result, text) = resolve("gent", "1\n");
        assert_eq!(result.unwrap(), "Gent-Dampoort");
        assert!(text.starts_with("0: Gent-Sint-Pieters\n1: Gent-Dampoort\n"));
        assert!(text.contains("Which station do you mean by gent?"));
    }

    #[test]
    fn out_of_range_choice_is_asked_again() {
        let (result, text) = resolve("gent", "4\n0\n");
        assert_eq!(result.unwrap(), "Gent-Sint-Pieters");
        assert!(text.contains("Error: 4 is not one of the listed stations."));
    }

    #[test]
    fn no_match() {
        let (result, _) = resolve("Amsterdam", "");
        let err = result.unwrap_err();
        assert!(matches!(err, StationError::NotFound(_)));
        assert_eq!(err.to_string(), "No station like Amsterdam found.");
    }

    #[test]
    fn abort_while_choosing() {
        let (result, _) = resolve("gent", "");
        assert!(matches!(result, Err(StationError::Aborted)));
    }
}
