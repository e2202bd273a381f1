//! Interactive expand/drill-down loop over a route's itineraries.
//!
//! ```text
//! ShowingSummary -> AwaitingContinueConfirmation -> AwaitingSelection
//!                                                   |-> ExpandOne -> AwaitingSelection | Stop
//!                                                   |-> ExpandAll -> Stop
//!                                                   '-> Stop
//! ```

use std::io::{self, Write};

use tracing::debug;

use crate::prompt::{Prompter, Reply};
use crate::render::{Line, RenderContext, choice_lines, render_itinerary, summary_line, write_lines};

use super::list::ItineraryList;

/// Selection that expands every remaining itinerary.
pub const EXPAND_ALL: i64 = 9;

const CONTINUE_QUESTION: &str = "Would you like to expand any of these?";
const SELECTION_QUESTION: &str = "Which one (type 9 for all)?";
const COMPLETION_NOTICE: &str = "These were all the connections!";

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// User did not want to see more
    Declined,
    /// Input stream closed while prompting
    Aborted,
    /// Every remaining itinerary was expanded at once
    ExpandedAll(usize),
    /// Every itinerary was shown one way or another
    Exhausted,
}

/// States of the selection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    ShowingSummary,
    AwaitingContinueConfirmation,
    AwaitingSelection,
    ExpandOne(i64),
    ExpandAll,
    Stop(LoopOutcome),
}

/// Owns the remaining itineraries of one route query and walks the user
/// through them.
#[derive(Debug)]
pub struct SelectionLoop {
    list: ItineraryList,
    ctx: RenderContext,
}

impl SelectionLoop {
    pub fn new(list: ItineraryList, ctx: &RenderContext) -> Self {
        Self { list, ctx: *ctx }
    }

    /// Itineraries not yet shown.
    pub fn remaining(&self) -> &ItineraryList {
        &self.list
    }

    /// Run until a terminal state.
    pub fn run(
        &mut self,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> io::Result<LoopOutcome> {
        let mut state = LoopState::ShowingSummary;
        loop {
            if let LoopState::Stop(outcome) = state {
                debug!(?outcome, remaining = self.list.len(), "selection loop finished");
                return Ok(outcome);
            }
            state = self.step(state, prompter, out)?;
        }
    }

    /// Perform one transition.
    pub fn step(
        &mut self,
        state: LoopState,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> io::Result<LoopState> {
        let next = match state {
            LoopState::ShowingSummary => self.show_summary(out)?,

            LoopState::AwaitingContinueConfirmation => {
                match prompter.confirm(out, CONTINUE_QUESTION)? {
                    Reply::Answer(true) => LoopState::AwaitingSelection,
                    Reply::Answer(false) => LoopState::Stop(LoopOutcome::Declined),
                    Reply::Abort => LoopState::Stop(LoopOutcome::Aborted),
                }
            }

            LoopState::AwaitingSelection => match prompter.integer(out, SELECTION_QUESTION)? {
                Reply::Answer(EXPAND_ALL) => LoopState::ExpandAll,
                Reply::Answer(index) => LoopState::ExpandOne(index),
                Reply::Abort => LoopState::Stop(LoopOutcome::Aborted),
            },

            LoopState::ExpandOne(index) => match self.list.take(index) {
                Ok(itinerary) => {
                    write_lines(out, &render_itinerary(&itinerary, &self.ctx), &self.ctx)?;
                    if self.list.is_empty() {
                        self.write_notice(out)?;
                        LoopState::Stop(LoopOutcome::Exhausted)
                    } else {
                        write_lines(out, &choice_lines(self.list.iter()), &self.ctx)?;
                        LoopState::AwaitingSelection
                    }
                }
                Err(e) => {
                    writeln!(out, "Error: {e}")?;
                    LoopState::AwaitingSelection
                }
            },

            LoopState::ExpandAll => {
                let all = self.list.drain_all();
                for itinerary in &all {
                    write_lines(out, &render_itinerary(itinerary, &self.ctx), &self.ctx)?;
                }
                LoopState::Stop(LoopOutcome::ExpandedAll(all.len()))
            }

            LoopState::Stop(outcome) => LoopState::Stop(outcome),
        };

        Ok(next)
    }

    fn show_summary(&mut self, out: &mut dyn Write) -> io::Result<LoopState> {
        let Some(best) = self.list.pop_best() else {
            return Ok(LoopState::Stop(LoopOutcome::Exhausted));
        };

        let mut lines = vec![summary_line(&best, &self.ctx)];
        lines.extend(render_itinerary(&best, &self.ctx));
        write_lines(out, &lines, &self.ctx)?;

        if self.list.is_empty() {
            self.write_notice(out)?;
            return Ok(LoopState::Stop(LoopOutcome::Exhausted));
        }

        write_lines(out, &choice_lines(self.list.iter()), &self.ctx)?;
        Ok(LoopState::AwaitingContinueConfirmation)
    }

    fn write_notice(&self, out: &mut dyn Write) -> io::Result<()> {
        write_lines(out, &[Line::plain(COMPLETION_NOTICE)], &self.ctx)
    }
}
