//! The seam between the conversation manager and whatever draws the chat.

use std::fmt;

use nori_common::Notice;

use crate::Message;

/// Where a turn currently is. A turn always starts and ends at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Validating,
    Sending,
    Parsing,
    AppendAssistantMessage,
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnPhase::Idle => "idle",
            TurnPhase::Validating => "validating",
            TurnPhase::Sending => "sending",
            TurnPhase::Parsing => "parsing",
            TurnPhase::AppendAssistantMessage => "append-assistant-message",
        };
        f.write_str(name)
    }
}

/// A chat UI: renders transcript entries and inline notices.
///
/// The surface must not start a new submission while one is in flight.
pub trait ChatSurface {
    fn render_message(&mut self, message: &Message);

    fn notify(&mut self, notice: Notice);

    /// Called on every phase change of the current turn.
    fn phase(&mut self, _phase: TurnPhase) {}
}
