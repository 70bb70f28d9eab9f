//! Session state and turn results.

use nori_common::SessionId;

use crate::{Message, RagError};

/// State of one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) id: SessionId,
    /// Transcript, append-only until reset.
    pub(super) messages: Vec<Message>,
    pub(super) suggestions_used: bool,
    /// A clicked suggestion waiting to be submitted as if typed.
    pub(super) pending_input: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            messages: Vec::new(),
            suggestions_used: false,
            pending_input: None,
        }
    }

    /// Drop all state and start over under a fresh id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn suggestions_used(&self) -> bool {
        self.suggestions_used
    }

    pub fn pending_input(&self) -> Option<&str> {
        self.pending_input.as_deref()
    }

    pub(super) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// What to do with the transcript when the HTTP call itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportFailurePolicy {
    /// Leave only the user's turn; the failure is shown as a notice.
    #[default]
    Drop,
    /// Also append an assistant turn describing the failure.
    Record,
}

/// Result of one `submit` call.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Empty input; nothing happened.
    Ignored,
    /// Configuration or identity problem; the transcript is untouched.
    Rejected(RagError),
    /// The backend answered with status 200 and a JSON object.
    Answered,
    /// The backend answered with a non-200 status.
    BackendError { status: u16 },
    /// Status 200 with a body that is not a JSON object.
    Malformed,
    /// Network failure or timeout.
    TransportFailed(RagError),
}

impl TurnOutcome {
    /// Whether the backend was reached and its reply became an assistant turn.
    pub fn produced_reply(&self) -> bool {
        matches!(
            self,
            TurnOutcome::Answered | TurnOutcome::BackendError { .. } | TurnOutcome::Malformed
        )
    }
}
