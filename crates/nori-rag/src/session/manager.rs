//! ConversationManager struct, settings and session lifecycle.

use std::sync::Arc;

use tracing::{debug, info};

use crate::identity::IdentityPolicy;
use crate::request::{recent_history, HistoryEntry};
use crate::{Message, RagError, RetrievalBackend};

use super::types::{Session, TransportFailurePolicy};

/// Behavior knobs for a conversation.
#[derive(Debug, Clone)]
pub struct ConversationSettings {
    /// Assistant message opening every session.
    pub greeting: String,
    /// Canned phrases offered until the first message is sent.
    pub suggestions: Vec<String>,
    /// User/assistant pairs forwarded as history.
    pub max_pairs: usize,
    /// Outgoing message length cap, in characters.
    pub max_message_chars: usize,
    pub identity_policy: IdentityPolicy,
    pub transport_failure: TransportFailurePolicy,
}

impl ConversationSettings {
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_max_pairs(mut self, max_pairs: usize) -> Self {
        self.max_pairs = max_pairs;
        self
    }

    pub fn with_max_message_chars(mut self, max: usize) -> Self {
        self.max_message_chars = max;
        self
    }

    pub fn with_identity_policy(mut self, policy: IdentityPolicy) -> Self {
        self.identity_policy = policy;
        self
    }

    pub fn with_transport_failure(mut self, policy: TransportFailurePolicy) -> Self {
        self.transport_failure = policy;
        self
    }
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self {
            greeting: "Hi 👋, I'm **Nori**. Ask me anything.".into(),
            suggestions: Vec::new(),
            max_pairs: 6,
            max_message_chars: 3000,
            identity_policy: IdentityPolicy::default(),
            transport_failure: TransportFailurePolicy::default(),
        }
    }
}

/// Owns a [`Session`] and mediates between a chat surface and the backend.
pub struct ConversationManager {
    pub(super) session: Session,
    pub(super) settings: ConversationSettings,
    /// `None` when no backend URL is configured; submissions are blocked.
    pub(super) backend: Option<Arc<dyn RetrievalBackend>>,
}

impl ConversationManager {
    pub fn new(settings: ConversationSettings) -> Self {
        Self {
            session: Session::new(),
            settings,
            backend: None,
        }
    }

    pub fn with_backend(mut self, backend: Arc<dyn RetrievalBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Replace the owned session, e.g. to resume a prepared transcript.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &ConversationSettings {
        &self.settings
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Insert the greeting if the transcript is empty. Returns whether it did.
    pub fn initialize(&mut self) -> bool {
        if !self.session.is_empty() {
            return false;
        }
        self.session
            .push(Message::assistant(self.settings.greeting.clone(), None));
        debug!(session = %self.session.id().short(), "session initialized");
        true
    }

    /// Clear messages, the suggestion flag and any pending input.
    ///
    /// Call [`initialize`](Self::initialize) afterwards to restore the greeting.
    pub fn reset(&mut self) {
        let old = self.session.id().short().to_string();
        self.session.reset();
        info!(old = %old, new = %self.session.id().short(), "session reset");
    }

    /// `reset` followed by `initialize`.
    pub fn restart(&mut self) {
        self.reset();
        self.initialize();
    }

    /// The quick-start phrases, until one is used or a message is typed.
    pub fn offer_suggestions(&self) -> Option<&[String]> {
        if self.session.suggestions_used || self.settings.suggestions.is_empty() {
            None
        } else {
            Some(&self.settings.suggestions)
        }
    }

    /// Queue suggestion `index` (zero-based) as the next input.
    pub fn select_suggestion(&mut self, index: usize) -> Result<&str, RagError> {
        let phrase = self
            .offer_suggestions()
            .and_then(|s| s.get(index))
            .cloned()
            .ok_or(RagError::UnknownSuggestion(index + 1))?;
        debug!(index, "suggestion selected");
        self.session.suggestions_used = true;
        Ok(self.session.pending_input.insert(phrase).as_str())
    }

    /// Take the queued suggestion, if any. It wins over typed input.
    pub fn take_pending_input(&mut self) -> Option<String> {
        self.session.pending_input.take()
    }

    /// History that would accompany the next request.
    pub fn recent_history(&self) -> Vec<HistoryEntry> {
        recent_history(self.session.messages(), self.settings.max_pairs)
    }
}
