//! Conversation framing: greeting, quick-start suggestions, history limits.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETING: &str = "Hi 👋, I'm **Nori**, your AI coach for fitness, \
nutrition and sleep.\n\n_Pick a goal to get started, or ask your question:_";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationSection {
    /// Assistant message inserted at the start of every session.
    pub greeting: String,
    /// Canned phrases offered once per session.
    pub suggestions: Vec<String>,
    /// Number of user/assistant pairs forwarded as history (valid range: 1-50).
    pub max_history_pairs: u32,
    /// Outgoing messages are cut to this many characters (valid range: 1-100000).
    pub max_message_chars: u32,
    /// Keep an assistant turn describing a failed request in the history.
    pub record_transport_failures: bool,
}

impl Default for ConversationSection {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            suggestions: vec![
                "Goal: build muscle".into(),
                "Goal: lose weight".into(),
                "Improve my sleep/energy".into(),
            ],
            max_history_pairs: 6,
            max_message_chars: 3000,
            record_transport_failures: false,
        }
    }
}
