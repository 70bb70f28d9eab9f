//! Outgoing request assembly: message truncation and recent history.

use serde::{Deserialize, Serialize};

use crate::identity::ValidIdentity;
use crate::{Message, Role};

/// A transcript entry as sent to the backend, without sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for HistoryEntry {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

/// JSON body POSTed to the retrieval backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingRequest {
    pub message: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio_id: Option<String>,
    pub history: Vec<HistoryEntry>,
}

impl OutgoingRequest {
    pub fn new(message: impl Into<String>, identity: &ValidIdentity, history: Vec<HistoryEntry>) -> Self {
        Self {
            message: message.into(),
            user_id: identity.user_id().to_string(),
            studio_id: identity.studio_id().map(String::from),
            history,
        }
    }
}

/// Keep at most `max` characters of `text`.
///
/// Counts `char`s, not bytes, so a multi-byte code point is never split.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// The last `max_pairs` user/assistant pairs, oldest first.
///
/// Returns at most `2 * max_pairs` entries; the greeting counts as an
/// assistant entry like any other.
pub fn recent_history(messages: &[Message], max_pairs: usize) -> Vec<HistoryEntry> {
    let keep = max_pairs.saturating_mul(2);
    let start = messages.len().saturating_sub(keep);
    messages[start..].iter().map(HistoryEntry::from).collect()
}
