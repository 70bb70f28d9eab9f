//! Conversation engine for the Nori knowledge-base chat client.
//!
//! Provides:
//! - Session state with greeting, one-shot suggestions and reset
//! - Identity validation and outgoing request assembly
//! - An HTTP client for the retrieval backend
//! - Response normalization, hit merging and source formatting

pub mod client;
pub mod identity;
pub mod request;
pub mod response;
pub mod session;
pub mod sources;
pub mod surface;

use async_trait::async_trait;

pub use client::{BackendConfig, HttpBackend};
pub use identity::{IdentityParams, IdentityPolicy, ValidIdentity};
pub use request::{recent_history, truncate_chars, HistoryEntry, OutgoingRequest};
pub use response::{merge_hits, BackendResponse, RawPayload, Reply, RetrievalHit};
pub use session::{
    ConversationManager, ConversationSettings, Session, TransportFailurePolicy, TurnOutcome,
};
pub use sources::format_sources;
pub use surface::{ChatSurface, TurnPhase};

/// Transport to the retrieval backend.
///
/// Implementations only move bytes: any HTTP status counts as a reply.
/// Interpreting the body is left to [`response::Reply::interpret`].
#[async_trait]
pub trait RetrievalBackend: Send + Sync {
    async fn send(&self, request: &OutgoingRequest) -> Result<BackendReply, RagError>;
}

/// Raw HTTP reply from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: String,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One entry of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Formatted retrieval sources, assistant turns only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: None,
        }
    }

    pub fn assistant(content: impl Into<String>, sources: Option<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum RagError {
    #[error("configuration invalid: {0}")]
    Configuration(String),
    #[error("{0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("no suggestion #{0} is available")]
    UnknownSuggestion(usize),
}

impl RagError {
    /// Error type name shown next to the message on the chat surface.
    pub fn kind(&self) -> &'static str {
        match self {
            RagError::Configuration(_) => "ConfigurationError",
            RagError::Validation(_) => "ValidationError",
            RagError::Network(_) => "NetworkError",
            RagError::Timeout(_) => "TimeoutError",
            RagError::Parse(_) => "ParseError",
            RagError::UnknownSuggestion(_) => "UnknownSuggestion",
        }
    }

    /// Network failures and timeouts.
    pub fn is_transport(&self) -> bool {
        matches!(self, RagError::Network(_) | RagError::Timeout(_))
    }
}

impl From<serde_json::Error> for RagError {
    fn from(e: serde_json::Error) -> Self {
        RagError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn message_without_sources_omits_field() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn error_kinds() {
        assert_eq!(RagError::Timeout("60s".into()).kind(), "TimeoutError");
        assert!(RagError::Timeout("60s".into()).is_transport());
        assert!(RagError::Network("refused".into()).is_transport());
        assert!(!RagError::Validation("x".into()).is_transport());
        assert_eq!(
            RagError::UnknownSuggestion(4).to_string(),
            "no suggestion #4 is available"
        );
    }
}
