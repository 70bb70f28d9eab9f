//! Conversation session management.
//!
//! A `Session` holds the transcript, the one-shot suggestion flag and a
//! pending suggestion. The `ConversationManager` owns a session and runs
//! one request/response cycle per submitted message.

mod manager;
mod submit;
mod types;


pub use manager::{ConversationManager, ConversationSettings};
pub use types::{Session, TransportFailurePolicy, TurnOutcome};
