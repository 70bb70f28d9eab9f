//! Turn a loaded config into a ready conversation manager.

use std::sync::Arc;
use std::time::Duration;

use nori_common::NoriError;
use nori_config::NoriConfig;
use nori_rag::{
    BackendConfig, ConversationManager, ConversationSettings, HttpBackend, IdentityParams,
    IdentityPolicy, TransportFailurePolicy,
};

use crate::cli::Args;

pub fn conversation_settings(config: &NoriConfig) -> ConversationSettings {
    let conversation = &config.conversation;
    let transport_failure = if conversation.record_transport_failures {
        TransportFailurePolicy::Record
    } else {
        TransportFailurePolicy::Drop
    };
    ConversationSettings::default()
        .with_greeting(conversation.greeting.clone())
        .with_suggestions(conversation.suggestions.clone())
        .with_max_pairs(conversation.max_history_pairs as usize)
        .with_max_message_chars(conversation.max_message_chars as usize)
        .with_identity_policy(IdentityPolicy {
            require_studio_id: config.identity.require_studio_id,
        })
        .with_transport_failure(transport_failure)
}

/// Identity from config, with CLI flags taking precedence.
pub fn identity(config: &NoriConfig, args: &Args) -> IdentityParams {
    let user_id = args
        .user_id
        .clone()
        .unwrap_or_else(|| config.identity.user_id.clone());
    let studio_id = args
        .studio_id
        .clone()
        .unwrap_or_else(|| config.identity.studio_id.clone());
    IdentityParams::new(user_id).with_studio_id(studio_id)
}

/// HTTP backend for the configured URL, `None` when no URL is set.
pub fn backend_config(config: &NoriConfig) -> Option<BackendConfig> {
    if !config.backend.is_configured() {
        return None;
    }
    let mut backend = BackendConfig::new(config.backend.url.trim())
        .with_timeout(Duration::from_secs(u64::from(config.backend.timeout_secs.max(1))));
    if let Some(key) = config.backend.api_key() {
        backend = backend.with_api_key(key);
    }
    Some(backend)
}

pub fn build_manager(config: &NoriConfig) -> Result<ConversationManager, NoriError> {
    let mut manager = ConversationManager::new(conversation_settings(config));
    match backend_config(config) {
        Some(backend) => {
            tracing::info!(url = %backend.url, timeout = ?backend.timeout, "retrieval backend configured");
            let http = HttpBackend::new(backend).map_err(|e| NoriError::Rag(e.to_string()))?;
            manager = manager.with_backend(Arc::new(http));
        }
        None => tracing::warn!("no backend URL configured; submissions are blocked"),
    }
    manager.initialize();
    Ok(manager)
}
