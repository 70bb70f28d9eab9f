//! Per-section validators: backend, identity and conversation.

use crate::schema::NoriConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate backend constraints. An empty URL is allowed here; it only
/// blocks submissions at runtime.
pub(crate) fn validate_backend(errors: &mut Vec<String>, config: &NoriConfig) {
    let url = config.backend.url.trim();
    if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "backend.url = {url:?} must start with http:// or https://"
        ));
    }
    validate_range(
        errors,
        "backend.timeout_secs",
        config.backend.timeout_secs,
        1,
        600,
    );
}

/// Validate identity defaults.
pub(crate) fn validate_identity(errors: &mut Vec<String>, config: &NoriConfig) {
    if config.identity.user_id.chars().any(char::is_control) {
        errors.push("identity.user_id contains control characters".into());
    }
    if config.identity.studio_id.chars().any(char::is_control) {
        errors.push("identity.studio_id contains control characters".into());
    }
}

/// Validate conversation limits and canned phrases.
pub(crate) fn validate_conversation(errors: &mut Vec<String>, config: &NoriConfig) {
    let conversation = &config.conversation;
    validate_not_blank(errors, "conversation.greeting", &conversation.greeting);
    validate_range(
        errors,
        "conversation.max_history_pairs",
        conversation.max_history_pairs,
        1,
        50,
    );
    validate_range(
        errors,
        "conversation.max_message_chars",
        conversation.max_message_chars,
        1,
        100_000,
    );
    for (i, suggestion) in conversation.suggestions.iter().enumerate() {
        validate_not_blank(errors, &format!("conversation.suggestions[{i}]"), suggestion);
    }
    if conversation.suggestions.len() > 9 {
        errors.push(format!(
            "conversation.suggestions has {} entries, at most 9 are supported",
            conversation.suggestions.len()
        ));
    }
}
