//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = NoriConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn accepts_https_url() {
    let mut config = NoriConfig::default();
    config.backend.url = "https://kb.example.com/chat".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_url_without_scheme() {
    let mut config = NoriConfig::default();
    config.backend.url = "kb.example.com/chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.url"));
}

#[test]
fn catches_zero_timeout() {
    let mut config = NoriConfig::default();
    config.backend.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.timeout_secs"));
}

#[test]
fn catches_history_pairs_out_of_range() {
    let mut config = NoriConfig::default();
    config.conversation.max_history_pairs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.max_history_pairs"));
}

#[test]
fn catches_blank_greeting_and_suggestion() {
    let mut config = NoriConfig::default();
    config.conversation.greeting = "  ".into();
    config.conversation.suggestions.push(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.greeting"));
    assert!(err.contains("conversation.suggestions[3]"));
}

#[test]
fn catches_too_many_suggestions() {
    let mut config = NoriConfig::default();
    config.conversation.suggestions = (0..10).map(|i| format!("s{i}")).collect();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("at most 9"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = NoriConfig::default();
    config.backend.timeout_secs = 9999;
    config.conversation.max_message_chars = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.timeout_secs"));
    assert!(err.contains("conversation.max_message_chars"));
    assert!(err.contains("; "));
}
