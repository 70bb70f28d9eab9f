//! Configuration schema types for Nori.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the chat client ships with.

mod backend;
mod conversation;
mod identity;
mod system;

pub use backend::*;
pub use conversation::*;
pub use identity::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Nori.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NoriConfig {
    pub backend: BackendSection,
    pub identity: IdentitySection,
    pub conversation: ConversationSection,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_unconfigured() {
        let config = NoriConfig::default();
        assert!(!config.backend.is_configured());
        assert_eq!(config.backend.api_key(), None);
        assert_eq!(config.backend.timeout_secs, 60);
    }

    #[test]
    fn default_identity() {
        let config = NoriConfig::default();
        assert_eq!(config.identity.user_id, "userA");
        assert_eq!(config.identity.studio_id, "1001");
        assert!(config.identity.require_studio_id);
    }

    #[test]
    fn default_conversation() {
        let config = NoriConfig::default();
        assert_eq!(config.conversation.greeting, DEFAULT_GREETING);
        assert_eq!(config.conversation.suggestions.len(), 3);
        assert_eq!(config.conversation.max_history_pairs, 6);
        assert_eq!(config.conversation.max_message_chars, 3000);
        assert!(!config.conversation.record_transport_failures);
    }

    #[test]
    fn blank_api_key_is_none() {
        let mut config = NoriConfig::default();
        config.backend.api_key = "   ".into();
        assert_eq!(config.backend.api_key(), None);
        config.backend.api_key = "k-123".into();
        assert_eq!(config.backend.api_key(), Some("k-123"));
    }

    #[test]
    fn backend_debug_redacts_api_key() {
        let mut config = NoriConfig::default();
        config.backend.api_key = "super-secret".into();
        let dbg = format!("{:?}", config.backend);
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("[REDACTED]"));
    }

    #[test]
    fn log_level_parses_uppercase() {
        let logging: LoggingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(logging.level, LogLevel::Debug);
        assert!(logging.level.directive().contains("nori_rag=debug"));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: NoriConfig = toml::from_str(
            r#"
[conversation]
max_history_pairs = 2
"#,
        )
        .unwrap();
        assert_eq!(config.conversation.max_history_pairs, 2);
        assert_eq!(config.conversation.max_message_chars, 3000);
        assert_eq!(config.identity.user_id, "userA");
    }
}
