//! Environment variable overrides applied on top of the TOML file.

use crate::schema::NoriConfig;
use tracing::debug;

pub const ENV_API_URL: &str = "NORI_API_URL";
pub const ENV_API_KEY: &str = "NORI_API_KEY";
pub const ENV_USER_ID: &str = "NORI_USER_ID";
pub const ENV_STUDIO_ID: &str = "NORI_STUDIO_ID";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut NoriConfig) {
    apply_overrides_with(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` to resolve variables. Unset or blank
/// variables leave the file value untouched.
pub fn apply_overrides_with<F>(config: &mut NoriConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(url) = get(ENV_API_URL) {
        debug!("backend.url overridden by {ENV_API_URL}");
        config.backend.url = url;
    }
    if let Some(key) = get(ENV_API_KEY) {
        debug!("backend.api_key overridden by {ENV_API_KEY}");
        config.backend.api_key = key;
    }
    if let Some(user_id) = get(ENV_USER_ID) {
        config.identity.user_id = user_id;
    }
    if let Some(studio_id) = get(ENV_STUDIO_ID) {
        config.identity.studio_id = studio_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_backend_and_identity() {
        let mut config = NoriConfig::default();
        apply_overrides_with(
            &mut config,
            lookup(&[
                (ENV_API_URL, "https://kb.example.com"),
                (ENV_API_KEY, "secret"),
                (ENV_USER_ID, "u1"),
                (ENV_STUDIO_ID, "s9"),
            ]),
        );
        assert_eq!(config.backend.url, "https://kb.example.com");
        assert_eq!(config.backend.api_key(), Some("secret"));
        assert_eq!(config.identity.user_id, "u1");
        assert_eq!(config.identity.studio_id, "s9");
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut config = NoriConfig::default();
        config.backend.url = "https://from-file".into();
        apply_overrides_with(&mut config, lookup(&[(ENV_API_URL, "   ")]));
        assert_eq!(config.backend.url, "https://from-file");
    }

    #[test]
    fn missing_values_leave_defaults() {
        let mut config = NoriConfig::default();
        apply_overrides_with(&mut config, lookup(&[]));
        assert_eq!(config.identity.user_id, "userA");
        assert!(!config.backend.is_configured());
    }
}
