//! Nori configuration system.
//!
//! Provides TOML-based configuration with environment overrides and
//! validation. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nori_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("backend configured: {}", config.backend.is_configured());
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::apply_env_overrides;
pub use schema::{NoriConfig, CONFIG_SCHEMA_VERSION};

use nori_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created on first use; an explicit path must exist.
/// Environment overrides are applied after the file is read, then the
/// result is validated. Validation problems are logged, not fatal.
pub fn load_config(path: Option<&Path>) -> Result<NoriConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);

    if let Err(e) = validation::validate(&config) {
        tracing::warn!("{e}");
    }
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string with the API key masked.
pub fn config_to_json(config: &NoriConfig) -> String {
    let mut masked = config.clone();
    if !masked.backend.api_key.is_empty() {
        masked.backend.api_key = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&masked)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
