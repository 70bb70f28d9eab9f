//! Reading `config.toml` into a [`NoriConfig`].

use std::path::Path;

use nori_common::ConfigError;
use tracing::{debug, info};

use crate::schema::NoriConfig;

use super::paths::{create_default_config, default_config_path};

/// Parse the file at `path`. Missing sections and keys take their defaults.
///
/// Validation is left to [`crate::load_config`], which runs it after the
/// environment overrides are in place.
pub fn load_from_path(path: &Path) -> Result<NoriConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config = toml::from_str::<NoriConfig>(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "config file parsed");
    Ok(config)
}

/// Load `nori/config.toml` under the user's config directory, writing the
/// commented template there first if it does not exist yet.
pub fn load_default() -> Result<NoriConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            info!(path = %path.display(), "wrote starter config");
            Ok(NoriConfig::default())
        }
        other => other,
    }
}
