//! Where the config file lives.

use std::path::{Path, PathBuf};

use nori_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "nori";
const FILE_NAME: &str = "config.toml";

/// `~/.config/nori/config.toml` on Linux, the platform equivalent elsewhere.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no config directory for this platform".into()))
}

/// Write the starter template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", path.display()))
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err("create directory for", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("write", e))
}
