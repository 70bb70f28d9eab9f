//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive covering every crate in the workspace.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "nori=debug,nori_rag=debug,nori_config=debug",
            LogLevel::Info => "nori=info,nori_rag=info,nori_config=info",
            LogLevel::Warning => "nori=warn,nori_rag=warn,nori_config=warn",
            LogLevel::Error => "nori=error,nori_rag=error,nori_config=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
