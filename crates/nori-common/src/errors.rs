use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NoriError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("backend error: {0}")]
    Rag(String),

    #[error("terminal error: {0}")]
    Terminal(String),
}
