use thiserror::Error;

/// Glock error types
#[derive(Error, Debug)]
pub enum GlockError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for Glock operations
pub type Result<T> = std::result::Result<T, GlockError>;
