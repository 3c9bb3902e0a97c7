//! Error types for Embedboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Submit(#[from] SubmitError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BoardError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BoardError::Submit(_) => 3,
            BoardError::InvalidInput(_) => 3,
            BoardError::Config(_) => 1,
            BoardError::Render(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// A rejected submission, carrying the exact message shown to the user.
///
/// All three variants are local and recoverable: they block only the
/// submission that triggered them and clear on the next successful one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter a URL")]
    EmptyInput,

    #[error("Please enter a valid URL")]
    MalformedUrl,

    #[error("Unsupported social media platform. Supported: {0}")]
    UnsupportedPlatform(String),
}
