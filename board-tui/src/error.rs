//! Error types for board-tui

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error
    #[error("Board error: {0}")]
    Board(#[from] libembedboard::BoardError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event handling error
    #[error("Event error: {0}")]
    Event(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
