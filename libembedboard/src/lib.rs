//! Embedboard - collect social media post URLs and route them to embed renderers
//!
//! This library provides the core logic for Embedboard: classifying a pasted
//! URL into a known platform, inferring a display orientation from the URL
//! shape, and planning the dispatch to a platform-specific embed renderer.

pub mod board;
pub mod config;
pub mod embed;
pub mod error;
pub mod logging;
pub mod orientation;
pub mod platform;
pub mod submit;

// Re-export commonly used types
pub use board::{Board, EmbedEntry};
pub use config::{Config, HeightsConfig};
pub use embed::{EmbedPlan, EmbedRenderer, EmbedRequest};
pub use error::{BoardError, Result, SubmitError};
pub use orientation::Orientation;
pub use platform::Platform;
pub use submit::Submission;
