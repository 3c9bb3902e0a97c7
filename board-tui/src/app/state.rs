//! Application state
//!
//! Immutable state structure; all transitions happen through the reducer
//! (see `reducer.rs`). The board itself lives here - it is the single
//! mutable collection in the application and is only touched by reducer
//! transitions.

use libembedboard::{Board, HeightsConfig};

/// Root application state
///
/// This is the single source of truth for the entire application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// In-progress text in the URL input
    pub draft: String,

    /// Current user-visible error message, if any
    ///
    /// Set on a failed submission, cleared by the next successful one
    /// (or by dismissing it). Never sticky across attempts.
    pub error: Option<String>,

    /// Ordered list of accepted URLs
    pub board: Board,

    /// Index of the selected card, when any cards exist
    pub selected: Option<usize>,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Fallback display heights per orientation
    pub heights: HeightsConfig,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("BOARD_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("BOARD_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            draft: String::new(),
            error: None,
            board: Board::new(),
            selected: None,
            help_visible: false,
            heights: HeightsConfig::default(),
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state with configured heights
    pub fn with_heights(heights: HeightsConfig) -> Self {
        Self {
            heights,
            ..Self::default()
        }
    }
}
