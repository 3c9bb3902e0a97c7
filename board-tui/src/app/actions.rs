//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick (poll timeout elapsed)
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Input ===
    /// Draft text changed in the URL input
    InputChanged(String),

    /// User submitted the current draft (Enter)
    SubmitRequested,

    // === Board ===
    /// Move card selection down
    SelectNext,

    /// Move card selection up
    SelectPrev,

    /// Remove the currently selected card
    RemoveSelected,

    // === Overlays ===
    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Clear the current error message
    DismissError,

    /// Quit the application
    Quit,
}
