//! Application module
//!
//! Contains the core application architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//!
//! All state transitions, including submission and removal, happen through
//! the reducer; the event loop only feeds it actions and draws the result.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, UiConfig};
