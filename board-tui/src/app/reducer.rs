//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, no I/O, no side effects. Submission
//! evaluation (URL validity, platform detection) is itself a pure function
//! from the core library, so the whole flow runs inside the reducer.

use crossterm::event::{KeyCode, KeyModifiers};
use libembedboard::submit::classify_submission;

use super::actions::Action;
use super::state::AppState;

/// Pure reducer function
///
/// Takes current state and an action, returns new state. Deterministic:
/// the same inputs always produce the same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Input ===
        Action::InputChanged(draft) => AppState { draft, ..state },

        Action::SubmitRequested => submit_draft(state),

        // === Board ===
        Action::SelectNext => {
            let selected = match (state.selected, state.board.len()) {
                (_, 0) => None,
                (None, _) => Some(0),
                (Some(i), len) => Some((i + 1).min(len - 1)),
            };
            AppState { selected, ..state }
        }

        Action::SelectPrev => {
            let selected = match (state.selected, state.board.len()) {
                (_, 0) => None,
                (None, len) => Some(len - 1),
                (Some(i), _) => Some(i.saturating_sub(1)),
            };
            AppState { selected, ..state }
        }

        Action::RemoveSelected => remove_selected(state),

        // === Overlays ===
        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },
    }
}

/// Evaluate the draft and either append it or surface the rejection
///
/// On success the draft and any previous error are cleared. On failure the
/// draft stays put so the user can correct it.
fn submit_draft(state: AppState) -> AppState {
    match classify_submission(&state.draft) {
        Ok(submission) => {
            let mut board = state.board;
            board.push(submission.url);
            AppState {
                board,
                draft: String::new(),
                error: None,
                ..state
            }
        }
        Err(e) => AppState {
            error: Some(e.to_string()),
            ..state
        },
    }
}

/// Remove the selected card and clamp the selection
fn remove_selected(state: AppState) -> AppState {
    let Some(index) = state.selected else {
        return state;
    };

    let mut board = state.board;
    board.remove_at(index);

    let selected = if board.is_empty() {
        None
    } else {
        Some(index.min(board.len() - 1))
    };

    AppState {
        board,
        selected,
        ..state
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
/// Printable characters never reach this function - the event loop routes
/// them into the input textarea first.
fn handle_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q'), KeyModifiers::CONTROL) => reduce(state, Action::Quit),

        // Submit
        (KeyCode::Enter, _) => reduce(state, Action::SubmitRequested),

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            reduce(state, action)
        }

        // Card selection
        (KeyCode::Down, _) => reduce(state, Action::SelectNext),
        (KeyCode::Up, _) => reduce(state, Action::SelectPrev),

        // Remove selected card
        (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::Delete, _) => {
            reduce(state, Action::RemoveSelected)
        }

        // Esc closes overlays in priority order
        (KeyCode::Esc, _) if state.error.is_some() => reduce(state, Action::DismissError),
        (KeyCode::Esc, _) if state.help_visible => reduce(state, Action::HideHelp),

        _ => state,
    }
}
