//! board-tui - Terminal UI for Embedboard
//!
//! Paste social media post URLs into the input bar and see them collected
//! as embed cards with platform and orientation tags.

use board_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};
use libembedboard::Config;

const PLACEHOLDER: &str =
    "Enter social media URL (Twitter, Instagram, YouTube, TikTok, Facebook, LinkedIn, Pinterest, Bluesky)";

fn main() -> Result<()> {
    libembedboard::logging::init_default();

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut board_tui::terminal::Tui) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        Config::default()
    });

    let mut state = AppState::with_heights(config.heights);

    // Single-line URL input (stateful widget)
    let mut input = new_input();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        // Input border reflects the last submission outcome
        let border_color = if state.error.is_some() {
            ratatui::style::Color::Red
        } else {
            ratatui::style::Color::Green
        };
        input.set_block(
            ratatui::widgets::Block::default()
                .title(" Add Embed ")
                .borders(ratatui::widgets::Borders::ALL)
                .border_style(ratatui::style::Style::default().fg(border_color)),
        );

        terminal.draw(|frame| {
            ui::render(frame, &state, &input);
        })?;

        let tui_event = event_handler.next()?;

        let action = match tui_event {
            board_tui::app::event::TuiEvent::Key(key) => {
                use crossterm::event::{KeyCode, KeyModifiers};

                // Keys the reducer owns; everything else edits the input
                let is_global_key = matches!(
                    (key.code, key.modifiers),
                    (KeyCode::Enter, _)
                        | (KeyCode::Esc, _)
                        | (KeyCode::F(_), _)
                        | (KeyCode::Up, _)
                        | (KeyCode::Down, _)
                        | (KeyCode::Delete, _)
                        | (KeyCode::Char('c'), KeyModifiers::CONTROL)
                        | (KeyCode::Char('q'), KeyModifiers::CONTROL)
                        | (KeyCode::Char('d'), KeyModifiers::CONTROL)
                );

                // An error message never blocks typing; only help captures keys
                let overlay_open = state.help_visible;

                if !is_global_key && !overlay_open {
                    input.input(key);
                    Action::InputChanged(input.lines().join(""))
                } else {
                    Action::Key(key)
                }
            }
            other => other.into(),
        };

        state = reduce(state, action);

        // Reset the textarea after a successful submission cleared the draft
        if state.draft.is_empty() && !input.is_empty() {
            input = new_input();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn new_input() -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_placeholder_text(PLACEHOLDER);
    input.set_cursor_line_style(ratatui::style::Style::default());
    input
}
