//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Platform and orientation are recomputed from each stored URL on every
//! frame via `embed_plan` - nothing classification-related is cached.

use libembedboard::embed::{self, EmbedPlan};
use libembedboard::Orientation;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::AppState;

/// Rows each embed card occupies (meta lines plus borders)
const CARD_HEIGHT: u16 = 5;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, input: &TextArea) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL input
            Constraint::Length(3), // Error / hint line
            Constraint::Min(3),    // Embed cards
        ])
        .split(area);

    frame.render_widget(input, chunks[0]);
    render_message_bar(frame, chunks[1], state);
    render_board(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Render the line below the input: error message or key hints
fn render_message_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let widget = if let Some(ref error) = state.error {
        Paragraph::new(error.as_str())
            .style(style_if(state, Style::default().fg(Color::Red)))
            .block(Block::default().borders(Borders::ALL).title(" Error "))
            .wrap(Wrap { trim: true })
    } else {
        let hint = format!(
            "{} embed(s) | Enter: add | Up/Down: select | Ctrl+D: remove | F1: help | Ctrl+Q: quit",
            state.board.len()
        );
        Paragraph::new(hint)
            .style(style_if(state, Style::default().fg(Color::Gray)))
            .block(Block::default().borders(Borders::ALL))
    };

    frame.render_widget(widget, area);
}

/// Render the embed card list, or the empty-state placeholder
fn render_board(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.board.is_empty() {
        render_empty_state(frame, area);
        return;
    }

    // Keep the selected card in view
    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let offset = state
        .selected
        .unwrap_or(0)
        .saturating_sub(visible.saturating_sub(1));

    let mut y = area.y;
    for (index, entry) in state.board.iter().enumerate().skip(offset) {
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        let plan = embed::embed_plan(entry.url(), &state.heights);
        render_card(frame, card_area, state, index, entry.url(), plan.as_ref());
        y += CARD_HEIGHT;
    }
}

/// Render one embed card: truncated URL, tags, and the embed body line
fn render_card(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    index: usize,
    url: &str,
    plan: Option<&EmbedPlan>,
) {
    let selected = state.selected == Some(index);

    let border_style = if selected {
        style_if(state, Style::default().fg(Color::Cyan))
    } else {
        Style::default()
    };

    // Full URL lives in the title; the body line below shows it truncated
    let block = Block::default()
        .title(format!(" {} {} ", index + 1, url))
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = vec![Line::from(Span::styled(
        truncate_url(url, area.width.saturating_sub(4) as usize),
        style_if(state, Style::default().fg(Color::DarkGray)),
    ))];

    match plan {
        Some(plan) => {
            lines.push(Line::from(vec![
                tag_span(
                    state,
                    plan.platform.as_str().to_uppercase(),
                    Color::Blue,
                ),
                Span::raw(" "),
                tag_span(
                    state,
                    plan.orientation.as_str().to_uppercase(),
                    orientation_color(plan.orientation),
                ),
            ]));
            lines.push(Line::from(Span::raw(format!(
                "[{} embed · {}% × {}px]",
                plan.target.as_str(),
                plan.request.width_percent,
                plan.request.height
            ))));
        }
        None => {
            // Stored before a rule change; no platform matches anymore
            lines.push(Line::from(tag_span(
                state,
                "UNKNOWN".to_string(),
                orientation_color(Orientation::Unknown),
            )));
            lines.push(Line::from(Span::raw("[no renderer]")));
        }
    }

    let card = Paragraph::new(lines).block(block);
    frame.render_widget(card, area);
}

/// Render the placeholder shown when no embeds have been added yet
fn render_empty_state(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No embeds yet",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Add a social media URL above to get started!"),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Enter     - Add the URL in the input"),
        Line::from("  Up/Down   - Select a card"),
        Line::from("  Ctrl+D    - Remove the selected card"),
        Line::from("  Delete    - Remove the selected card"),
        Line::from("  Esc       - Dismiss error / close help"),
        Line::from("  F1        - Toggle this help"),
        Line::from("  Ctrl+Q    - Quit"),
        Line::from(""),
        Line::from("Supported: Twitter/X, Instagram, YouTube, TikTok,"),
        Line::from("Facebook, LinkedIn, Pinterest, Bluesky"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Tag color scheme: green=portrait, yellow=square, gray otherwise
fn orientation_color(orientation: Orientation) -> Color {
    match orientation {
        Orientation::Portrait => Color::Green,
        Orientation::Square => Color::Yellow,
        Orientation::Landscape | Orientation::Unknown => Color::Gray,
    }
}

fn tag_span(state: &AppState, text: String, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", text),
        style_if(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    )
}

/// Apply a style only when colors are enabled
fn style_if(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default()
    }
}

/// Shorten a URL for display, keeping the start
fn truncate_url(url: &str, max: usize) -> String {
    if url.chars().count() <= max {
        url.to_string()
    } else {
        let cut: String = url.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_url_short_is_untouched() {
        assert_eq!(truncate_url("https://a.example", 40), "https://a.example");
    }

    #[test]
    fn test_truncate_url_long_gets_ellipsis() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        let shortened = truncate_url(url, 20);
        assert_eq!(shortened.chars().count(), 20);
        assert!(shortened.ends_with('…'));
    }

    #[test]
    fn test_orientation_colors_match_the_tag_scheme() {
        assert_eq!(orientation_color(Orientation::Portrait), Color::Green);
        assert_eq!(orientation_color(Orientation::Square), Color::Yellow);
        assert_eq!(orientation_color(Orientation::Landscape), Color::Gray);
        assert_eq!(orientation_color(Orientation::Unknown), Color::Gray);
    }

    fn draw_to_string(state: &AppState) -> String {
        use ratatui::{backend::TestBackend, Terminal};

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let input = TextArea::default();

        terminal.draw(|frame| render(frame, state, &input)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_board_shows_placeholder() {
        let state = AppState::new();
        let content = draw_to_string(&state);

        assert!(content.contains("No embeds yet"));
        assert!(content.contains("Add a social media URL above"));
    }

    #[test]
    fn test_render_card_tags_and_full_url_in_title() {
        let mut state = AppState::new();
        state.board.push("https://www.youtube.com/shorts/abc");
        state.selected = Some(0);

        let content = draw_to_string(&state);

        // Full URL is recoverable from the card title, not just the
        // truncated body line
        assert!(content.contains("https://www.youtube.com/shorts/abc"));
        assert!(content.contains("YOUTUBE"));
        assert!(content.contains("PORTRAIT"));
        assert!(content.contains("600px"));
    }

    #[test]
    fn test_render_error_message_bar() {
        let state = AppState {
            error: Some("Please enter a valid URL".to_string()),
            ..AppState::new()
        };

        let content = draw_to_string(&state);
        assert!(content.contains("Please enter a valid URL"));
    }

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 60, parent);
        assert!(popup.x >= parent.x && popup.right() <= parent.right());
        assert!(popup.y >= parent.y && popup.bottom() <= parent.bottom());
    }
}
