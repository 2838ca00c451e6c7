//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the current phase
fn get_phase_hints(app: &App) -> &'static str {
    match app.form.phase() {
        FormPhase::Editing => " Tab/Shift+Tab: move  Space/Enter: choose  ←/→: select",
        FormPhase::Submitting => " Submitting...",
        FormPhase::Submitted if app.allow_reset_after_submit() => " r: start over  Esc: quit",
        FormPhase::Submitted => " Esc: quit",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_phase_hints(app),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
