//! Acknowledgment shown after a successful submission

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const THANK_YOU_MESSAGE: &str =
    "Thanks for applying! Our team will review your application soon.";

/// Draw the static acknowledgment view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Optional reset button
            Constraint::Min(0),
        ])
        .split(inner);

    let message = Paragraph::new(THANK_YOU_MESSAGE)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[1]);

    if app.allow_reset_after_submit() {
        let width = 20.min(chunks[2].width);
        let button_area = Rect {
            x: chunks[2].x + (chunks[2].width - width) / 2,
            width,
            ..chunks[2]
        };
        render_button(frame, button_area, "r  Start over", true, true);
    }
}
