//! Form rendering: field stack on the left, actions on the right

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::ActionButton;
use crate::ui::components::{render_action_button, spinner_frame, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the editable form with its action panel
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(26), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Index of the first field to draw so that `focused` fits in `available` rows
pub fn first_visible_field(heights: &[u16], focused: Option<usize>, available: u16) -> usize {
    let Some(focused) = focused.filter(|&i| i < heights.len()) else {
        return 0;
    };
    let mut start = 0;
    let mut used: u32 = heights[..=focused]
        .iter()
        .map(|&h| u32::from(h))
        .sum();
    while used > u32::from(available) && start < focused {
        used -= u32::from(heights[start]);
        start += 1;
    }
    start
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = !app.state.is_action_row_active() && !app.form.is_submitting();
    let block = Block::default()
        .title(" Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.state.focus_targets.is_empty() {
        let empty = Paragraph::new("This form has no fields")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let fields = &app.form.schema().fields;
    let errors = app.form.errors();
    let heights: Vec<u16> = fields
        .iter()
        .map(|f| field_height(f, errors.get(&f.name).is_some()))
        .collect();

    let focused = app.state.focused_field();
    let start = first_visible_field(&heights, focused, inner.height);

    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    for (index, field) in fields.iter().enumerate().skip(start) {
        let height = heights[index];
        if height == 0 {
            continue;
        }
        // A focused field taller than the panel is drawn clipped
        if y >= bottom || (y.saturating_add(height) > bottom && focused != Some(index)) {
            break;
        }
        let Some(value) = app.form.value(&field.name) else {
            continue;
        };
        let field_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: height.min(bottom - y),
        };
        draw_field(
            frame,
            field_area,
            field,
            value,
            app.state.option_cursor(&field.name),
            form_focused && focused == Some(index),
            errors.get(&field.name),
        );
        y = y.saturating_add(height);
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_submitting = app.form.is_submitting();
    let is_focused = app.state.is_action_row_active() && !is_submitting;
    let selected = app.state.selected_button;

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(2),             // Progress
            Constraint::Min(0),                // Help text
        ])
        .split(inner);

    render_action_button(
        frame,
        chunks[0],
        ActionButton::Submit.label(),
        is_focused && selected == ActionButton::Submit,
        !is_submitting,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        chunks[1],
        ActionButton::Reset.label(),
        is_focused && selected == ActionButton::Reset,
        !is_submitting,
        Some(Color::Gray),
    );

    if is_submitting {
        let progress = Paragraph::new(Line::from(vec![
            Span::styled(
                spinner_frame(app.state.spinner_frame),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" Submitting..."),
        ]));
        frame.render_widget(progress, chunks[2]);
    }

    let help = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field"),
        ]),
        Line::from(vec![
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(": choose option"),
        ]),
        Line::from(vec![
            Span::styled(
                crate::platform::SUBMIT_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": submit"),
        ]),
        Line::from(vec![
            Span::styled(
                crate::platform::RESET_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": reset"),
        ]),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ]),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
