//! Field rendering utilities for forms
//!
//! Each field type has a draw half (descriptor + value -> cells) and an input
//! half (descriptor + value + key -> optional change). Neither half keeps
//! state; the option highlight is owned by the caller.

use crate::state::{FieldChange, FieldDescriptor, FieldType, FieldValue};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Label of the explicit unset entry of a select field
pub const SELECT_PLACEHOLDER: &str = "Please select an option";

/// Hint appended to multi-select labels
pub const MULTI_SELECT_HINT: &str = "(Select all that apply)";

/// Rows a field occupies, including its error line
pub fn field_height(field: &FieldDescriptor, has_error: bool) -> u16 {
    let widget = match field.field_type {
        FieldType::Text | FieldType::Select => 3,
        FieldType::Checkbox | FieldType::MultiSelect => u16::try_from(field.options.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2),
        FieldType::Unknown(_) => return 0,
    };
    widget.saturating_add(u16::from(has_error))
}

/// Draw one field with its inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    value: &FieldValue,
    cursor: usize,
    is_active: bool,
    error: Option<&str>,
) {
    if !field.field_type.is_renderable() {
        return;
    }

    let (widget_area, error_area) = match error {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        None => (area, None),
    };

    let block = field_block(field, is_active);
    let content = match field.field_type {
        FieldType::Text => text_input(field, value.as_text(), is_active),
        FieldType::Checkbox => option_list(field, value, cursor, is_active, "(•)", "( )"),
        FieldType::MultiSelect => option_list(field, value, cursor, is_active, "[x]", "[ ]"),
        FieldType::Select => select_input(value.as_text(), is_active),
        FieldType::Unknown(_) => return,
    };
    frame.render_widget(
        content.wrap(Wrap { trim: false }).block(block),
        widget_area,
    );

    if let (Some(message), Some(error_area)) = (error, error_area) {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, error_area);
    }
}

fn field_block(field: &FieldDescriptor, is_active: bool) -> Block<'static> {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::styled(
        format!(" {} ", field.label),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if field.field_type == FieldType::MultiSelect {
        title.push(Span::styled(
            format!("{MULTI_SELECT_HINT} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn text_input<'a>(field: &FieldDescriptor, text: &'a str, is_active: bool) -> Paragraph<'a> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = if is_active { "▌" } else { "" };

    if text.is_empty() && !is_active {
        return Paragraph::new(Line::from(Span::styled(
            format!("Enter your {}", field.label.to_lowercase()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Paragraph::new(Line::from(vec![
        Span::styled(text, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
}

fn option_list(
    field: &FieldDescriptor,
    value: &FieldValue,
    cursor: usize,
    is_active: bool,
    checked: &str,
    unchecked: &str,
) -> Paragraph<'static> {
    let capitalize = field.field_type == FieldType::Checkbox;
    let lines: Vec<Line> = field
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let highlighted = is_active && i == cursor;
            let marker = if value.contains(option) {
                checked
            } else {
                unchecked
            };
            let label = if capitalize {
                capitalize_first(option)
            } else {
                option.clone()
            };
            let style = if highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(if highlighted { "› " } else { "  " }, style),
                Span::styled(format!("{marker} {label}"), style),
            ])
        })
        .collect();
    Paragraph::new(lines)
}

fn select_input(selected: &str, is_active: bool) -> Paragraph<'_> {
    let (text, style) = if selected.is_empty() {
        (SELECT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else if is_active {
        (selected, Style::default().fg(Color::Cyan))
    } else {
        (selected, Style::default())
    };
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("◂ ", arrow_style),
        Span::styled(text, style),
        Span::styled(" ▸", arrow_style),
    ]))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Translate a key press on a focused field into a change.
///
/// `cursor` is the field's option highlight; Up/Down move it without
/// emitting anything.
pub fn handle_field_key(
    field: &FieldDescriptor,
    value: &FieldValue,
    cursor: &mut usize,
    key: KeyEvent,
) -> Option<FieldChange> {
    match field.field_type {
        FieldType::Text => {
            let mut text = value.as_text().to_string();
            match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    text.push(c);
                }
                KeyCode::Backspace if !text.is_empty() => {
                    text.pop();
                }
                _ => return None,
            }
            Some(FieldChange::new(field, text))
        }
        FieldType::Checkbox | FieldType::MultiSelect => {
            let count = field.options.len();
            if count == 0 {
                return None;
            }
            *cursor = (*cursor).min(count - 1);
            match key.code {
                KeyCode::Up => {
                    *cursor = if *cursor == 0 { count - 1 } else { *cursor - 1 };
                    None
                }
                KeyCode::Down => {
                    *cursor = (*cursor + 1) % count;
                    None
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    Some(FieldChange::new(field, field.options[*cursor].clone()))
                }
                _ => None,
            }
        }
        FieldType::Select => {
            // Position 0 is the unset entry
            let count = field.options.len() + 1;
            let current = field
                .options
                .iter()
                .position(|o| o == value.as_text())
                .map_or(0, |i| i + 1);
            let next = match key.code {
                KeyCode::Right => (current + 1) % count,
                KeyCode::Left => (current + count - 1) % count,
                _ => return None,
            };
            let chosen = if next == 0 {
                String::new()
            } else {
                field.options[next - 1].clone()
            };
            Some(FieldChange::new(field, chosen))
        }
        FieldType::Unknown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(
        field: &FieldDescriptor,
        value: &FieldValue,
        is_active: bool,
        error: Option<&str>,
    ) -> String {
        let height = field_height(field, error.is_some()).max(1);
        let mut terminal = Terminal::new(TestBackend::new(70, height)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), field, value, 0, is_active, error))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    mod drawing {
        use super::*;

        #[test]
        fn test_text_placeholder_when_empty() {
            let field = FieldDescriptor::text("firstName", "First Name");
            let out = render(&field, &FieldValue::Text(String::new()), false, None);
            assert!(out.contains("First Name"));
            assert!(out.contains("Enter your first name"));
        }

        #[test]
        fn test_text_shows_value_and_cursor_when_active() {
            let field = FieldDescriptor::text("firstName", "First Name");
            let out = render(&field, &FieldValue::Text("Ana".into()), true, None);
            assert!(out.contains("Ana▌"));
        }

        #[test]
        fn test_checkbox_marks_selected_option() {
            let field = FieldDescriptor::checkbox("eng", "Engineer?", &["yes", "no"]);
            let out = render(&field, &FieldValue::Text("no".into()), false, None);
            assert!(out.contains("( ) Yes"));
            assert!(out.contains("(•) No"));
        }

        #[test]
        fn test_multi_select_marks_each_selection() {
            let field =
                FieldDescriptor::multi_select("langs", "Languages", &["Java", "CSS", "SQL"]);
            let value = FieldValue::Selections(vec!["SQL".into(), "Java".into()]);
            let out = render(&field, &value, false, None);
            assert!(out.contains("[x] Java"));
            assert!(out.contains("[ ] CSS"));
            assert!(out.contains("[x] SQL"));
            assert!(out.contains(MULTI_SELECT_HINT));
        }

        #[test]
        fn test_select_shows_placeholder_when_unset() {
            let field = FieldDescriptor::select("os", "OS", &["Mac", "Linux"]);
            let out = render(&field, &FieldValue::Text(String::new()), false, None);
            assert!(out.contains(SELECT_PLACEHOLDER));
        }

        #[test]
        fn test_error_line_is_drawn() {
            let field = FieldDescriptor::text("firstName", "First Name");
            let out = render(
                &field,
                &FieldValue::Text("A".into()),
                false,
                Some("First Name must be at least 2 characters"),
            );
            assert!(out.contains("First Name must be at least 2 characters"));
        }

        #[test]
        fn test_unknown_type_draws_nothing() {
            let field = FieldDescriptor::new(FieldType::Unknown("date".into()), "d", "Date", &[]);
            assert_eq!(field_height(&field, true), 0);
            let out = render(&field, &FieldValue::Text(String::new()), true, None);
            assert!(out.trim().is_empty());
        }

        #[test]
        fn test_field_heights() {
            let text = FieldDescriptor::text("a", "A");
            let multi = FieldDescriptor::multi_select("b", "B", &["1", "2", "3"]);
            assert_eq!(field_height(&text, false), 3);
            assert_eq!(field_height(&text, true), 4);
            assert_eq!(field_height(&multi, false), 5);
        }

        #[test]
        fn test_field_height_saturates_for_huge_option_lists() {
            let options = vec!["x"; 70_000];
            let multi = FieldDescriptor::multi_select("b", "B", &options);
            assert_eq!(field_height(&multi, false), u16::MAX);
            assert_eq!(field_height(&multi, true), u16::MAX);
        }

        #[test]
        fn test_capitalize_first() {
            assert_eq!(capitalize_first("yes"), "Yes");
            assert_eq!(capitalize_first(""), "");
            assert_eq!(capitalize_first("élan"), "Élan");
        }
    }

    mod input {
        use super::*;

        #[test]
        fn test_text_emits_full_text() {
            let field = FieldDescriptor::text("firstName", "First Name");
            let mut cursor = 0;
            let change = handle_field_key(
                &field,
                &FieldValue::Text("An".into()),
                &mut cursor,
                key(KeyCode::Char('a')),
            );
            assert_eq!(
                change,
                Some(FieldChange {
                    name: "firstName".into(),
                    value: "Ana".into(),
                    field_type: FieldType::Text,
                })
            );
        }

        #[test]
        fn test_text_backspace() {
            let field = FieldDescriptor::text("firstName", "First Name");
            let mut cursor = 0;
            let value = FieldValue::Text("Ana".into());
            let change = handle_field_key(&field, &value, &mut cursor, key(KeyCode::Backspace));
            assert_eq!(change.map(|c| c.value), Some("An".to_string()));

            let empty = FieldValue::Text(String::new());
            let change = handle_field_key(&field, &empty, &mut cursor, key(KeyCode::Backspace));
            assert!(change.is_none());
        }

        #[test]
        fn test_text_ignores_control_chords() {
            let field = FieldDescriptor::text("firstName", "First Name");
            let mut cursor = 0;
            let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
            let value = FieldValue::default();
            assert!(handle_field_key(&field, &value, &mut cursor, ctrl_s).is_none());
        }

        #[test]
        fn test_checkbox_moves_cursor_then_selects() {
            let field = FieldDescriptor::checkbox("eng", "Engineer?", &["yes", "no"]);
            let value = FieldValue::Text(String::new());
            let mut cursor = 0;

            assert!(handle_field_key(&field, &value, &mut cursor, key(KeyCode::Down)).is_none());
            assert_eq!(cursor, 1);

            let change = handle_field_key(&field, &value, &mut cursor, key(KeyCode::Char(' ')));
            assert_eq!(
                change,
                Some(FieldChange {
                    name: "eng".into(),
                    value: "no".into(),
                    field_type: FieldType::Checkbox,
                })
            );
        }

        #[test]
        fn test_option_cursor_wraps() {
            let field = FieldDescriptor::multi_select("langs", "Languages", &["Java", "CSS"]);
            let value = FieldValue::Selections(vec![]);
            let mut cursor = 0;
            handle_field_key(&field, &value, &mut cursor, key(KeyCode::Up));
            assert_eq!(cursor, 1);
            handle_field_key(&field, &value, &mut cursor, key(KeyCode::Down));
            assert_eq!(cursor, 0);
        }

        #[test]
        fn test_multi_select_emits_option_regardless_of_state() {
            let field = FieldDescriptor::multi_select("langs", "Languages", &["Java", "CSS"]);
            let selected = FieldValue::Selections(vec!["Java".into()]);
            let mut cursor = 0;
            let change = handle_field_key(&field, &selected, &mut cursor, key(KeyCode::Enter));
            assert_eq!(
                change.map(|c| (c.value, c.field_type)),
                Some(("Java".into(), FieldType::MultiSelect))
            );
        }

        #[test]
        fn test_select_cycles_through_unset() {
            let field = FieldDescriptor::select("os", "OS", &["Mac", "Linux"]);
            let mut cursor = 0;

            let right = |value: &str, cursor: &mut usize| {
                let value = FieldValue::Text(value.into());
                handle_field_key(&field, &value, cursor, key(KeyCode::Right)).map(|c| c.value)
            };
            assert_eq!(right("", &mut cursor), Some("Mac".to_string()));
            assert_eq!(right("Mac", &mut cursor), Some("Linux".to_string()));
            assert_eq!(right("Linux", &mut cursor), Some(String::new()));

            let left = handle_field_key(
                &field,
                &FieldValue::Text(String::new()),
                &mut cursor,
                key(KeyCode::Left),
            );
            assert_eq!(left.map(|c| c.value), Some("Linux".to_string()));
        }

        #[test]
        fn test_unknown_type_never_emits() {
            let field = FieldDescriptor::new(FieldType::Unknown("date".into()), "d", "Date", &[]);
            let mut cursor = 0;
            let value = FieldValue::default();
            for code in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Right] {
                assert!(handle_field_key(&field, &value, &mut cursor, key(code)).is_none());
            }
        }
    }
}
