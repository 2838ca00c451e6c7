//! Application state definitions

use super::forms::FormSchema;
use std::collections::HashMap;

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionButton {
    #[default]
    Submit,
    Reset,
}

impl ActionButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit Application",
            Self::Reset => "Reset",
        }
    }
}

/// UI state owned by the host app.
///
/// Form values live in the controller; this only tracks where the user is.
#[derive(Debug, Default)]
pub struct AppState {
    /// Schema indices of the fields that can take focus, in display order
    pub focus_targets: Vec<usize>,
    /// Position in `focus_targets`; one past the end is the action row
    pub active_form_field: usize,
    /// Highlighted option per choice field, keyed by field name
    pub option_cursors: HashMap<String, usize>,
    pub selected_button: ActionButton,
    pub status_message: Option<String>,
    /// Advances every loop iteration while a submission is pending
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            focus_targets: schema
                .fields
                .iter()
                .enumerate()
                .filter(|(_, f)| f.field_type.is_renderable())
                .map(|(i, _)| i)
                .collect(),
            ..Default::default()
        }
    }

    /// Number of focus stops including the action row
    pub fn form_field_count(&self) -> usize {
        self.focus_targets.len() + 1
    }

    /// Move to next focus stop
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous focus stop
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Schema index of the focused field, or None on the action row
    pub fn focused_field(&self) -> Option<usize> {
        self.focus_targets.get(self.active_form_field).copied()
    }

    pub fn is_action_row_active(&self) -> bool {
        self.active_form_field >= self.focus_targets.len()
    }

    pub fn option_cursor(&self, name: &str) -> usize {
        self.option_cursors.get(name).copied().unwrap_or(0)
    }

    pub fn option_cursor_mut(&mut self, name: &str) -> &mut usize {
        self.option_cursors.entry(name.to_string()).or_insert(0)
    }

    /// Back to the first field with fresh cursors
    pub fn clear_form(&mut self) {
        self.active_form_field = 0;
        self.option_cursors.clear();
        self.selected_button = ActionButton::default();
        self.status_message = None;
        self.spinner_frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldDescriptor, FieldType};

    fn state_with_unknown_field() -> AppState {
        let schema = FormSchema::new(vec![
            FieldDescriptor::text("first", "First"),
            FieldDescriptor::new(FieldType::Unknown("date".into()), "when", "When", &[]),
            FieldDescriptor::select("os", "OS", &["Mac"]),
        ])
        .unwrap();
        AppState::new(&schema)
    }

    #[test]
    fn test_unknown_fields_are_not_focus_targets() {
        let state = state_with_unknown_field();
        assert_eq!(state.focus_targets, vec![0, 2]);
        assert_eq!(state.form_field_count(), 3);
    }

    #[test]
    fn test_next_form_field_wraps_through_action_row() {
        let mut state = state_with_unknown_field();
        assert_eq!(state.focused_field(), Some(0));
        state.next_form_field();
        assert_eq!(state.focused_field(), Some(2));
        state.next_form_field();
        assert!(state.is_action_row_active());
        assert_eq!(state.focused_field(), None);
        state.next_form_field();
        assert_eq!(state.focused_field(), Some(0));
    }

    #[test]
    fn test_prev_form_field_wraps_to_action_row() {
        let mut state = state_with_unknown_field();
        state.prev_form_field();
        assert!(state.is_action_row_active());
    }

    #[test]
    fn test_option_cursor_defaults_to_zero() {
        let mut state = state_with_unknown_field();
        assert_eq!(state.option_cursor("os"), 0);
        *state.option_cursor_mut("os") = 2;
        assert_eq!(state.option_cursor("os"), 2);
    }

    #[test]
    fn test_clear_form() {
        let mut state = state_with_unknown_field();
        state.next_form_field();
        *state.option_cursor_mut("os") = 1;
        state.selected_button = ActionButton::Reset;
        state.status_message = Some("x".into());

        state.clear_form();

        assert_eq!(state.active_form_field, 0);
        assert!(state.option_cursors.is_empty());
        assert_eq!(state.selected_button, ActionButton::Submit);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_action_button_toggle() {
        assert_eq!(ActionButton::Submit.toggle(), ActionButton::Reset);
        assert_eq!(ActionButton::Reset.toggle(), ActionButton::Submit);
        assert_eq!(ActionButton::Submit.label(), "Submit Application");
    }
}
