//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    ActionButton, AppState, FieldType, FormController, FormPhase, FormSchema, FormValues,
    SingleShotTimer, SubmitHandler, SubmitOutcome,
};
use crate::ui::forms::handle_field_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

/// Submit handler that keeps every delivered snapshot for printing on exit
#[derive(Debug, Clone, Default)]
pub struct SubmissionLog {
    entries: Rc<RefCell<Vec<FormValues>>>,
}

impl SubmissionLog {
    pub fn entries(&self) -> Vec<FormValues> {
        self.entries.borrow().clone()
    }
}

impl SubmitHandler for SubmissionLog {
    fn on_submit(&mut self, values: &FormValues) {
        tracing::info!(fields = values.len(), "form submitted");
        self.entries.borrow_mut().push(values.clone());
    }
}

/// Main application struct
pub struct App {
    /// Focus and cursor state
    pub state: AppState,
    /// Form values, errors and lifecycle
    pub form: FormController,
    allow_reset_after_submit: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(schema: FormSchema, on_submit: Box<dyn SubmitHandler>, config: &TuiConfig) -> Self {
        let state = AppState::new(&schema);
        let timer = SingleShotTimer::new(config.submit_delay());
        Self {
            state,
            form: FormController::new(schema, on_submit, timer),
            allow_reset_after_submit: config.allow_reset_after_submit(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn allow_reset_after_submit(&self) -> bool {
        self.allow_reset_after_submit
    }

    /// Advance timers; called once per event loop iteration
    pub fn tick(&mut self, now: Instant) {
        if !self.form.is_submitting() {
            return;
        }
        self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);
        if self.form.tick(now) {
            self.state.status_message = None;
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match self.form.phase() {
            FormPhase::Editing => self.handle_form_key(key, now),
            FormPhase::Submitting => {}
            FormPhase::Submitted => self.handle_submitted_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let on_action_row = self.state.is_action_row_active();

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(now);
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::RESET_MODIFIER) => {
                self.reset();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Left | KeyCode::Right if on_action_row => {
                self.state.selected_button = self.state.selected_button.toggle();
            }
            KeyCode::Enter if on_action_row => match self.state.selected_button {
                ActionButton::Submit => self.submit(now),
                ActionButton::Reset => self.reset(),
            },
            // Enter in a text input submits, like a browser form
            KeyCode::Enter if self.focused_field_type() == Some(FieldType::Text) => {
                self.submit(now);
            }
            _ => self.forward_to_field(key),
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('r') if self.allow_reset_after_submit => self.reset(),
            _ => {}
        }
    }

    fn focused_field_type(&self) -> Option<FieldType> {
        self.state
            .focused_field()
            .and_then(|i| self.form.schema().fields.get(i))
            .map(|f| f.field_type.clone())
    }

    /// Let the focused field's renderer interpret the key
    fn forward_to_field(&mut self, key: KeyEvent) {
        let Some(index) = self.state.focused_field() else {
            return;
        };
        let Some(field) = self.form.schema().fields.get(index) else {
            return;
        };
        let Some(value) = self.form.value(&field.name) else {
            return;
        };
        let cursor = self.state.option_cursor_mut(&field.name);

        if let Some(change) = handle_field_key(field, value, cursor, key) {
            self.form.handle_change(change);
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.form.submit(now) {
            SubmitOutcome::Invalid => {
                let count = self.form.errors().len();
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{count} {noun} attention"));
            }
            SubmitOutcome::Scheduled | SubmitOutcome::Delivered => {
                self.state.status_message = None;
            }
            SubmitOutcome::Ignored => {}
        }
    }

    fn reset(&mut self) {
        if self.form.reset() {
            self.state.clear_form();
        }
    }
}
