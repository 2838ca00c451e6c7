//! Form controller: values, errors and the submission lifecycle

use super::field::{FieldChange, FieldType, FieldValue};
use super::schema::FormSchema;
use super::validation::validate_values;
use super::values::{FormErrors, FormValues};
use crate::state::SingleShotTimer;
use std::time::Instant;

/// Receives the final values once a submission completes
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn on_submit(&mut self, values: &FormValues);
}

/// Lifecycle phase of a form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Validation passed; waiting for the submit timer
    Submitting,
    /// Callback delivered; the acknowledgment view is shown
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are populated and the form stays editable
    Invalid,
    /// Validation passed and the callback is scheduled
    Scheduled,
    /// The callback already ran (zero delay)
    Delivered,
    /// Not in the editing phase; nothing happened
    Ignored,
}

/// Owns the mutable state of one form instance
pub struct FormController {
    schema: FormSchema,
    values: FormValues,
    errors: FormErrors,
    phase: FormPhase,
    timer: SingleShotTimer,
    pending: Option<FormValues>,
    on_submit: Box<dyn SubmitHandler>,
}

impl FormController {
    pub fn new(
        schema: FormSchema,
        on_submit: Box<dyn SubmitHandler>,
        timer: SingleShotTimer,
    ) -> Self {
        let values = FormValues::initial(&schema);
        Self {
            schema,
            values,
            errors: FormErrors::default(),
            phase: FormPhase::Editing,
            timer,
            pending: None,
            on_submit,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Apply a change emitted by a field.
    ///
    /// Returns false when the change was not applied (wrong phase or a name
    /// outside the schema).
    pub fn handle_change(&mut self, change: FieldChange) -> bool {
        if self.phase != FormPhase::Editing {
            tracing::debug!(field = %change.name, phase = ?self.phase, "change ignored");
            return false;
        }

        let Some(current) = self.values.get_mut(&change.name) else {
            tracing::debug!(field = %change.name, "change for unknown field ignored");
            return false;
        };

        match change.field_type {
            FieldType::MultiSelect => current.toggle(&change.value),
            _ => *current = FieldValue::Text(change.value),
        }

        if self.errors.clear_field(&change.name) {
            tracing::debug!(field = %change.name, "cleared validation error");
        }
        true
    }

    /// Run the validation pass, replacing the error map.
    /// Returns true when every field passes.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_values(&self.schema, &self.values);
        !self.errors.has_errors()
    }

    /// Attempt a submission at `now`
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.phase != FormPhase::Editing {
            tracing::debug!(phase = ?self.phase, "submit ignored");
            return SubmitOutcome::Ignored;
        }

        if !self.validate() {
            tracing::debug!(errors = self.errors.len(), "submit blocked by validation");
            return SubmitOutcome::Invalid;
        }

        self.pending = Some(self.values.clone());
        self.phase = FormPhase::Submitting;
        self.timer.arm(now);
        tracing::debug!(delay_ms = self.timer.delay().as_millis() as u64, "submission scheduled");

        if self.tick(now) {
            SubmitOutcome::Delivered
        } else {
            SubmitOutcome::Scheduled
        }
    }

    /// Advance the submit timer. Returns true when the callback ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != FormPhase::Submitting || !self.timer.fire(now) {
            return false;
        }

        let values = self.pending.take().unwrap_or_else(|| self.values.clone());
        self.on_submit.on_submit(&values);
        self.phase = FormPhase::Submitted;
        tracing::debug!(fields = values.len(), "submission delivered");
        true
    }

    /// Return to a blank, editable form.
    /// Ignored while a submission is in flight.
    pub fn reset(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            tracing::debug!("reset ignored while submitting");
            return false;
        }
        self.values = FormValues::initial(&self.schema);
        self.errors.clear();
        self.phase = FormPhase::Editing;
        tracing::debug!("form reset");
        true
    }
}
