//! Form domain layer
//!
//! This module maps a declarative schema to form state:
//! - `field`: descriptors, field types and values
//! - `schema`: schema loading and structural checks
//! - `values`: per-field values and validation messages
//! - `validation`: submit-time rules
//! - `form_state`: the controller driving the submission lifecycle

mod field;
mod form_state;
mod schema;
mod validation;
mod values;

pub use field::{FieldChange, FieldDescriptor, FieldType, FieldValue};
pub use form_state::{FormController, FormPhase, SubmitHandler, SubmitOutcome};
pub use schema::FormSchema;
pub use values::FormValues;

#[cfg(test)]
pub use form_state::MockSubmitHandler;
