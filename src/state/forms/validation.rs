//! Submit-time validation rules

use super::field::{FieldDescriptor, FieldType};
use super::schema::FormSchema;
use super::values::{FormErrors, FormValues};

/// Minimum trimmed length of a text answer, in characters
pub const MIN_TEXT_LEN: usize = 2;

/// Derive the error map for `values`.
///
/// Rules run per field in order; when several fire for one field the last
/// message wins.
pub fn validate_values(schema: &FormSchema, values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in &schema.fields {
        let value = values.get(&field.name).cloned().unwrap_or_default();
        apply_rules(field, value.as_text(), value.is_empty(), &mut errors);
    }
    errors
}

fn apply_rules(field: &FieldDescriptor, text: &str, is_empty: bool, errors: &mut FormErrors) {
    let label = &field.label;
    match field.field_type {
        FieldType::Text => {
            if text.trim().is_empty() {
                errors.insert(&field.name, format!("Please enter your  {label} "));
            }
            if !text.is_empty() && text.trim().chars().count() < MIN_TEXT_LEN {
                errors.insert(
                    &field.name,
                    format!("{label} must be at least {MIN_TEXT_LEN} characters"),
                );
            }
        }
        FieldType::Checkbox | FieldType::Select => {
            if is_empty {
                errors.insert(
                    &field.name,
                    format!("Please select a {}", label.to_lowercase()),
                );
            }
        }
        FieldType::MultiSelect => {
            if is_empty {
                errors.insert(
                    &field.name,
                    format!("Please select at least one {}", label.to_lowercase()),
                );
            }
        }
        FieldType::Unknown(_) => {}
    }
}
