//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of input a field descriptor asks for.
///
/// Unrecognized type strings are kept as `Unknown` so the schema still loads;
/// such fields are never drawn and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    /// Single-line free text
    Text,
    /// Single choice among options (a radio group, despite the name)
    Checkbox,
    /// Any number of options, toggled independently
    MultiSelect,
    /// Single choice from a dropdown with an explicit unset entry
    Select,
    Unknown(String),
}

impl FieldType {
    /// The schema spelling of this type
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Checkbox => "checkbox",
            FieldType::MultiSelect => "multiSelect",
            FieldType::Select => "select",
            FieldType::Unknown(raw) => raw,
        }
    }

    /// Whether this type carries an option list
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldType::Checkbox | FieldType::MultiSelect | FieldType::Select
        )
    }

    /// Whether the field renderer produces a widget for this type
    pub fn is_renderable(&self) -> bool {
        !matches!(self, FieldType::Unknown(_))
    }
}

impl From<String> for FieldType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "text" => FieldType::Text,
            "checkbox" => FieldType::Checkbox,
            "multiSelect" => FieldType::MultiSelect,
            "select" => FieldType::Select,
            _ => FieldType::Unknown(raw),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema entry describing one input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    /// Create a free-text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(FieldType::Text, name, label, &[])
    }

    /// Create a single-choice (radio) field
    pub fn checkbox(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(FieldType::Checkbox, name, label, options)
    }

    /// Create a multi-choice field
    pub fn multi_select(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(FieldType::MultiSelect, name, label, options)
    }

    /// Create a dropdown field
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(FieldType::Select, name, label, options)
    }

    pub fn new(field_type: FieldType, name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            field_type,
            name: name.to_string(),
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// The value a freshly initialized or reset form holds for this field
    pub fn empty_value(&self) -> FieldValue {
        match self.field_type {
            FieldType::MultiSelect => FieldValue::Selections(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Current value of one field.
///
/// Serializes untagged so a values map reads `{"name": "Ana", "langs": ["Java"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Selections(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for selection lists)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Selections(_) => "",
        }
    }

    /// Whether the value counts as unset
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Selections(v) => v.is_empty(),
        }
    }

    /// Whether `option` is currently chosen
    pub fn contains(&self, option: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == option,
            FieldValue::Selections(v) => v.iter().any(|o| o == option),
        }
    }

    /// Remove `option` if selected, append it otherwise.
    ///
    /// A text value is treated as an empty selection list.
    pub fn toggle(&mut self, option: &str) {
        if let FieldValue::Text(_) = self {
            *self = FieldValue::Selections(Vec::new());
        }
        if let FieldValue::Selections(selected) = self {
            if let Some(pos) = selected.iter().position(|o| o == option) {
                selected.remove(pos);
            } else {
                selected.push(option.to_string());
            }
        }
    }
}

/// A change emitted by the field renderer: `onChange(name, value, type)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub name: String,
    pub value: String,
    pub field_type: FieldType,
}

impl FieldChange {
    pub fn new(field: &FieldDescriptor, value: impl Into<String>) -> Self {
        Self {
            name: field.name.clone(),
            value: value.into(),
            field_type: field.field_type.clone(),
        }
    }
}
