//! Per-field values and validation messages

use super::field::FieldValue;
use super::schema::FormSchema;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Current value of every field, in schema order.
///
/// Holds exactly one entry per schema field; entries are never added or
/// removed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    entries: Vec<(String, FieldValue)>,
}

impl FormValues {
    /// Empty values for every field of `schema`
    pub fn initial(schema: &FormSchema) -> Self {
        Self {
            entries: schema
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.empty_value()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Validation messages keyed by field name.
///
/// A missing key or an empty message both mean the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    messages: HashMap<String, String>,
}

impl FormErrors {
    /// Record a message, replacing any earlier one for the same field
    pub fn insert(&mut self, name: &str, message: String) {
        self.messages.insert(name.to_string(), message);
    }

    /// Drop the message for a field; returns whether one was present
    pub fn clear_field(&mut self, name: &str) -> bool {
        self.messages.remove(name).is_some()
    }

    /// The message for a field, if it is currently invalid
    pub fn get(&self, name: &str) -> Option<&str> {
        self.messages
            .get(name)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        self.messages.values().any(|m| !m.is_empty())
    }

    pub fn len(&self) -> usize {
        self.messages.values().filter(|m| !m.is_empty()).count()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
