//! Form schema: the ordered list of field descriptors

use super::field::{FieldDescriptor, FieldType};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Problems that make a schema unusable
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid schema JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate field name '{0}'")]
    DuplicateName(String),
    #[error("{field_type} field '{name}' needs at least one option")]
    MissingOptions { name: String, field_type: FieldType },
}

/// Ordered field descriptors; order is display order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    /// Build a schema from descriptors, checking its structure
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let schema = Self { fields };
        schema.check()?;
        Ok(schema)
    }

    /// Parse a schema from JSON text
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: FormSchema = serde_json::from_str(json)?;
        schema.check()?;
        Ok(schema)
    }

    /// Load a schema from a JSON file
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
            if field.field_type.has_options() && field.options.is_empty() {
                return Err(SchemaError::MissingOptions {
                    name: field.name.clone(),
                    field_type: field.field_type.clone(),
                });
            }
        }
        Ok(())
    }

    /// The built-in developer application form
    pub fn application_form() -> Self {
        Self {
            fields: vec![
                FieldDescriptor::text("firstName", "First Name"),
                FieldDescriptor::text("lastName", "Last Name"),
                FieldDescriptor::checkbox(
                    "isSoftwareEngineer",
                    "Are you a Software Engineer?",
                    &["yes", "no"],
                ),
                FieldDescriptor::multi_select(
                    "proficiency",
                    "Which languages are you proficient in?",
                    &["Javascript", "Java", "Python", "CSS", "SQL", "None of them"],
                ),
                FieldDescriptor::multi_select(
                    "officeDays",
                    "When can you come to our office in Palo Alto?",
                    &[
                        "Monday",
                        "Tuesday",
                        "Wednesday",
                        "Thursday",
                        "Friday",
                        "Never",
                    ],
                ),
                FieldDescriptor::select(
                    "operatingSystem",
                    "What's your favorite operating system to code on?",
                    &["Mac", "Windows", "Linux"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_json_keeps_order() {
        let json = r#"{
            "fields": [
                {"type": "text", "name": "firstName", "label": "First Name"},
                {"type": "select", "name": "os", "label": "OS", "options": ["Mac", "Linux"]}
            ]
        }"#;
        let schema = FormSchema::from_json(json).unwrap();
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["firstName", "os"]);
        assert_eq!(schema.fields[1].options, vec!["Mac", "Linux"]);
    }

    #[test]
    fn test_unknown_type_loads() {
        let json = r#"{"fields": [{"type": "color", "name": "fav", "label": "Favorite"}]}"#;
        let schema = FormSchema::from_json(json).unwrap();
        assert_eq!(
            schema.fields[0].field_type,
            FieldType::Unknown("color".to_string())
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = FormSchema::new(vec![
            FieldDescriptor::text("name", "Name"),
            FieldDescriptor::text("name", "Other"),
        ]);
        assert!(matches!(result, Err(SchemaError::DuplicateName(n)) if n == "name"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = FormSchema::new(vec![
            FieldDescriptor::text("ok", "Ok"),
            FieldDescriptor::text("", "Nameless"),
        ]);
        assert!(matches!(result, Err(SchemaError::EmptyName { index: 1 })));
    }

    #[test]
    fn test_choice_field_without_options_rejected() {
        let json = r#"{"fields": [{"type": "checkbox", "name": "agree", "label": "Agree"}]}"#;
        let err = FormSchema::from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "checkbox field 'agree' needs at least one option"
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = FormSchema::from_json("{\"fields\": [").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = FormSchema::load(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }

    #[test]
    fn test_application_form_is_valid() {
        let schema = FormSchema::application_form();
        assert_eq!(schema.fields.len(), 6);
        assert!(schema.check().is_ok());
        assert_eq!(schema.fields[3].name, "proficiency");
        assert_eq!(schema.fields[3].options.len(), 6);
    }

    #[test]
    fn test_demo_file_matches_builtin_form() {
        let json = include_str!("../../../demos/application_form.json");
        assert_eq!(
            FormSchema::from_json(json).unwrap(),
            FormSchema::application_form()
        );
    }
}
