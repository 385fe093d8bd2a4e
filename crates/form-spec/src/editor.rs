use std::collections::BTreeSet;

use thiserror::Error;

use crate::schema::{FieldKind, FormSchema};

/// Errors produced when an edited schema document cannot be applied.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate field id '{0}'")]
    DuplicateFieldId(String),
    #[error("radio field '{0}' declares no options")]
    MissingOptions(String),
}

/// Parses editor text into a form schema. All-or-nothing: any failure
/// leaves the caller's previously valid schema in force.
pub fn parse_schema(text: &str) -> Result<FormSchema, SchemaError> {
    let schema: FormSchema = serde_json::from_str(text)?;
    check_schema(&schema)?;
    Ok(schema)
}

/// Structural invariants beyond JSON shape: ids are unique across the
/// schema and every radio field carries at least one option.
pub fn check_schema(schema: &FormSchema) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for field in &schema.fields {
        if !seen.insert(field.id.as_str()) {
            return Err(SchemaError::DuplicateFieldId(field.id.clone()));
        }
        if matches!(field.kind, FieldKind::Radio) && field.choices().is_empty() {
            return Err(SchemaError::MissingOptions(field.id.clone()));
        }
    }
    Ok(())
}
