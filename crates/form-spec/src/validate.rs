use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;
use crate::schema::FormSchema;

/// Current control values keyed by field id. Missing entries validate as
/// the empty string.
pub type FieldValues = std::collections::BTreeMap<String, String>;

/// One field's inline error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_id: String,
    pub message: String,
}

/// Outcome of validating a full value set against the compiled rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_fields: Vec<String>,
}

/// Validates every field in schema order, collecting all failures at
/// once. Value keys with no matching field are reported separately; they
/// cannot occur inside a session but can in externally supplied files.
pub fn validate(schema: &FormSchema, rules: &RuleSet, values: &FieldValues) -> ValidationResult {
    let mut errors = Vec::new();
    for field in &schema.fields {
        let value = values.get(&field.id).map(String::as_str).unwrap_or("");
        if let Some(rule) = rules.get(&field.id)
            && let Err(message) = rule.check(value)
        {
            errors.push(FieldError {
                field_id: field.id.clone(),
                message,
            });
        }
    }

    let known: BTreeSet<_> = schema.field_ids().collect();
    let unknown_fields: Vec<String> = values
        .keys()
        .filter(|key| !known.contains(key.as_str()))
        .cloned()
        .collect();

    ValidationResult {
        valid: errors.is_empty() && unknown_fields.is_empty(),
        errors,
        unknown_fields,
    }
}
