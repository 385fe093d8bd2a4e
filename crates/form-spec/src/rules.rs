use regex::Regex;

use crate::schema::FormSchema;

/// Per-field rule map, regenerated in full whenever the schema changes.
pub type RuleSet = std::collections::BTreeMap<String, FieldRule>;

/// Closed set of compiled per-field rules.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Rejects empty and whitespace-only values.
    Required { message: String },
    /// Accepts any value, including the empty string.
    Optional,
    /// Rejects non-empty values that do not match the pattern.
    ///
    /// Declared pattern metadata survives parsing but [`compile`] never
    /// maps it here, so the live form accepts values a declared pattern
    /// would reject. Callers wanting pattern checks must build this
    /// variant themselves.
    Pattern { pattern: String, message: String },
}

impl FieldRule {
    /// Checks a single value, returning the display message on failure.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self {
            FieldRule::Required { message } => {
                if value.trim().is_empty() {
                    Err(message.clone())
                } else {
                    Ok(())
                }
            }
            FieldRule::Optional => Ok(()),
            FieldRule::Pattern { pattern, message } => {
                // Invalid patterns are skipped rather than failing the value.
                if let Ok(regex) = Regex::new(pattern)
                    && !value.is_empty()
                    && !regex.is_match(value)
                {
                    return Err(message.clone());
                }
                Ok(())
            }
        }
    }
}

/// Derives the rule set for a schema. Pure and synchronous: required
/// fields get a non-empty check with the message "{label} is required",
/// everything else is optional.
pub fn compile(schema: &FormSchema) -> RuleSet {
    schema
        .fields
        .iter()
        .map(|field| {
            let rule = if field.required {
                FieldRule::Required {
                    message: format!("{} is required", field.label),
                }
            } else {
                FieldRule::Optional
            };
            (field.id.clone(), rule)
        })
        .collect()
}
