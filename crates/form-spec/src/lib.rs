#![allow(missing_docs)]

pub mod defaults;
pub mod editor;
pub mod render;
pub mod rules;
pub mod schema;
pub mod submissions;
pub mod validate;

pub use editor::{SchemaError, check_schema, parse_schema};
pub use render::{
    ErrorMap, RenderField, RenderPayload, build_render_payload, render_json_ui, render_text,
};
pub use rules::{FieldRule, RuleSet, compile};
pub use schema::{ChoiceOption, FieldDefinition, FieldKind, FormSchema, PatternRule};
pub use submissions::{SubmissionLog, SubmissionRecord};
pub use validate::{FieldError, FieldValues, ValidationResult, validate};

/// JSON schema describing the form document wire format.
pub fn document_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(schema::FormSchema))
        .unwrap_or(serde_json::Value::Null)
}
