use serde_json::{Map, Value, json};

use crate::schema::{ChoiceOption, FieldKind, FormSchema};
use crate::validate::FieldValues;

/// Inline error text keyed by field id.
pub type ErrorMap = std::collections::BTreeMap<String, String>;

/// Describes a single control for render outputs.
#[derive(Debug, Clone)]
pub struct RenderField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub choices: Vec<ChoiceOption>,
    pub value: Option<String>,
    pub error: Option<String>,
}

/// Collected payload used by both the text and JSON renderers.
///
/// `schema` carries the serialized document itself, the content of the
/// editor region next to the form region.
#[derive(Debug, Clone)]
pub struct RenderPayload {
    pub form_title: String,
    pub form_description: String,
    pub fields: Vec<RenderField>,
    pub submission_count: usize,
    pub schema: Value,
}

/// Build the renderer payload: one control per field in schema order with
/// its current value and inline error.
pub fn build_render_payload(
    schema: &FormSchema,
    values: &FieldValues,
    errors: &ErrorMap,
    submission_count: usize,
) -> RenderPayload {
    let fields = schema
        .fields
        .iter()
        .map(|field| RenderField {
            id: field.id.clone(),
            label: field.label.clone(),
            kind: field.kind,
            required: field.required,
            placeholder: field.placeholder.clone(),
            choices: field.choices().to_vec(),
            value: values.get(&field.id).cloned(),
            error: errors.get(&field.id).cloned(),
        })
        .collect::<Vec<_>>();

    RenderPayload {
        form_title: schema.form_title.clone(),
        form_description: schema.form_description.clone(),
        fields,
        submission_count,
        schema: serde_json::to_value(schema).unwrap_or(Value::Null),
    }
}

/// Render the payload as a structured JSON-friendly value.
pub fn render_json_ui(payload: &RenderPayload) -> Value {
    let fields = payload
        .fields
        .iter()
        .map(|field| {
            let mut map = Map::new();
            map.insert("id".into(), Value::String(field.id.clone()));
            map.insert("label".into(), Value::String(field.label.clone()));
            map.insert("type".into(), Value::String(field.kind.as_str().to_string()));
            map.insert("required".into(), Value::Bool(field.required));
            if let Some(placeholder) = &field.placeholder {
                map.insert("placeholder".into(), Value::String(placeholder.clone()));
            }
            if !field.choices.is_empty() {
                map.insert(
                    "options".into(),
                    Value::Array(
                        field
                            .choices
                            .iter()
                            .map(|choice| {
                                json!({ "value": choice.value, "label": choice.label })
                            })
                            .collect(),
                    ),
                );
            }
            if let Some(value) = &field.value {
                map.insert("value".into(), Value::String(value.clone()));
            }
            map.insert(
                "error".into(),
                field.error.clone().map(Value::String).unwrap_or(Value::Null),
            );
            Value::Object(map)
        })
        .collect::<Vec<_>>();

    json!({
        "form_title": payload.form_title,
        "form_description": payload.form_description,
        "fields": fields,
        "submission_count": payload.submission_count,
        "schema": payload.schema,
    })
}

/// Render the payload as human-friendly text.
pub fn render_text(payload: &RenderPayload) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Form: {}", payload.form_title));
    if !payload.form_description.is_empty() {
        lines.push(payload.form_description.clone());
    }

    for field in &payload.fields {
        let mut entry = format!(" - {} ({})", field.label, field.kind.as_str());
        if field.required {
            entry.push_str(" [required]");
        }
        if let Some(value) = &field.value
            && !value.is_empty()
        {
            entry.push_str(&format!(" = {}", value));
        }
        lines.push(entry);
        if let Some(placeholder) = &field.placeholder {
            lines.push(format!("   hint: {}", placeholder));
        }
        if !field.choices.is_empty() {
            let choices = field
                .choices
                .iter()
                .map(|choice| choice.value.as_str())
                .collect::<Vec<_>>();
            lines.push(format!("   choices: {}", choices.join(", ")));
        }
        if let Some(error) = &field.error {
            lines.push(format!("   ! {}", error));
        }
    }

    lines.push(format!("Submissions: {}", payload.submission_count));
    lines.join("\n")
}
