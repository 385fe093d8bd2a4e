use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input control kinds supported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Radio,
    Textarea,
}

impl FieldKind {
    /// Wire label matching the document's `type` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Radio => "radio",
            FieldKind::Textarea => "textarea",
        }
    }
}

/// One selectable choice of a radio field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Declared pattern validation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PatternRule {
    pub pattern: String,
    pub message: String,
}

/// One form field's metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChoiceOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<PatternRule>,
}

impl FieldDefinition {
    /// Declared choices, empty for non-radio fields.
    pub fn choices(&self) -> &[ChoiceOption] {
        self.options.as_deref().unwrap_or_default()
    }
}
