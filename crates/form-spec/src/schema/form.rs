use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::field::FieldDefinition;

/// Top-level form description document. Field order is display order.
///
/// Replaced wholesale on every successful edit; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub form_title: String,
    #[serde(default)]
    pub form_description: String,
    pub fields: Vec<FieldDefinition>,
}

impl FormSchema {
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.id.as_str())
    }
}
