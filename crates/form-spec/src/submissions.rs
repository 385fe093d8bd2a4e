use serde::{Deserialize, Serialize};

use crate::validate::FieldValues;

/// One accepted set of field values, keyed by field id. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord(FieldValues);

impl SubmissionRecord {
    /// Builds a record covering every id in `ids`, falling back to the
    /// empty string for fields the user never touched.
    pub fn capture<'a>(ids: impl IntoIterator<Item = &'a str>, values: &FieldValues) -> Self {
        let map = ids
            .into_iter()
            .map(|id| (id.to_string(), values.get(id).cloned().unwrap_or_default()))
            .collect();
        Self(map)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Append-only, in-memory sequence of accepted submissions. Insertion
/// order is submission order; nothing is ever removed.
#[derive(Debug, Default)]
pub struct SubmissionLog {
    records: Vec<SubmissionRecord>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SubmissionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    /// Indented JSON export of the whole log, oldest record first.
    pub fn export_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}
