//! Stateful controller for a schema-driven form session.
//!
//! A [`FormSession`] owns the current schema, the compiled rule set, the
//! per-field control states, and the submission log, and is mutated only
//! through its transition methods. Every transition runs to completion on
//! the caller's thread; a schema edit fully installs (store, recompile,
//! state reset) before any later call observes it.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};

use form_spec::{
    ErrorMap, FieldError, FieldValues, FormSchema, RenderPayload, RuleSet, SubmissionLog,
    SubmissionRecord, build_render_payload, compile, defaults, parse_schema, validate,
};

/// Lifecycle of a single form control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    /// No input yet, or reset after a schema change or accepted submit.
    #[default]
    Empty,
    /// Value entered but not yet validated.
    Touched,
    /// Last validation passed.
    Valid,
    /// Last validation failed; carries the inline message.
    Invalid(String),
}

/// Result of applying edited schema text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Rejected,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(Vec<FieldError>),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("failed to export submissions: {0}")]
    Export(#[from] serde_json::Error),
}

/// Single-writer application state for one form session.
#[derive(Debug)]
pub struct FormSession {
    schema: FormSchema,
    rules: RuleSet,
    values: FieldValues,
    states: BTreeMap<String, FieldState>,
    log: SubmissionLog,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Starts a session on the built-in survey schema.
    pub fn new() -> Self {
        Self::with_schema(defaults::survey())
    }

    /// Starts a session on a caller-supplied schema. The schema is assumed
    /// to already satisfy the structural invariants; use
    /// [`form_spec::parse_schema`] for untrusted documents.
    pub fn with_schema(schema: FormSchema) -> Self {
        let rules = compile(&schema);
        let states = schema
            .fields
            .iter()
            .map(|field| (field.id.clone(), FieldState::Empty))
            .collect();
        Self {
            schema,
            rules,
            values: FieldValues::new(),
            states,
            log: SubmissionLog::new(),
        }
    }

    /// Applies an edited schema document. All-or-nothing: on success the
    /// new schema replaces the old wholesale, rules are recompiled, and
    /// all in-progress values are discarded; on failure the previous
    /// schema stays in force and nothing user-visible changes. Rejections
    /// are logged at debug level only.
    pub fn apply_schema_text(&mut self, text: &str) -> EditOutcome {
        match parse_schema(text) {
            Ok(schema) => {
                self.install(schema);
                EditOutcome::Applied
            }
            Err(error) => {
                debug!(%error, "rejected schema edit");
                EditOutcome::Rejected
            }
        }
    }

    fn install(&mut self, schema: FormSchema) {
        self.rules = compile(&schema);
        self.schema = schema;
        self.reset_fields();
    }

    fn reset_fields(&mut self) {
        self.values.clear();
        self.states = self
            .schema
            .fields
            .iter()
            .map(|field| (field.id.clone(), FieldState::Empty))
            .collect();
    }

    /// Records a control's value and marks it touched. Validation happens
    /// on blur or submit, not here.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), SessionError> {
        if self.schema.field(id).is_none() {
            return Err(SessionError::UnknownField(id.to_string()));
        }
        self.values.insert(id.to_string(), value.into());
        self.states.insert(id.to_string(), FieldState::Touched);
        Ok(())
    }

    /// Re-evaluates one control against its compiled rule, as on loss of
    /// focus, and returns the resulting state.
    pub fn blur(&mut self, id: &str) -> Result<FieldState, SessionError> {
        let rule = self
            .rules
            .get(id)
            .ok_or_else(|| SessionError::UnknownField(id.to_string()))?;
        let value = self.values.get(id).map(String::as_str).unwrap_or("");
        let next = match rule.check(value) {
            Ok(()) => FieldState::Valid,
            Err(message) => FieldState::Invalid(message),
        };
        self.states.insert(id.to_string(), next.clone());
        Ok(next)
    }

    /// Validates every field. On any failure the submission is aborted,
    /// each failing field turns `Invalid` (all messages at once), and the
    /// rest turn `Valid`. On success a record covering every field id is
    /// appended to the log and all controls reset to `Empty`.
    pub fn submit(&mut self) -> SubmitOutcome {
        let result = validate(&self.schema, &self.rules, &self.values);
        if !result.valid {
            for field in &self.schema.fields {
                let state = match result.errors.iter().find(|error| error.field_id == field.id)
                {
                    Some(error) => FieldState::Invalid(error.message.clone()),
                    None => FieldState::Valid,
                };
                self.states.insert(field.id.clone(), state);
            }
            return SubmitOutcome::Rejected(result.errors);
        }

        let record = SubmissionRecord::capture(self.schema.field_ids(), &self.values);
        self.log.append(record);
        info!(submissions = self.log.len(), "submission accepted");
        self.reset_fields();
        SubmitOutcome::Accepted
    }

    /// Indented JSON export of every accepted submission.
    pub fn export_submissions(&self) -> Result<String, SessionError> {
        Ok(self.log.export_pretty()?)
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn field_state(&self, id: &str) -> Option<&FieldState> {
        self.states.get(id)
    }

    pub fn submission_count(&self) -> usize {
        self.log.len()
    }

    pub fn submissions(&self) -> &[SubmissionRecord] {
        self.log.records()
    }

    /// Current render payload: the form region with values and inline
    /// errors, plus the serialized schema for the editor region.
    pub fn render_payload(&self) -> RenderPayload {
        let errors: ErrorMap = self
            .states
            .iter()
            .filter_map(|(id, state)| match state {
                FieldState::Invalid(message) => Some((id.clone(), message.clone())),
                _ => None,
            })
            .collect();
        build_render_payload(&self.schema, &self.values, &errors, self.log.len())
    }
}
