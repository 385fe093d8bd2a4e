use form_spec::{FieldDefinition, FieldError, FieldKind, RenderPayload};

/// Controls which bits of state the fill shell prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: field prompts only.
    Clean,
    /// Verbose output: field listings, states, submission counts.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Printer for the interactive fill loop.
pub struct FormPresenter {
    verbosity: Verbosity,
    header_printed: bool,
}

impl FormPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            header_printed: false,
        }
    }

    pub fn show_header(&mut self, payload: &RenderPayload) {
        if self.header_printed {
            return;
        }
        println!("Form: {}", payload.form_title);
        if !payload.form_description.is_empty() {
            println!("{}", payload.form_description);
        }
        if self.verbosity.is_verbose() {
            println!("Fields:");
            for field in &payload.fields {
                let mut entry = format!(" - {} ({})", field.label, field.kind.as_str());
                if field.required {
                    entry.push_str(" [required]");
                }
                println!("{}", entry);
            }
        }
        self.header_printed = true;
    }

    pub fn show_prompt(&self, prompt: &PromptContext) {
        let mut line = format!("{}/{} {}", prompt.index, prompt.total, prompt.label);
        if prompt.required {
            line.push_str(" *");
        }
        if let Some(hint) = &prompt.hint {
            line.push(' ');
            line.push_str(hint);
        }
        println!("{}", line);
    }

    pub fn show_input_error(&self, message: &str) {
        eprintln!("Invalid answer: {}", message);
    }

    pub fn show_field_error(&self, message: &str) {
        println!("  ! {}", message);
    }

    pub fn show_errors(&self, errors: &[FieldError]) {
        println!("Submission blocked:");
        for error in errors {
            println!("  ! {}", error.message);
        }
    }

    pub fn show_success(&self, count: usize) {
        println!("Form submitted successfully!");
        if self.verbosity.is_verbose() {
            println!("Responses collected: {}", count);
        }
    }
}

/// Context used to format a single field prompt.
pub struct PromptContext {
    pub index: usize,
    pub total: usize,
    pub label: String,
    pub required: bool,
    pub hint: Option<String>,
}

impl PromptContext {
    pub fn new(field: &FieldDefinition, index: usize, total: usize) -> Self {
        let hint = match field.kind {
            FieldKind::Radio => {
                let values = field
                    .choices()
                    .iter()
                    .map(|choice| choice.value.as_str())
                    .collect::<Vec<_>>();
                Some(format!("({})", values.join("/")))
            }
            _ => field
                .placeholder
                .as_ref()
                .map(|placeholder| format!("({})", placeholder)),
        };
        Self {
            index,
            total,
            label: field.label.clone(),
            required: field.required,
            hint,
        }
    }
}
