mod wizard;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use form_engine::{FieldState, FormSession, SubmitOutcome};
use form_spec::{
    FieldDefinition, FieldKind, FieldValues, ValidationResult, compile, defaults, document_schema,
    parse_schema, render_json_ui, render_text, validate,
};
use tracing_subscriber::EnvFilter;
use wizard::{FormPresenter, PromptContext, Verbosity};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Schema-driven dynamic form shell",
    long_about = "Renders editable forms described by JSON schema documents, live-validates input, and collects submissions for export"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Fill the form interactively and export the collected submissions.
    Fill {
        /// Path to the form schema JSON; defaults to the built-in survey.
        #[arg(long, value_name = "SCHEMA")]
        schema: Option<PathBuf>,
        /// Write the submission export to this file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Show verbose output (field listings, submission counts).
        #[arg(long, alias = "debug")]
        verbose: bool,
    },
    /// Print the rendered form for a schema.
    Render {
        /// Path to the form schema JSON; defaults to the built-in survey.
        #[arg(long, value_name = "SCHEMA")]
        schema: Option<PathBuf>,
        /// Render output mode.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Parse and invariant-check a schema document.
    Check {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
    },
    /// Validate a JSON value set against a schema's compiled rules.
    Validate {
        /// Path to the form schema JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
        /// Path to a JSON object mapping field ids to string values.
        #[arg(long, value_name = "VALUES")]
        values: PathBuf,
    },
    /// Print the JSON schema of the form document format.
    Schema,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fill {
            schema,
            out,
            verbose,
        } => run_fill(schema, out, verbose),
        Command::Render { schema, format } => run_render(schema, format),
        Command::Check { schema } => run_check(schema),
        Command::Validate { schema, values } => run_validate(schema, values),
        Command::Schema => run_schema(),
    }
}

fn load_session(schema_path: Option<PathBuf>) -> CliResult<FormSession> {
    let schema = match schema_path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            parse_schema(&text)?
        }
        None => defaults::survey(),
    };
    Ok(FormSession::with_schema(schema))
}

fn run_fill(schema_path: Option<PathBuf>, out: Option<PathBuf>, verbose: bool) -> CliResult<()> {
    let mut session = load_session(schema_path)?;
    let mut presenter = FormPresenter::new(Verbosity::from_verbose(verbose));

    loop {
        presenter.show_header(&session.render_payload());
        fill_once(&mut session, &presenter)?;
        presenter.show_success(session.submission_count());
        if !prompt_yes_no("Add another response? [y/N]")? {
            break;
        }
    }

    let export = session.export_submissions()?;
    match out {
        Some(path) => {
            fs::write(&path, export)?;
            println!("Wrote submissions to {}", path.display());
        }
        None => println!("{}", export),
    }
    Ok(())
}

/// Prompts every field in schema order, then submits; fields that fail
/// validation are re-prompted until the submission is accepted.
fn fill_once(session: &mut FormSession, presenter: &FormPresenter) -> CliResult<()> {
    let fields = session.schema().fields.clone();
    let mut pending: Vec<String> = fields.iter().map(|field| field.id.clone()).collect();

    loop {
        let total = pending.len();
        for (index, id) in pending.iter().enumerate() {
            let field = fields
                .iter()
                .find(|field| &field.id == id)
                .ok_or_else(|| format!("field '{}' disappeared from the schema", id))?;
            let prompt = PromptContext::new(field, index + 1, total);
            let value = prompt_field(&prompt, field, presenter)?;
            session.set_value(id, value)?;
            if let FieldState::Invalid(message) = session.blur(id)? {
                presenter.show_field_error(&message);
            }
        }

        match session.submit() {
            SubmitOutcome::Accepted => return Ok(()),
            SubmitOutcome::Rejected(errors) => {
                presenter.show_errors(&errors);
                pending = errors.iter().map(|error| error.field_id.clone()).collect();
            }
        }
    }
}

fn prompt_field(
    prompt: &PromptContext,
    field: &FieldDefinition,
    presenter: &FormPresenter,
) -> CliResult<String> {
    loop {
        presenter.show_prompt(prompt);
        let input = read_prompt_line()?;
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            return Err("fill aborted by user".into());
        }
        match parse_field_input(field, trimmed) {
            Ok(value) => return Ok(value),
            Err(message) => presenter.show_input_error(&message),
        }
    }
}

fn parse_field_input(field: &FieldDefinition, raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        // Required-ness is the rule set's concern; empty stays empty here.
        return Ok(String::new());
    }
    match field.kind {
        FieldKind::Radio => {
            let options = field.choices();
            if let Some(option) = options
                .iter()
                .find(|option| option.value.eq_ignore_ascii_case(raw))
            {
                Ok(option.value.clone())
            } else {
                let allowed = options
                    .iter()
                    .map(|option| option.value.as_str())
                    .collect::<Vec<_>>();
                Err(format!("Choose one of: {}.", allowed.join(", ")))
            }
        }
        _ => Ok(raw.to_string()),
    }
}

fn read_prompt_line() -> CliResult<String> {
    print!("> ");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err("input stream closed".into());
    }
    Ok(input)
}

fn prompt_yes_no(question: &str) -> CliResult<bool> {
    println!("{}", question);
    print!("> ");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(false);
    }
    Ok(matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn run_render(schema_path: Option<PathBuf>, format: RenderMode) -> CliResult<()> {
    let session = load_session(schema_path)?;
    let payload = session.render_payload();
    match format {
        RenderMode::Text => println!("{}", render_text(&payload)),
        RenderMode::Json => println!("{}", serde_json::to_string_pretty(&render_json_ui(&payload))?),
    }
    Ok(())
}

fn run_check(schema_path: PathBuf) -> CliResult<()> {
    let text = fs::read_to_string(&schema_path)?;
    let schema = parse_schema(&text)?;
    println!(
        "Schema OK: '{}' with {} fields",
        schema.form_title,
        schema.fields.len()
    );
    Ok(())
}

fn run_validate(schema_path: PathBuf, values_path: PathBuf) -> CliResult<()> {
    let schema_text = fs::read_to_string(schema_path)?;
    let schema = parse_schema(&schema_text)?;
    let values_text = fs::read_to_string(values_path)?;
    let values: FieldValues = serde_json::from_str(&values_text)?;

    let rules = compile(&schema);
    let result = validate(&schema, &rules, &values);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn describe_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  {} - {}", error.field_id, error.message);
        }
    }
    if !result.unknown_fields.is_empty() {
        println!("Unknown value fields: {}", result.unknown_fields.join(", "));
    }
}

fn run_schema() -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(&document_schema())?);
    Ok(())
}
