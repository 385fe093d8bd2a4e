use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

const MINI_SCHEMA: &str = r#"{
  "formTitle": "Mini",
  "fields": [
    { "id": "name", "type": "text", "label": "Name", "required": true },
    { "id": "comments", "type": "textarea", "label": "Comments", "required": false }
  ]
}"#;

const RADIO_SCHEMA: &str = r#"{
  "formTitle": "Pick",
  "fields": [
    {
      "id": "answer",
      "type": "radio",
      "label": "Answer",
      "required": true,
      "options": [
        { "value": "yes", "label": "Yes" },
        { "value": "no", "label": "No" }
      ]
    }
  ]
}"#;

fn dynform() -> Command {
    Command::cargo_bin("dynform").expect("binary builds")
}

fn write_schema(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let file = dir.child("schema.json");
    file.write_str(contents).expect("write schema");
    file.path().to_path_buf()
}

#[test]
fn check_accepts_valid_schema() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, MINI_SCHEMA);

    let output = dynform()
        .args(["check", "--schema"])
        .arg(&schema)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Schema OK: 'Mini' with 2 fields"));
}

#[test]
fn check_rejects_truncated_schema() {
    let dir = TempDir::new().unwrap();
    let truncated = &MINI_SCHEMA[..MINI_SCHEMA.len() - 2];
    let schema = write_schema(&dir, truncated);

    dynform()
        .args(["check", "--schema"])
        .arg(&schema)
        .assert()
        .failure();
}

#[test]
fn validate_reports_every_missing_required_field() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, MINI_SCHEMA);
    let values = dir.child("values.json");
    values.write_str("{}").unwrap();

    let output = dynform()
        .args(["validate", "--schema"])
        .arg(&schema)
        .arg("--values")
        .arg(values.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Validation result: invalid"));
    assert!(stdout.contains("Name is required"));
}

#[test]
fn validate_accepts_filled_values() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, MINI_SCHEMA);
    let values = dir.child("values.json");
    values
        .write_str(r#"{ "name": "Ada", "comments": "" }"#)
        .unwrap();

    let output = dynform()
        .args(["validate", "--schema"])
        .arg(&schema)
        .arg("--values")
        .arg(values.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Validation result: valid"));
}

#[test]
fn render_lists_default_survey_fields() {
    let output = dynform().arg("render").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Form: Survey"));
    assert!(stdout.contains("Full Name"));
    assert!(stdout.contains("Email Address"));
    assert!(stdout.contains("Submissions: 0"));
}

#[test]
fn render_json_exposes_field_array() {
    let output = dynform()
        .args(["render", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json render output");
    assert_eq!(parsed["form_title"], "Survey");
    assert_eq!(parsed["fields"].as_array().map(Vec::len), Some(6));
}

#[test]
fn schema_prints_document_format() {
    let output = dynform().arg("schema").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("formTitle"));
    assert!(stdout.contains("fields"));
}

#[test]
fn fill_collects_a_submission_over_stdin() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, MINI_SCHEMA);

    let output = dynform()
        .args(["fill", "--schema"])
        .arg(&schema)
        .write_stdin("John Doe\n\nn\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Form: Mini"));
    assert!(stdout.contains("Form submitted successfully!"));
    assert!(stdout.contains("John Doe"));
    // Optional field is exported as an empty string.
    assert!(stdout.contains("\"comments\": \"\""));
}

#[test]
fn fill_reprompts_fields_that_fail_validation() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, MINI_SCHEMA);

    // First pass leaves the required name empty; only that field is asked
    // again after the rejected submit.
    let output = dynform()
        .args(["fill", "--schema"])
        .arg(&schema)
        .write_stdin("\n\nAda\nn\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Submission blocked:"));
    assert!(stdout.contains("! Name is required"));
    assert!(stdout.contains("Form submitted successfully!"));
    assert!(stdout.contains("\"name\": \"Ada\""));
}

#[test]
fn fill_rejects_unknown_radio_choice() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, RADIO_SCHEMA);

    let output = dynform()
        .args(["fill", "--schema"])
        .arg(&schema)
        .write_stdin("maybe\nYES\nn\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Choose one of: yes, no."));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Case-insensitive match resolves to the declared option value.
    assert!(stdout.contains("\"answer\": \"yes\""));
}

#[test]
fn fill_writes_export_file() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, MINI_SCHEMA);
    let out = dir.child("submissions.json");

    let output = dynform()
        .args(["fill", "--schema"])
        .arg(&schema)
        .arg("--out")
        .arg(out.path())
        .write_stdin("John Doe\n\nn\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let exported = std::fs::read_to_string(out.path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    assert_eq!(parsed[0]["name"], "John Doe");
}

#[test]
fn fill_collects_multiple_submissions_in_order() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, MINI_SCHEMA);

    let output = dynform()
        .args(["fill", "--schema"])
        .arg(&schema)
        .write_stdin("First\n\ny\nSecond\nsome notes\nn\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("\"name\": \"First\"").expect("first record");
    let second = stdout.find("\"name\": \"Second\"").expect("second record");
    assert!(first < second, "export preserves submission order");
}
