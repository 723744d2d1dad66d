//! # Validate Subcommand
//!
//! Validates one payload file as an ECHO record and reports the shape it
//! was checked against together with every violation found.
//!
//! ```bash
//! echo-lca validate record.json
//! echo-lca validate record.yaml --shape flat --format json
//! ```
//!
//! Exit code 0 means the record is valid, 1 means it was rejected.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;

use echo_schema::{parse, parse_as, Shape, ValidationViolations};

use crate::load::load_payload;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Payload file (JSON, or YAML with a `.yaml`/`.yml` extension).
    pub file: PathBuf,

    /// Shape to validate against. `auto` looks for the nested marker key.
    #[arg(long, value_enum, default_value_t = ShapeSelection::Auto)]
    pub shape: ShapeSelection,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Shape requested on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSelection {
    Auto,
    Nested,
    Flat,
}

/// How the report is printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Outcome of validating one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub shape: Shape,
    pub valid: bool,
    pub violations: Option<ValidationViolations>,
}

impl ValidationReport {
    /// Render the human-readable form.
    pub fn to_text(&self) -> String {
        match &self.violations {
            None => format!("OK: {} is a valid {} ECHO record", self.file, self.shape),
            Some(violations) => format!(
                "FAIL: {} doesn't match {} schema ({} violation(s)):\n{}",
                self.file,
                self.shape,
                violations.len(),
                violations
            ),
        }
    }
}

/// Validate an already loaded payload.
pub fn validate_payload(file: &str, payload: &Value, selection: ShapeSelection) -> ValidationReport {
    let result = match selection {
        ShapeSelection::Auto => parse(payload),
        ShapeSelection::Nested => parse_as(Shape::Nested, payload),
        ShapeSelection::Flat => parse_as(Shape::Flat, payload),
    };
    match result {
        Ok(record) => ValidationReport {
            file: file.to_string(),
            shape: record.shape(),
            valid: true,
            violations: None,
        },
        Err(err) => ValidationReport {
            file: file.to_string(),
            shape: err.shape,
            valid: false,
            violations: Some(err.violations().clone()),
        },
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let report = validate_file(&args.file, args.shape)?;
    match args.format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(if report.valid { 0 } else { 1 })
}

fn validate_file(path: &Path, selection: ShapeSelection) -> Result<ValidationReport> {
    let payload = load_payload(path)?;
    let report = validate_payload(&path.display().to_string(), &payload, selection);
    tracing::info!(
        file = %path.display(),
        shape = %report.shape,
        valid = report.valid,
        "validated payload"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FLAT_FIXTURE: &str = include_str!("../../echo-schema/tests/fixtures/flat_basic.json");
    const NESTED_FIXTURE: &str = include_str!("../../echo-schema/tests/fixtures/nested_basic.json");

    fn fixture(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn auto_detects_both_shapes() {
        let nested = validate_payload("n.json", &fixture(NESTED_FIXTURE), ShapeSelection::Auto);
        assert!(nested.valid);
        assert_eq!(nested.shape, Shape::Nested);

        let flat = validate_payload("f.json", &fixture(FLAT_FIXTURE), ShapeSelection::Auto);
        assert!(flat.valid);
        assert_eq!(flat.shape, Shape::Flat);
        assert_eq!(flat.to_text(), "OK: f.json is a valid flat ECHO record");
    }

    #[test]
    fn forced_shape_reports_mismatch() {
        let report = validate_payload("f.json", &fixture(FLAT_FIXTURE), ShapeSelection::Nested);
        assert!(!report.valid);
        assert_eq!(report.shape, Shape::Nested);
        let text = report.to_text();
        assert!(text.starts_with("FAIL: f.json doesn't match nested schema"));
        assert!(text.contains("project_description: section required"));
    }

    #[test]
    fn json_report_lists_violations() {
        let mut payload = fixture(FLAT_FIXTURE);
        payload["lat"] = json!(91);
        let report = validate_payload("f.json", &payload, ShapeSelection::Auto);
        let rendered = serde_json::to_value(&report).unwrap();
        assert_eq!(rendered["valid"], json!(false));
        assert_eq!(rendered["shape"], json!("flat"));
        assert_eq!(rendered["violations"][0]["path"], json!("lat"));
        assert_eq!(rendered["violations"][0]["kind"], json!("field_constraint"));
    }

    #[test]
    fn run_validate_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(&good, FLAT_FIXTURE).unwrap();
        let bad = dir.path().join("bad.yaml");
        std::fs::write(&bad, "project_name: Depot\n").unwrap();

        let args = |file: PathBuf| ValidateArgs {
            file,
            shape: ShapeSelection::Auto,
            format: OutputFormat::Json,
        };
        assert_eq!(run_validate(&args(good)).unwrap(), 0);
        assert_eq!(run_validate(&args(bad)).unwrap(), 1);
        assert!(run_validate(&args(dir.path().join("absent.json"))).is_err());
    }
}
