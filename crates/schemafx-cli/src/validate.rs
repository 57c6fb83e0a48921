//! # Validate Subcommand
//!
//! Validates one document against one schema. Without `--expect` the
//! errors are listed as `property: message` in property order; with it,
//! the run becomes an assertion against the expected error list and is
//! reported in TAP.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use schemafx_assert::{sort_errors, Assert, Harness, TapReporter};
use schemafx_schema::set::read_document;
use schemafx_schema::{Validate, ValidationError};

use crate::EngineArgs;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema document (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,

    /// Document to validate (JSON or YAML).
    pub input: PathBuf,

    /// JSON array of expected `{ property, message }` errors, sorted by
    /// property. An empty array expects success.
    #[arg(long)]
    pub expect: Option<PathBuf>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, engine: &EngineArgs) -> Result<u8> {
    let schema = load(&args.schema)?;
    let input = load(&args.input)?;
    let validator = engine.validator();

    match &args.expect {
        Some(path) => {
            let expected = load_expected(path)?;
            let tap = assert_errors(validator, &schema, &input, &expected)?;
            print!("{}", tap.output());
            Ok(if tap.success() { 0 } else { 1 })
        }
        None => {
            let (valid, lines) = list_errors(validator, &schema, &input)?;
            for line in &lines {
                println!("{line}");
            }
            if valid {
                println!("valid");
            }
            Ok(if valid { 0 } else { 1 })
        }
    }
}

fn load(path: &Path) -> Result<Value> {
    read_document(path).with_context(|| format!("reading {}", path.display()))
}

/// Read an expected-errors file.
pub fn load_expected(path: &Path) -> Result<Vec<ValidationError>> {
    let value = load(path)?;
    serde_json::from_value(value).with_context(|| {
        format!(
            "{} is not a list of {{ property, message }} errors",
            path.display()
        )
    })
}

/// Validate and render each error on its own line, sorted by property.
pub fn list_errors<V: Validate>(
    validator: V,
    schema: &Value,
    input: &Value,
) -> Result<(bool, Vec<String>)> {
    let res = validator.validate(input, schema).context("validating document")?;
    let lines = sort_errors(res.errors).iter().map(ToString::to_string).collect();
    Ok((res.valid, lines))
}

/// Assert the validation outcome against `expected` and finish the report.
pub fn assert_errors<V: Validate>(
    validator: V,
    schema: &Value,
    input: &Value,
    expected: &[ValidationError],
) -> Result<TapReporter> {
    let harness = Harness::new(validator);
    let mut tap = TapReporter::new();
    let outcome = if expected.is_empty() {
        harness.expect_success(&mut tap, schema, input)
    } else {
        harness.expect_validation_errors(&mut tap, schema, input, expected)
    };
    outcome.context("validating document")?;
    tap.end();
    Ok(tap)
}
