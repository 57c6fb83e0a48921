//! # schemafx-cli — Schema Test Runner
//!
//! Runs the schemafx helpers against files on disk:
//!
//! ```bash
//! schemafx check schemas/                        # every schema is well-formed
//! schemafx check api-bundle.json                 # same, for a name -> schema bundle
//! schemafx validate --schema nic.json input.json # print errors as property: message
//! schemafx validate --schema nic.json input.json --expect errors.json
//! schemafx messages                              # dump the message catalog
//! ```
//!
//! Reports are written to stdout; logs go to stderr. Handlers return the
//! process exit code: 0 when every assertion passed, 1 otherwise.

pub mod check;
pub mod messages;
pub mod validate;

use clap::Args;
use schemafx_schema::{Draft, JsonSchemaValidator};

/// Engine options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON Schema draft to compile against (4, 6, 7, 2019-09, 2020-12).
    /// Detected from `$schema` when omitted.
    #[arg(long, global = true, value_parser = parse_draft)]
    pub draft: Option<Draft>,

    /// Treat `format` as an assertion instead of an annotation.
    #[arg(long, global = true)]
    pub validate_formats: bool,
}

impl EngineArgs {
    pub fn validator(&self) -> JsonSchemaValidator {
        let validator = JsonSchemaValidator::new().with_format_validation(self.validate_formats);
        match self.draft {
            Some(draft) => validator.with_draft(draft),
            None => validator,
        }
    }
}

/// Parse a draft name as accepted on the command line.
pub fn parse_draft(s: &str) -> Result<Draft, String> {
    match s.trim_start_matches("draft").trim_start_matches('-') {
        "4" | "04" => Ok(Draft::Draft4),
        "6" | "06" => Ok(Draft::Draft6),
        "7" | "07" => Ok(Draft::Draft7),
        "2019-09" => Ok(Draft::Draft201909),
        "2020-12" => Ok(Draft::Draft202012),
        other => Err(format!(
            "unknown draft '{other}' (expected 4, 6, 7, 2019-09 or 2020-12)"
        )),
    }
}
