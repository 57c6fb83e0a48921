//! # Check Subcommand
//!
//! Loads schema directories and bundle files into one set and asserts
//! that every schema is well-formed.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use schemafx_assert::{Harness, TapReporter};
use schemafx_schema::{SchemaSet, Validate};

use crate::EngineArgs;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema directories (one schema per file) or bundle files
    /// (an object mapping names to schemas).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, engine: &EngineArgs) -> Result<u8> {
    let set = load_schemas(&args.paths)?;
    tracing::info!(schemas = set.len(), "checking schemas");

    let tap = check_schemas(&set, engine.validator())?;
    print!("{}", tap.output());
    Ok(if tap.success() { 0 } else { 1 })
}

/// Merge every path into one schema set.
///
/// A name that appears under two paths is an error, so that no schema on
/// disk goes unchecked.
pub fn load_schemas(paths: &[PathBuf]) -> Result<SchemaSet> {
    let mut set = SchemaSet::new();
    for path in paths {
        set.merge(load_path(path)?)
            .with_context(|| format!("merging schemas from {}", path.display()))?;
    }
    if set.is_empty() {
        bail!("no schemas found in {}", display_paths(paths));
    }
    Ok(set)
}

fn load_path(path: &Path) -> Result<SchemaSet> {
    let loaded = if path.is_dir() {
        SchemaSet::load_dir(path)
    } else {
        SchemaSet::load_file(path)
    };
    loaded.with_context(|| format!("loading schemas from {}", path.display()))
}

/// Run the well-formedness check over `set`, returning the finished report.
pub fn check_schemas<V: Validate>(set: &SchemaSet, validator: V) -> Result<TapReporter> {
    let mut tap = TapReporter::new();
    Harness::new(validator)
        .validate_all_schemas(set, &mut tap)
        .context("checking schemas")?;
    Ok(tap)
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemafx_schema::JsonSchemaValidator;

    #[test]
    fn checks_directory_and_bundle_together() {
        let dir = tempfile::tempdir().unwrap();
        let schemas = dir.path().join("schemas");
        std::fs::create_dir(&schemas).unwrap();
        std::fs::write(schemas.join("nic.schema.json"), r#"{ "type": "object" }"#).unwrap();
        std::fs::write(
            dir.path().join("bundle.json"),
            r#"{ "CreateNetwork": { "type": "object", "required": ["name"] } }"#,
        )
        .unwrap();

        let set = load_schemas(&[schemas, dir.path().join("bundle.json")]).unwrap();
        assert_eq!(set.names(), vec!["CreateNetwork", "nic"]);

        let tap = check_schemas(&set, JsonSchemaValidator::new()).unwrap();
        assert!(tap.success(), "{}", tap.output());
        assert!(tap.output().contains("ok 1 - CreateNetwork: result"));
        assert!(tap.output().contains("1..2"));
    }

    #[test]
    fn malformed_schema_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), r#"{ "type": "no-such-type" }"#).unwrap();
        let set = load_schemas(&[dir.path().to_path_buf()]).unwrap();
        let tap = check_schemas(&set, JsonSchemaValidator::new()).unwrap();
        assert!(!tap.success());
        assert!(tap.output().contains("not ok 1 - bad: result"));
    }

    #[test]
    fn same_name_under_two_paths_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::create_dir(&a).unwrap();
        std::fs::create_dir(&b).unwrap();
        std::fs::write(a.join("network.json"), r#"{ "type": "no-such-type" }"#).unwrap();
        std::fs::write(b.join("network.json"), r#"{ "type": "object" }"#).unwrap();

        let err = load_schemas(&[a, b.clone()]).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("duplicate schema name 'network'"), "{msg}");
        assert!(msg.contains(&b.display().to_string()), "{msg}");
    }

    #[test]
    fn empty_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_schemas(&[dir.path().to_path_buf()]).unwrap_err();
        assert!(err.to_string().contains("no schemas found"));
    }
}
