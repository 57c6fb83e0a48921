//! # schemafx-assert — Schema Test Helpers
//!
//! Fixtures and assertions for exercising JSON Schema definitions from a
//! test suite:
//!
//! - [`err_missing`] — the expected error for an absent required property.
//! - [`expect_success`] — the instance validates with no errors.
//! - [`expect_validation_errors`] — the instance fails with exactly the
//!   given errors (actual errors are sorted by property first).
//! - [`expect_single_validation_error`] — shorthand for one expected error.
//! - [`validate_all_schemas`] — every schema in a map is well-formed.
//!
//! The free functions use the default [`JsonSchemaValidator`]; [`Harness`]
//! runs the same helpers over any [`Validate`] implementation.
//!
//! Outcomes go to an [`Assert`] sink: [`Recorder`] keeps them for
//! inspection, [`Panicking`] fails the enclosing `#[test]`, and
//! [`TapReporter`] renders TAP.
//!
//! ```ignore
//! use schemafx_assert::{expect_single_validation_error, messages, Panicking};
//! use serde_json::json;
//!
//! let schema = json!({ "type": "object", "required": ["name"] });
//! let mut t = Panicking::new();
//! expect_single_validation_error(&mut t, &schema, &json!({}), "name", messages().missing())?;
//! ```

pub mod assert;
pub mod compare;
pub mod helpers;
pub mod recorder;
pub mod tap;

pub use assert::{Assert, Panicking};
pub use compare::{errors_match, sort_errors};
pub use helpers::{
    err_missing, expect_single_validation_error, expect_success, expect_validation_errors,
    validate_all_schemas, Harness,
};
pub use recorder::{Outcome, Recorder};
pub use tap::TapReporter;

pub use schemafx_schema::{
    messages, type_msg, JsonSchemaValidator, MessageCatalog, SchemaError, SchemaSet, Validate,
    ValidationError, ValidationResult, MISSING,
};
