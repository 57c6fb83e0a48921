//! # schemafx-schema — Schema Engine Seam
//!
//! Wraps the `jsonschema` crate behind a small capability trait and
//! renders its native errors into the flat `{ property, message }`
//! records that schema test suites compare against.
//!
//! ## Modules
//!
//! - [`model`] — [`ValidationError`] and [`ValidationResult`].
//! - [`validate`] — the [`Validate`] trait and [`JsonSchemaValidator`].
//! - [`render`] — conversion of engine errors into dotted property paths
//!   and catalog wording.
//! - [`messages`] — the process-wide [`MessageCatalog`].
//! - [`set`] — named schema collections loaded from disk.
//!
//! ## Crate Policy
//!
//! - No validation logic lives here; constraint checking is delegated to
//!   `jsonschema` in its entirety.
//! - Failures of the engine itself (a schema that does not compile) are
//!   returned as [`SchemaError`], never folded into a `ValidationResult`,
//!   except by [`Validate::check_schema`] whose job is to report them.

pub mod error;
pub mod messages;
pub mod model;
pub mod render;
pub mod set;
pub mod validate;

pub use error::SchemaError;
pub use messages::{messages, type_msg, MessageCatalog, MISSING};
pub use model::{ValidationError, ValidationResult};
pub use set::SchemaSet;
pub use validate::{JsonSchemaValidator, Validate};

/// Re-exported so callers can pick a draft without depending on `jsonschema`.
pub use jsonschema::Draft;
