//! # Validators
//!
//! [`Validate`] is the seam between test helpers and a schema engine:
//! anything that can turn `(instance, schema)` into a
//! [`ValidationResult`] can drive the helpers, which keeps scripted fakes
//! and the real engine interchangeable.
//!
//! [`JsonSchemaValidator`] is the production implementation, backed by
//! the `jsonschema` crate. It compiles the schema on every call; the
//! helpers validate each schema a handful of times at most, so there is
//! no cache.

use serde_json::Value;

use crate::error::SchemaError;
use crate::model::ValidationResult;
use crate::render::render_error;

/// A schema validation engine.
pub trait Validate {
    /// Validate `instance` against `schema`.
    ///
    /// # Errors
    ///
    /// Returns an error when the engine cannot evaluate the schema at all;
    /// constraint failures are reported in the returned result.
    fn validate(&self, instance: &Value, schema: &Value) -> Result<ValidationResult, SchemaError>;

    /// Check that `schema` is itself a well-formed schema document.
    ///
    /// The default runs the schema through [`Validate::validate`] as both
    /// instance and schema.
    fn check_schema(&self, schema: &Value) -> Result<ValidationResult, SchemaError> {
        self.validate(schema, schema)
    }
}

/// [`Validate`] implementation backed by the `jsonschema` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaValidator {
    /// Draft to compile against; `None` detects it from `$schema`.
    draft: Option<jsonschema::Draft>,
    /// Whether `format` is asserted rather than treated as an annotation.
    validate_formats: bool,
}

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the draft instead of detecting it from `$schema`.
    pub fn with_draft(mut self, draft: jsonschema::Draft) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Enable or disable `format` assertions.
    pub fn with_format_validation(mut self, enabled: bool) -> Self {
        self.validate_formats = enabled;
        self
    }

    pub fn draft(&self) -> Option<jsonschema::Draft> {
        self.draft
    }

    pub fn validates_formats(&self) -> bool {
        self.validate_formats
    }

    fn build(
        &self,
        schema: &Value,
    ) -> Result<jsonschema::Validator, jsonschema::ValidationError<'static>> {
        let mut opts = jsonschema::options();
        if let Some(draft) = self.draft {
            opts.with_draft(draft);
        }
        opts.should_validate_formats(self.validate_formats);
        opts.build(schema)
    }
}

impl Validate for JsonSchemaValidator {
    fn validate(&self, instance: &Value, schema: &Value) -> Result<ValidationResult, SchemaError> {
        let validator = self.build(schema).map_err(|e| SchemaError::Compile {
            reason: e.to_string(),
        })?;

        let errors: Vec<_> = validator
            .iter_errors(instance)
            .flat_map(|e| render_error(instance, &e))
            .collect();

        tracing::debug!(errors = errors.len(), "validated instance");
        for error in &errors {
            tracing::trace!(
                property = %error.property,
                message = %error.message,
                "validation error"
            );
        }

        Ok(ValidationResult::from_errors(errors))
    }

    /// Compiling a schema checks it against its draft's meta-schema, so a
    /// compile failure is the "not well-formed" verdict rather than an error.
    fn check_schema(&self, schema: &Value) -> Result<ValidationResult, SchemaError> {
        match self.build(schema) {
            Ok(_) => Ok(ValidationResult::success()),
            Err(e) => {
                tracing::debug!(error = %e, "schema failed to compile");
                Ok(ValidationResult::from_errors(render_error(schema, &e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{messages, MISSING};
    use crate::model::ValidationError;
    use serde_json::json;

    fn name_schema() -> Value {
        json!({
            "type": "object",
            "properties": { "name": { "type": "string" } },
            "required": ["name"]
        })
    }

    #[test]
    fn valid_instance_has_no_errors() {
        let res = JsonSchemaValidator::new()
            .validate(&json!({ "name": "admin" }), &name_schema())
            .unwrap();
        assert_eq!(res, ValidationResult::success());
    }

    #[test]
    fn missing_required_property() {
        let res = JsonSchemaValidator::new()
            .validate(&json!({}), &name_schema())
            .unwrap();
        assert!(!res.valid);
        assert_eq!(res.errors, vec![ValidationError::new("name", MISSING)]);
    }

    #[test]
    fn wrong_type_uses_catalog_wording() {
        let res = JsonSchemaValidator::new()
            .validate(&json!({ "name": {} }), &name_schema())
            .unwrap();
        assert_eq!(
            res.errors,
            vec![ValidationError::new("name", messages().obj_str())]
        );
    }

    #[test]
    fn uncompilable_schema_is_an_error() {
        let err = JsonSchemaValidator::new()
            .validate(&json!({}), &json!({ "type": "no-such-type" }))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Compile { .. }));
    }

    #[test]
    fn check_schema_accepts_well_formed_schema() {
        let res = JsonSchemaValidator::new().check_schema(&name_schema()).unwrap();
        assert_eq!(res, ValidationResult::success());
    }

    #[test]
    fn check_schema_rejects_malformed_schema() {
        let res = JsonSchemaValidator::new()
            .check_schema(&json!({ "type": "no-such-type" }))
            .unwrap();
        assert!(!res.valid);
        assert!(!res.errors.is_empty());
    }

    #[test]
    fn pinned_draft_is_kept() {
        let v = JsonSchemaValidator::new()
            .with_draft(jsonschema::Draft::Draft4)
            .with_format_validation(true);
        assert_eq!(v.draft(), Some(jsonschema::Draft::Draft4));
        assert!(v.validates_formats());
        let res = v.validate(&json!({}), &name_schema()).unwrap();
        assert_eq!(res.errors, vec![ValidationError::new("name", MISSING)]);
    }

    #[test]
    fn format_assertions_follow_option() {
        let schema = json!({ "type": "string", "format": "ipv4" });
        let lenient = JsonSchemaValidator::new()
            .validate(&json!("not-an-ip"), &schema)
            .unwrap();
        assert!(lenient.valid);
        let strict = JsonSchemaValidator::new()
            .with_format_validation(true)
            .validate(&json!("not-an-ip"), &schema)
            .unwrap();
        assert!(!strict.valid);
    }

    /// A validator that only knows the default `check_schema`.
    struct SelfDescribing;

    impl Validate for SelfDescribing {
        fn validate(
            &self,
            instance: &Value,
            schema: &Value,
        ) -> Result<ValidationResult, SchemaError> {
            if instance == schema {
                Ok(ValidationResult::success())
            } else {
                Ok(ValidationResult::from_errors(vec![ValidationError::new("", "differs")]))
            }
        }
    }

    #[test]
    fn default_check_schema_uses_schema_as_instance() {
        let res = SelfDescribing.check_schema(&name_schema()).unwrap();
        assert!(res.valid);
    }
}
