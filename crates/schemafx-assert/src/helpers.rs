//! # Schema Test Helpers
//!
//! Every helper validates, then reports to an [`Assert`] sink; none of
//! them fail on their own. Errors from the validator itself (a schema the
//! engine cannot compile) or from encoding values for comparison are
//! returned unchanged.
//!
//! Assertion labels are fixed so that reports stay comparable across
//! runs: `valid` / `no errors` for success, `invalid` / `errors` for
//! expected failures, and `<name>: result` per schema in
//! [`validate_all_schemas`].

use serde_json::{json, Value};

use schemafx_schema::{JsonSchemaValidator, SchemaError, Validate, ValidationError, MISSING};

use crate::assert::Assert;
use crate::compare::sort_errors;

/// The expected error for a required property that is absent.
pub fn err_missing(param: impl Into<String>) -> ValidationError {
    ValidationError::new(param, MISSING)
}

/// Test helpers bound to a particular validator.
#[derive(Debug, Clone, Default)]
pub struct Harness<V = JsonSchemaValidator> {
    validator: V,
}

impl<V: Validate> Harness<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Assert that `input` validates against `schema` with no errors.
    pub fn expect_success<A: Assert + ?Sized>(
        &self,
        t: &mut A,
        schema: &Value,
        input: &Value,
    ) -> Result<(), SchemaError> {
        let res = self.validator.validate(input, schema)?;
        tracing::debug!(valid = res.valid, errors = res.errors.len(), "expect_success");

        t.ok(res.valid, "valid");
        t.deep_equal(&serde_json::to_value(&res.errors)?, &json!([]), "no errors");
        Ok(())
    }

    /// Assert that `input` fails against `schema` with exactly `expected`.
    ///
    /// Actual errors are sorted by property (stably) before comparison;
    /// `expected` must already be in property order.
    pub fn expect_validation_errors<A: Assert + ?Sized>(
        &self,
        t: &mut A,
        schema: &Value,
        input: &Value,
        expected: &[ValidationError],
    ) -> Result<(), SchemaError> {
        let res = self.validator.validate(input, schema)?;
        tracing::debug!(
            valid = res.valid,
            errors = res.errors.len(),
            expected = expected.len(),
            "expect_validation_errors"
        );

        t.ok(!res.valid, "invalid");
        let actual = sort_errors(res.errors);
        t.deep_equal(
            &serde_json::to_value(&actual)?,
            &serde_json::to_value(expected)?,
            "errors",
        );
        Ok(())
    }

    /// Assert that `input` fails with a single error on `param`.
    pub fn expect_single_validation_error<A: Assert + ?Sized>(
        &self,
        t: &mut A,
        schema: &Value,
        input: &Value,
        param: &str,
        err_msg: &str,
    ) -> Result<(), SchemaError> {
        self.expect_validation_errors(t, schema, input, &[ValidationError::new(param, err_msg)])
    }

    /// Assert that every schema in `schemas` is a well-formed schema
    /// document, then end the test.
    ///
    /// `end` is called once, after the last entry. An error from the
    /// validator stops the run before `end`.
    pub fn validate_all_schemas<'a, K, I, A>(
        &self,
        schemas: I,
        t: &mut A,
    ) -> Result<(), SchemaError>
    where
        K: std::fmt::Display,
        I: IntoIterator<Item = (K, &'a Value)>,
        A: Assert + ?Sized,
    {
        let clean = json!({ "valid": true, "errors": [] });

        for (name, schema) in schemas {
            let res = self.validator.check_schema(schema)?;
            tracing::debug!(schema = %name, valid = res.valid, "checked schema");
            t.deep_equal(&serde_json::to_value(&res)?, &clean, &format!("{name}: result"));
        }

        t.end();
        Ok(())
    }
}

/// [`Harness::expect_success`] with the default validator.
pub fn expect_success<A: Assert + ?Sized>(
    t: &mut A,
    schema: &Value,
    input: &Value,
) -> Result<(), SchemaError> {
    Harness::<JsonSchemaValidator>::default().expect_success(t, schema, input)
}

/// [`Harness::expect_validation_errors`] with the default validator.
pub fn expect_validation_errors<A: Assert + ?Sized>(
    t: &mut A,
    schema: &Value,
    input: &Value,
    expected: &[ValidationError],
) -> Result<(), SchemaError> {
    Harness::<JsonSchemaValidator>::default().expect_validation_errors(t, schema, input, expected)
}

/// [`Harness::expect_single_validation_error`] with the default validator.
pub fn expect_single_validation_error<A: Assert + ?Sized>(
    t: &mut A,
    schema: &Value,
    input: &Value,
    param: &str,
    err_msg: &str,
) -> Result<(), SchemaError> {
    Harness::<JsonSchemaValidator>::default()
        .expect_single_validation_error(t, schema, input, param, err_msg)
}

/// [`Harness::validate_all_schemas`] with the default validator.
pub fn validate_all_schemas<'a, K, I, A>(schemas: I, t: &mut A) -> Result<(), SchemaError>
where
    K: std::fmt::Display,
    I: IntoIterator<Item = (K, &'a Value)>,
    A: Assert + ?Sized,
{
    Harness::<JsonSchemaValidator>::default().validate_all_schemas(schemas, t)
}
