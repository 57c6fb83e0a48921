//! Sort-then-compare over validation errors.
//!
//! Validators report errors in traversal order, which fixtures should not
//! have to reproduce. Actual errors are sorted by `property` before the
//! comparison; the expected side is taken as given and must already be in
//! property order.

use schemafx_schema::ValidationError;

/// Stable ascending sort on `property` alone.
///
/// Errors that share a property keep their relative order.
pub fn sort_errors(mut errors: Vec<ValidationError>) -> Vec<ValidationError> {
    errors.sort_by(|a, b| a.property.cmp(&b.property));
    errors
}

/// Whether `actual`, once sorted, equals `expected` exactly.
pub fn errors_match(actual: &[ValidationError], expected: &[ValidationError]) -> bool {
    sort_errors(actual.to_vec()) == expected
}
