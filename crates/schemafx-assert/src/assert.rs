//! # Assertion Sinks
//!
//! [`Assert`] is the narrow capability the helpers report through. It
//! mirrors the three calls a test runner offers: a boolean check, a
//! structural comparison, and an end-of-test signal. Comparisons are over
//! `serde_json::Value` so the trait stays object-safe.

use serde_json::Value;

/// Receiver of assertion outcomes.
pub trait Assert {
    /// Record a boolean check.
    fn ok(&mut self, condition: bool, label: &str);

    /// Record a structural equality check.
    fn deep_equal(&mut self, actual: &Value, expected: &Value, label: &str);

    /// Signal that the test has finished.
    fn end(&mut self);
}

impl<A: Assert + ?Sized> Assert for &mut A {
    fn ok(&mut self, condition: bool, label: &str) {
        (**self).ok(condition, label);
    }

    fn deep_equal(&mut self, actual: &Value, expected: &Value, label: &str) {
        (**self).deep_equal(actual, expected, label);
    }

    fn end(&mut self) {
        (**self).end();
    }
}

impl<A: Assert + ?Sized> Assert for Box<A> {
    fn ok(&mut self, condition: bool, label: &str) {
        (**self).ok(condition, label);
    }

    fn deep_equal(&mut self, actual: &Value, expected: &Value, label: &str) {
        (**self).deep_equal(actual, expected, label);
    }

    fn end(&mut self) {
        (**self).end();
    }
}

/// Sink that panics on the first failed assertion.
///
/// Meant for plain `#[test]` functions, where a panic is the failure signal.
#[derive(Debug, Default)]
pub struct Panicking {
    checks: usize,
    ended: bool,
}

impl Panicking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assertions that have passed.
    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl Assert for Panicking {
    fn ok(&mut self, condition: bool, label: &str) {
        assert!(condition, "assertion failed: {label}");
        self.checks += 1;
    }

    fn deep_equal(&mut self, actual: &Value, expected: &Value, label: &str) {
        assert!(
            actual == expected,
            "assertion failed: {label}\n  actual:   {}\n  expected: {}",
            pretty(actual),
            pretty(expected),
        );
        self.checks += 1;
    }

    fn end(&mut self) {
        self.ended = true;
    }
}

pub(crate) fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn panicking_counts_passes() {
        let mut t = Panicking::new();
        t.ok(true, "valid");
        t.deep_equal(&json!([]), &json!([]), "no errors");
        t.end();
        assert_eq!(t.checks(), 2);
        assert!(t.is_ended());
    }

    #[test]
    #[should_panic(expected = "assertion failed: invalid")]
    fn panicking_fails_on_false() {
        Panicking::new().ok(false, "invalid");
    }

    #[test]
    #[should_panic(expected = "assertion failed: errors")]
    fn panicking_fails_on_mismatch() {
        Panicking::new().deep_equal(&json!([1]), &json!([2]), "errors");
    }

    #[test]
    fn forwarding_through_references_and_boxes() {
        let mut inner = Panicking::new();
        {
            let mut by_ref = &mut inner;
            Assert::ok(&mut by_ref, true, "ref");
        }
        let mut boxed: Box<dyn Assert> = Box::new(Panicking::new());
        boxed.ok(true, "boxed");
        boxed.end();
        assert_eq!(inner.checks(), 1);
    }
}
