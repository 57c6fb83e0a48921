//! Assertion sink that keeps every outcome for later inspection.

use serde::Serialize;
use serde_json::Value;

use crate::assert::Assert;

/// One recorded assertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub label: String,
    pub passed: bool,
    /// Compared values, kept only for failed `deep_equal` checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
}

/// Records outcomes instead of acting on them.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    outcomes: Vec<Outcome>,
    ends: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn labels(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.label.as_str()).collect()
    }

    pub fn failures(&self) -> Vec<&Outcome> {
        self.outcomes.iter().filter(|o| !o.passed).collect()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// How many times `end` was called.
    pub fn end_count(&self) -> usize {
        self.ends
    }
}

impl Assert for Recorder {
    fn ok(&mut self, condition: bool, label: &str) {
        self.outcomes.push(Outcome {
            label: label.to_string(),
            passed: condition,
            actual: None,
            expected: None,
        });
    }

    fn deep_equal(&mut self, actual: &Value, expected: &Value, label: &str) {
        let passed = actual == expected;
        self.outcomes.push(Outcome {
            label: label.to_string(),
            passed,
            actual: (!passed).then(|| actual.clone()),
            expected: (!passed).then(|| expected.clone()),
        });
    }

    fn end(&mut self) {
        self.ends += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_in_order() {
        let mut t = Recorder::new();
        t.ok(true, "valid");
        t.deep_equal(&json!([1]), &json!([]), "no errors");
        t.end();

        assert_eq!(t.labels(), vec!["valid", "no errors"]);
        assert!(!t.all_passed());
        assert_eq!(t.end_count(), 1);

        let failures = t.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].actual, Some(json!([1])));
        assert_eq!(failures[0].expected, Some(json!([])));
    }

    #[test]
    fn passing_comparison_keeps_no_values() {
        let mut t = Recorder::new();
        t.deep_equal(&json!({ "a": 1 }), &json!({ "a": 1 }), "same");
        assert_eq!(t.outcomes()[0].actual, None);
        assert_eq!(
            serde_json::to_value(&t.outcomes()[0]).unwrap(),
            json!({ "label": "same", "passed": true })
        );
    }
}
