//! # TAP Reporter
//!
//! Renders assertion outcomes as TAP version 13. Output is buffered so
//! the sink itself never fails; the caller decides where to write it.
//!
//! ```text
//! TAP version 13
//! ok 1 - network: result
//! not ok 2 - nic: result
//!   ---
//!   actual: {"errors":[...],"valid":false}
//!   expected: {"errors":[],"valid":true}
//!   ...
//! 1..2
//! # pass 1
//! # fail 1
//! ```

use serde_json::Value;

use crate::assert::Assert;

/// Assertion sink producing a TAP stream.
#[derive(Debug, Clone)]
pub struct TapReporter {
    out: String,
    count: usize,
    failed: usize,
    ended: bool,
}

impl Default for TapReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TapReporter {
    pub fn new() -> Self {
        Self {
            out: String::from("TAP version 13\n"),
            count: 0,
            failed: 0,
            ended: false,
        }
    }

    /// The report so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    pub fn passed(&self) -> usize {
        self.count - self.failed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// True when the plan has been written and nothing failed.
    pub fn success(&self) -> bool {
        self.ended && self.failed == 0
    }

    fn line(&mut self, passed: bool, label: &str) {
        self.count += 1;
        if !passed {
            self.failed += 1;
        }
        let status = if passed { "ok" } else { "not ok" };
        self.out
            .push_str(&format!("{status} {} - {}\n", self.count, label.replace('\n', " ")));
    }
}

impl Assert for TapReporter {
    fn ok(&mut self, condition: bool, label: &str) {
        self.line(condition, label);
    }

    fn deep_equal(&mut self, actual: &Value, expected: &Value, label: &str) {
        let passed = actual == expected;
        self.line(passed, label);
        if !passed {
            self.out.push_str("  ---\n");
            self.out.push_str(&format!("  actual: {actual}\n"));
            self.out.push_str(&format!("  expected: {expected}\n"));
            self.out.push_str("  ...\n");
        }
    }

    fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        self.out.push_str(&format!("1..{}\n", self.count));
        self.out.push_str(&format!("# pass {}\n", self.passed()));
        self.out.push_str(&format!("# fail {}\n", self.failed));
    }
}
