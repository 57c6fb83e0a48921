//! # Message Catalog
//!
//! Canned error-message text keyed by short symbolic names, so that test
//! fixtures never spell out the wording the renderer produces.
//!
//! The catalog is built once on first access and is read-only for the
//! rest of the process.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

/// Message for a required property that is absent.
pub const MISSING: &str = "is missing and it is required";

/// Prefix of every `pattern` failure message.
pub(crate) const PATTERN_PREFIX: &str = "does not match the regex pattern ";

const UUID_PATTERN: &str = "^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
const V4ADDR_PATTERN: &str = concat!(
    r"^(?:(?:\d|[1-9]\d|1\d\d|2[0-4]\d|25[0-5])\.){3}",
    r"(?:\d|[1-9]\d|1\d\d|2[0-4]\d|25[0-5])$",
);
const NETNAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_\./-]{1,255}$";

/// Format a type-mismatch message: a `found` value where `required` was expected.
///
/// The article is always `a`, matching the wording tests already depend on
/// (`"string value found, but a integer is required"`).
pub fn type_msg(found: &str, required: &str) -> String {
    format!("{found} value found, but a {required} is required")
}

pub(crate) fn pattern_msg(pattern: &str) -> String {
    format!("{PATTERN_PREFIX}{pattern}")
}

/// Fixed mapping from symbolic key to message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    entries: BTreeMap<&'static str, String>,
}

impl MessageCatalog {
    fn build() -> Self {
        let entries = BTreeMap::from([
            ("missing", MISSING.to_string()),
            ("objStr", type_msg("object", "string")),
            ("strArr", type_msg("string", "array")),
            ("strInt", type_msg("string", "integer")),
            ("strObj", type_msg("string", "object")),
            ("uuid", pattern_msg(UUID_PATTERN)),
            ("v4addr", pattern_msg(V4ADDR_PATTERN)),
            ("netname", pattern_msg(NETNAME_PATTERN)),
        ]);
        Self { entries }
    }

    /// Look up a message by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn missing(&self) -> &str {
        self.entry("missing")
    }

    pub fn obj_str(&self) -> &str {
        self.entry("objStr")
    }

    pub fn str_arr(&self) -> &str {
        self.entry("strArr")
    }

    pub fn str_int(&self) -> &str {
        self.entry("strInt")
    }

    pub fn str_obj(&self) -> &str {
        self.entry("strObj")
    }

    pub fn uuid(&self) -> &str {
        self.entry("uuid")
    }

    pub fn v4addr(&self) -> &str {
        self.entry("v4addr")
    }

    pub fn netname(&self) -> &str {
        self.entry("netname")
    }

    // Only called with keys inserted by `build`.
    fn entry(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }
}

/// The process-wide message catalog.
pub fn messages() -> &'static MessageCatalog {
    static CATALOG: OnceLock<MessageCatalog> = OnceLock::new();
    CATALOG.get_or_init(MessageCatalog::build)
}
