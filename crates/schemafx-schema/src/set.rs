//! # Schema Sets
//!
//! A named collection of schema documents, loaded either from a directory
//! (one schema per file) or from a bundle file whose top-level object maps
//! names to schemas.
//!
//! Directory entries are keyed by file name with the schema suffix
//! removed: `network.schema.json`, `network.json` and `network.yaml` all
//! load as `network`.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;

/// Suffixes stripped from file names, longest first.
const SCHEMA_SUFFIXES: &[&str] = &[
    ".schema.json",
    ".schema.yaml",
    ".schema.yml",
    ".json",
    ".yaml",
    ".yml",
];

/// Ordered map from schema name to schema document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaSet {
    schemas: BTreeMap<String, Value>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every JSON or YAML file directly under `dir`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Load` if a file does not parse or two files
    /// map to the same name, and `SchemaError::Io` on read failures.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| SchemaError::Load {
            path: dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        let mut set = Self::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(name) = schema_name(file_name) else {
                continue;
            };

            let value = read_document(&path)?;
            if set.schemas.contains_key(name) {
                return Err(SchemaError::Load {
                    path: path.display().to_string(),
                    reason: format!("duplicate schema name '{name}'"),
                });
            }
            tracing::debug!(schema = name, path = %path.display(), "loaded schema");
            set.schemas.insert(name.to_string(), value);
        }

        Ok(set)
    }

    /// Load a bundle file: a JSON or YAML object mapping names to schemas.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let value = read_document(path)?;
        Self::from_bundle(value).map_err(|e| match e {
            SchemaError::Load { reason, .. } => SchemaError::Load {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Build a set from a JSON object mapping names to schemas.
    pub fn from_bundle(bundle: Value) -> Result<Self, SchemaError> {
        match bundle {
            Value::Object(map) => Ok(Self {
                schemas: map.into_iter().collect(),
            }),
            other => Err(SchemaError::Load {
                path: "<bundle>".to_string(),
                reason: format!(
                    "expected an object mapping names to schemas, found {}",
                    crate::render::json_type_name(&other)
                ),
            }),
        }
    }

    /// Add or replace a schema, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, schema: Value) -> Option<Value> {
        self.schemas.insert(name.into(), schema)
    }

    /// Merge another set into this one.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Load` if a name is already present; `self` is
    /// left unchanged in that case.
    pub fn merge(&mut self, other: SchemaSet) -> Result<(), SchemaError> {
        if let Some(name) = other.schemas.keys().find(|n| self.schemas.contains_key(*n)) {
            return Err(SchemaError::Load {
                path: "<merge>".to_string(),
                reason: format!("duplicate schema name '{name}'"),
            });
        }
        self.schemas.extend(other.schemas);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Schema names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.schemas.iter()
    }
}

impl<'a> IntoIterator for &'a SchemaSet {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.schemas.iter()
    }
}

fn schema_name(file_name: &str) -> Option<&str> {
    SCHEMA_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .filter(|name| !name.is_empty())
}

/// Parse a JSON or YAML file, choosing the format by extension.
pub fn read_document(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::Load {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| SchemaError::Load {
            path: path.display().to_string(),
            reason: format!("invalid YAML: {e}"),
        }),
        _ => serde_json::from_str(&content).map_err(|e| SchemaError::Load {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}
