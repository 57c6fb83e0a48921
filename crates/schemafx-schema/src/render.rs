//! # Error Rendering
//!
//! Converts `jsonschema` errors into [`ValidationError`] records.
//!
//! The engine locates failures with JSON Pointers (`/nic/mac`, `/ips/1`).
//! Fixtures name them with dotted paths instead (`nic.mac`, `ips[1]`), so
//! the pointer is walked against the instance: a segment that indexes an
//! array renders as `[n]`, anything else as `.name`. For `required`
//! failures the path is extended with the missing member, since the
//! engine reports those at the enclosing object.

use jsonschema::error::{TypeKind, ValidationErrorKind};
use serde_json::Value;

use crate::messages::{pattern_msg, type_msg, MISSING};
use crate::model::ValidationError;

const NOT_DEFINED: &str =
    "is not defined in the schema and the schema does not allow additional properties";

/// Render one engine error against the root instance that was validated.
///
/// Returns more than one record only for `additionalProperties`, which the
/// engine reports once per object but fixtures list once per member.
pub fn render_error(
    root: &Value,
    error: &jsonschema::ValidationError<'_>,
) -> Vec<ValidationError> {
    let property = property_path(root, &error.instance_path.to_string());

    match &error.kind {
        ValidationErrorKind::Required { property: missing } => {
            let name = match missing {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            vec![ValidationError::new(join_property(&property, &name), MISSING)]
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => unexpected
            .iter()
            .map(|name| {
                ValidationError::new(
                    join_property(&property, name),
                    format!("The property {name} {NOT_DEFINED}"),
                )
            })
            .collect(),
        kind => vec![ValidationError::new(property, message_for(kind, error))],
    }
}

fn message_for(kind: &ValidationErrorKind, error: &jsonschema::ValidationError<'_>) -> String {
    match kind {
        ValidationErrorKind::Type { kind } => {
            let required = match kind {
                TypeKind::Single(t) => t.to_string(),
                TypeKind::Multiple(types) => types
                    .into_iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            type_msg(found_type_name(&error.instance), &required)
        }
        ValidationErrorKind::Pattern { pattern } => pattern_msg(pattern),
        ValidationErrorKind::Enum { options } => {
            let values = match options {
                Value::Array(items) => items.iter().map(plain).collect::<Vec<_>>().join(", "),
                other => plain(other),
            };
            format!("does not have a value in the enumeration {values}")
        }
        ValidationErrorKind::MinLength { limit } => {
            format!("must be at least {limit} characters long")
        }
        ValidationErrorKind::MaxLength { limit } => {
            format!("must be at most {limit} characters long")
        }
        ValidationErrorKind::Minimum { limit } => format!("must have a minimum value of {limit}"),
        ValidationErrorKind::Maximum { limit } => format!("must have a maximum value of {limit}"),
        ValidationErrorKind::MinItems { limit } => {
            format!("There must be a minimum of {limit} in the array")
        }
        ValidationErrorKind::MaxItems { limit } => {
            format!("There must be a maximum of {limit} in the array")
        }
        _ => error.to_string(),
    }
}

/// Strings render bare, everything else as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Name of a value's JSON type.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Name of a value's type as it appears before "value found".
///
/// Arrays read as `object` here, which is the wording existing `objStr`
/// fixtures were written against.
pub fn found_type_name(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "object",
        other => json_type_name(other),
    }
}

/// Render a JSON Pointer into `root` as a dotted property path.
pub fn property_path(root: &Value, pointer: &str) -> String {
    let mut path = String::new();
    let mut current = Some(root);

    for segment in pointer.split('/').skip(1).map(unescape_segment) {
        match current {
            Some(Value::Array(items)) => match segment.parse::<usize>() {
                Ok(index) => {
                    path.push_str(&format!("[{index}]"));
                    current = items.get(index);
                }
                Err(_) => {
                    path = join_property(&path, &segment);
                    current = None;
                }
            },
            Some(Value::Object(map)) => {
                current = map.get(&segment);
                path = join_property(&path, &segment);
            }
            _ => {
                path = join_property(&path, &segment);
                current = None;
            }
        }
    }

    path
}

fn join_property(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}.{name}")
    }
}

fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
