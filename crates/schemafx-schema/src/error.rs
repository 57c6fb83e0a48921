//! Error type for the schema seam.

use thiserror::Error;

/// Error raised by the validator or while loading schemas.
///
/// Test helpers propagate these unchanged; they are never reported as
/// assertion failures.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema document could not be compiled into a validator.
    #[error("schema compile error: {reason}")]
    Compile {
        /// Message from the underlying engine.
        reason: String,
    },

    /// A schema file could not be parsed or had the wrong shape.
    #[error("schema load error for '{path}': {reason}")]
    Load {
        /// Path of the offending file.
        path: String,
        /// Reason the file was rejected.
        reason: String,
    },

    /// IO error reading a schema file or directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded as JSON for comparison.
    #[error("json encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_display() {
        let err = SchemaError::Compile {
            reason: "\"nope\" is not valid under any of the schemas".to_string(),
        };
        assert!(err.to_string().starts_with("schema compile error:"));
    }

    #[test]
    fn load_error_names_path() {
        let err = SchemaError::Load {
            path: "schemas/network.schema.json".to_string(),
            reason: "invalid JSON".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("schemas/network.schema.json"));
        assert!(msg.contains("invalid JSON"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SchemaError = io.into();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
