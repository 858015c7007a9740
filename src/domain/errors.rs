// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the parameter-file reader.
//!
//! This module defines the error types that can occur when parsing a
//! parameter file or querying the resulting store. All errors use `thiserror`
//! for proper error handling and conversion.

use crate::domain::{ParamType, TypedKey};
use thiserror::Error;

/// The main error type for parameter-file operations.
///
/// This enum represents all possible errors that can occur when parsing a
/// parameter file, validating required parameters, or accessing typed values.
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// Every failure is fatal at the call site: there is no retry and no silent
/// defaulting beyond the lenient scalar conversions performed during parsing.
///
/// # Examples
///
/// ```
/// use paramfile::domain::errors::ParamError;
///
/// fn lookup() -> Result<f64, ParamError> {
///     Err(ParamError::NotFound {
///         key: "box_size".to_string(),
///         hint: "; add it to the parameter file as a numeric type",
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParamError {
    /// The parameter file declared a type outside the supported set.
    #[error(
        "unsupported parameter type '{type_token}'; supported types are \
         string, int, double, bool, vector<string>, vector<double>, \
         vector<int>, and vector<bool>"
    )]
    UnsupportedType {
        /// The unrecognized type token as written in the file
        type_token: String,
    },

    /// A non-comment line did not have the `<type> <key> = <value>` shape.
    #[error("malformed declaration on line {line}: expected '<type> <key> = <value>'")]
    MalformedLine {
        /// One-based line number of the offending line
        line: usize,
    },

    /// Construction-level failure: a line could not be assigned, so the
    /// store was not fully populated.
    #[error("all parameters have not been assigned")]
    Incomplete {
        /// The line-level error that aborted parsing
        #[source]
        source: Box<ParamError>,
    },

    /// One or more required parameters were absent from the store.
    #[error("minimum parameters not found ({} missing)", .missing.len())]
    MissingRequired {
        /// Every required `(type, key)` pair that was not present
        missing: Vec<TypedKey>,
    },

    /// The key exists, but under a type the calling accessor cannot coerce.
    #[error("parameter '{key}' is declared as {actual}, not {requested} type; use {suggested}() instead")]
    TypeMismatch {
        /// The key that was queried
        key: String,
        /// The type the parameter is actually declared as
        actual: ParamType,
        /// Description of the type family the accessor wanted
        requested: &'static str,
        /// Name of the accessor that matches the declared type
        suggested: &'static str,
    },

    /// The key does not exist in any type bucket.
    #[error("parameter '{key}' does not exist in the parameter file{hint}")]
    NotFound {
        /// The key that was queried
        key: String,
        /// Accessor-specific advice appended to the message (may be empty)
        hint: &'static str,
    },

    /// The OS configuration directory could not be determined.
    #[error("failed to determine the configuration directory for '{app_name}'")]
    NoConfigDir {
        /// The application name the lookup was performed for
        app_name: String,
    },

    /// An I/O error occurred while reading the parameter file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for parameter-file operations.
pub type Result<T> = std::result::Result<T, ParamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_error() {
        let error = ParamError::UnsupportedType {
            type_token: "float".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("unsupported parameter type 'float'"));
        assert!(message.contains("vector<bool>"));
    }

    #[test]
    fn test_malformed_line_error() {
        let error = ParamError::MalformedLine { line: 7 };
        assert_eq!(
            error.to_string(),
            "malformed declaration on line 7: expected '<type> <key> = <value>'"
        );
    }

    #[test]
    fn test_incomplete_error_carries_source() {
        let error = ParamError::Incomplete {
            source: Box::new(ParamError::MalformedLine { line: 2 }),
        };
        assert_eq!(error.to_string(), "all parameters have not been assigned");

        let source = std::error::Error::source(&error).expect("source attached");
        assert!(source.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_required_error() {
        let error = ParamError::MissingRequired {
            missing: vec![
                TypedKey::new(ParamType::Int, "num_bins"),
                TypedKey::new(ParamType::Double, "box_size"),
            ],
        };
        assert_eq!(error.to_string(), "minimum parameters not found (2 missing)");
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ParamError::TypeMismatch {
            key: "catalog".to_string(),
            actual: ParamType::Str,
            requested: "a numeric",
            suggested: "get_string",
        };
        assert_eq!(
            error.to_string(),
            "parameter 'catalog' is declared as string, not a numeric type; use get_string() instead"
        );
    }

    #[test]
    fn test_not_found_error_with_hint() {
        let error = ParamError::NotFound {
            key: "box_size".to_string(),
            hint: "; add it to the parameter file as a numeric type",
        };
        assert_eq!(
            error.to_string(),
            "parameter 'box_size' does not exist in the parameter file; \
             add it to the parameter file as a numeric type"
        );
    }

    #[test]
    fn test_not_found_error_without_hint() {
        let error = ParamError::NotFound {
            key: "verbose".to_string(),
            hint: "",
        };
        assert_eq!(
            error.to_string(),
            "parameter 'verbose' does not exist in the parameter file"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ParamError::from(io_error);
        assert!(matches!(error, ParamError::Io(_)));
    }
}
