//! Error types for loading and building YAML objects

use thiserror::Error;

/// Message used when no usable source was handed to the builder.
pub const NO_SOURCE_MESSAGE: &str = "No file specified as YAML source";

/// Message used when a source path cannot be read.
pub const INVALID_SOURCE_MESSAGE: &str = "Invalid YAML source";

/// Main error type for yaml2object operations.
///
/// Only "no data to work with" conditions are errors. Malformed but present
/// data (unknown namespace, invalid keys, reserved words) is reported through
/// the [`WarningSink`](crate::WarningSink) instead.
#[derive(Error, Debug)]
pub enum Yaml2ObjectError {
    /// No source was given, or the given path could not be read
    #[error("{0}")]
    MissingSource(String),

    /// The source file is not valid YAML
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document uses a tag outside the standard YAML schema
    #[error("Unsupported YAML tag: {0}")]
    UnsupportedTag(String),

    /// Two keys of one mapping share the same text once converted to strings
    /// (`1` and `"1"`, `true` and `"true"`)
    #[error("Duplicate mapping key: {0}")]
    DuplicateKey(String),
}

impl Yaml2ObjectError {
    /// Source missing from the build request.
    pub fn no_source() -> Self {
        Yaml2ObjectError::MissingSource(NO_SOURCE_MESSAGE.to_string())
    }

    /// Source path that could not be opened.
    pub fn invalid_source() -> Self {
        Yaml2ObjectError::MissingSource(INVALID_SOURCE_MESSAGE.to_string())
    }

    /// Check whether this is a missing-source error
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Yaml2ObjectError::MissingSource(_))
    }
}

/// Result type alias for yaml2object operations
pub type Result<T> = std::result::Result<T, Yaml2ObjectError>;
