//! Error types for literal conversion.

use crate::ast::Path;
use thiserror::Error;

/// Errors that can occur while reading or converting a literal expression.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A node (root or nested) is not one of the supported literal kinds.
    #[error("Invalid value is included: unsupported `{kind}` at {path}")]
    InvalidValue { path: Path, kind: String },

    /// An object expression breaks one of the object rules.
    #[error("Invalid syntax is included: {violation} at {path}")]
    InvalidSyntax {
        path: Path,
        violation: SyntaxViolation,
    },

    /// The serialized AST handed to the reader was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// The rule an object expression broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxViolation {
    /// Spread element, method, getter or setter instead of `key: value`.
    #[error("object entry `{kind}` is not a plain key/value property")]
    NonPlainEntry { kind: String },

    #[error("computed property key")]
    ComputedKey,

    /// A static key that is neither a name, a string nor a number.
    #[error("property key `{kind}` is not an identifier, string or number")]
    UnsupportedKey { kind: String },

    /// Numeric key outside the exactly-representable integer range, or not an
    /// integer at all.
    #[error("numeric property key {key} is not a safe integer")]
    UnsafeIntegerKey { key: f64 },
}

/// The two conversion failure kinds callers usually branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidValue,
    InvalidSyntax,
}

impl ErrorKind {
    /// Fixed message for the kind, independent of where it happened.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidValue => "Invalid value is included.",
            ErrorKind::InvalidSyntax => "Invalid syntax is included.",
        }
    }
}

impl ConvertError {
    /// Conversion kind of this error; `None` for JSON input errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ConvertError::InvalidValue { .. } => Some(ErrorKind::InvalidValue),
            ConvertError::InvalidSyntax { .. } => Some(ErrorKind::InvalidSyntax),
            ConvertError::JsonParse(_) => None,
        }
    }

    /// Where in the document the conversion failed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConvertError::InvalidValue { path, .. } | ConvertError::InvalidSyntax { path, .. } => {
                Some(path)
            }
            ConvertError::JsonParse(_) => None,
        }
    }
}

/// Convenience alias used throughout literal-json.
pub type Result<T> = std::result::Result<T, ConvertError>;
