//! Error types for argument schemas and argument access.
//!
//! Two classes are kept apart: [`SchemaError`] marks a mistake in a command's
//! own definition, while [`ArgumentError`] is a recoverable failure reported
//! to the code reading argument values.

use thiserror::Error;

use crate::ArgumentKind;
use crate::path::PathError;

/// Invariant violations in an argument signature.
///
/// These describe bugs in how a command declares its arguments, not bad
/// user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Recursive expansion requested on a non-file argument.
    #[error("only file arguments can enable recursive (argument '{name}' is {kind})")]
    RecursiveNotFile {
        /// Argument name.
        name: String,
        /// Declared kind.
        kind: ArgumentKind,
    },
    /// Command name is empty or whitespace-only.
    #[error("signature command cannot be empty")]
    EmptyCommandName,
    /// Argument name is empty or whitespace-only.
    #[error("argument name cannot be empty (position {0})")]
    EmptyArgumentName(usize),
    /// Two arguments in the same signature share a name.
    #[error("duplicate argument in signature: {0}")]
    DuplicateArgument(String),
    /// A variadic argument is followed by another argument.
    #[error("variadic argument must be last: {0}")]
    VariadicNotLast(String),
    /// A required argument follows an optional one.
    #[error("required argument follows optional argument: {0}")]
    RequiredAfterOptional(String),
}

/// Errors returned when reading an argument value.
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// The accessor used does not match the argument's declared kind.
    #[error("cannot read {actual} argument '{name}' as {expected}")]
    TypeMismatch {
        /// Argument name.
        name: String,
        /// Kind the caller asked for.
        expected: ArgumentKind,
        /// Kind the schema declares.
        actual: ArgumentKind,
    },
    /// The raw text is not a valid structured path.
    #[error(transparent)]
    Path(#[from] PathError),
    /// A required argument received no value.
    #[error("argument '{name}' is required")]
    MissingRequired {
        /// Argument name.
        name: String,
    },
}

impl ArgumentError {
    /// Returns `true` for [`TypeMismatch`](Self::TypeMismatch).
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ArgumentError::TypeMismatch { .. })
    }
}

/// Errors from loading or saving a [`Signature`](crate::Signature).
#[derive(Debug, Error)]
pub enum SignatureError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The loaded signature violates a schema invariant.
    #[error("invalid signature: {0}")]
    Invalid(#[from] SchemaError),
}

/// Convenience alias for results with [`SignatureError`].
pub type Result<T> = std::result::Result<T, SignatureError>;
