//! Argument schema definitions.
//!
//! An [`ArgumentSchema`] describes one positional parameter of a command:
//! what kind of value it takes, how many values it may bind, whether it is
//! mandatory, and where the value may come from. Schemas are plain values
//! built once at command-registration time and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SchemaError;

/// Kind of value a positional argument accepts.
///
/// # Examples
///
/// ```
/// use command_args_core::ArgumentKind;
///
/// assert_eq!(ArgumentKind::FileHandle.to_string(), "file");
/// assert_ne!(ArgumentKind::Text, ArgumentKind::StructuredPath);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    /// Plain textual content.
    Text,
    /// A file or stream (may be fed from stdin or expanded recursively).
    FileHandle,
    /// A structured, content-addressed path identifier.
    StructuredPath,
}

impl ArgumentKind {
    /// Short lowercase label used in messages and usage output.
    pub fn as_str(self) -> &'static str {
        match self {
            ArgumentKind::Text => "string",
            ArgumentKind::FileHandle => "file",
            ArgumentKind::StructuredPath => "path",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema for one positional argument slot.
///
/// Use the kind-specific factories ([`text`](ArgumentSchema::text),
/// [`file`](ArgumentSchema::file), [`path`](ArgumentSchema::path)) and then
/// chain modifiers. Each modifier consumes the schema and returns a new one,
/// so earlier values are never aliased.
///
/// # Examples
///
/// ```
/// use command_args_core::{ArgumentKind, ArgumentSchema};
///
/// let arg = ArgumentSchema::file("file", true, false, "input file")
///     .enable_stdin()
///     .enable_recursive();
///
/// assert_eq!(arg.kind, ArgumentKind::FileHandle);
/// assert!(arg.required);
/// assert!(!arg.variadic);
/// assert!(arg.supports_stdin);
/// assert!(arg.recursive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgumentSchema {
    /// Name of the argument, unique within a command's signature
    pub name: String,
    /// Kind of value expected
    pub kind: ArgumentKind,
    /// Error if no value is supplied
    pub required: bool,
    /// Can bind an unbounded number of trailing values
    pub variadic: bool,
    /// Can accept stdin as a value
    #[serde(default)]
    pub supports_stdin: bool,
    /// Supports recursive directory expansion (file arguments only)
    #[serde(default)]
    pub recursive: bool,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl ArgumentSchema {
    fn new(
        name: &str,
        kind: ArgumentKind,
        required: bool,
        variadic: bool,
        description: &str,
    ) -> Self {
        debug!(argument = name, %kind, required, variadic, "Declaring argument");
        Self {
            name: name.to_string(),
            kind,
            required,
            variadic,
            supports_stdin: false,
            recursive: false,
            description: description.to_string(),
        }
    }

    /// Creates a text argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_args_core::{ArgumentKind, ArgumentSchema};
    ///
    /// let arg = ArgumentSchema::text("name", false, false, "name");
    /// assert_eq!(arg.kind, ArgumentKind::Text);
    /// assert!(!arg.supports_stdin && !arg.recursive);
    /// ```
    pub fn text(name: &str, required: bool, variadic: bool, description: &str) -> Self {
        Self::new(name, ArgumentKind::Text, required, variadic, description)
    }

    /// Creates a file-handle argument.
    pub fn file(name: &str, required: bool, variadic: bool, description: &str) -> Self {
        Self::new(name, ArgumentKind::FileHandle, required, variadic, description)
    }

    /// Creates a structured-path argument.
    pub fn path(name: &str, required: bool, variadic: bool, description: &str) -> Self {
        Self::new(
            name,
            ArgumentKind::StructuredPath,
            required,
            variadic,
            description,
        )
    }

    /// Allows the value to be read from standard input.
    ///
    /// Legal for every kind. Calling it more than once has no further effect.
    pub fn enable_stdin(mut self) -> Self {
        debug!(argument = %self.name, "Enabling stdin");
        self.supports_stdin = true;
        self
    }

    /// Allows recursive directory expansion of the value.
    ///
    /// # Panics
    ///
    /// Panics unless the schema is a [`FileHandle`](ArgumentKind::FileHandle)
    /// argument. Enabling recursion on any other kind is a bug in the command
    /// definition and must stop registration; use
    /// [`try_enable_recursive`](Self::try_enable_recursive) when the schema
    /// comes from data rather than code.
    ///
    /// ```should_panic
    /// use command_args_core::ArgumentSchema;
    ///
    /// ArgumentSchema::text("name", false, false, "name").enable_recursive();
    /// ```
    pub fn enable_recursive(self) -> Self {
        match self.try_enable_recursive() {
            Ok(schema) => schema,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`enable_recursive`](Self::enable_recursive).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::RecursiveNotFile`] if the schema is not a
    /// file-handle argument. The schema is consumed either way.
    pub fn try_enable_recursive(mut self) -> Result<Self, SchemaError> {
        if self.kind != ArgumentKind::FileHandle {
            warn!(argument = %self.name, kind = %self.kind, "Recursive expansion on non-file argument");
            return Err(SchemaError::RecursiveNotFile {
                name: self.name,
                kind: self.kind,
            });
        }
        debug!(argument = %self.name, "Enabling recursive expansion");
        self.recursive = true;
        Ok(self)
    }

    /// Renders the argument as a usage token, e.g. `<file>...` or `[name]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_args_core::ArgumentSchema;
    ///
    /// assert_eq!(ArgumentSchema::file("file", true, true, "").usage_token(), "<file>...");
    /// assert_eq!(ArgumentSchema::text("name", false, false, "").usage_token(), "[name]");
    /// ```
    pub fn usage_token(&self) -> String {
        let token = if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        };
        if self.variadic {
            format!("{token}...")
        } else {
            token
        }
    }
}

/// Shorthand for [`ArgumentSchema::text`].
pub fn string_arg(name: &str, required: bool, variadic: bool, description: &str) -> ArgumentSchema {
    ArgumentSchema::text(name, required, variadic, description)
}

/// Shorthand for [`ArgumentSchema::file`].
pub fn file_arg(name: &str, required: bool, variadic: bool, description: &str) -> ArgumentSchema {
    ArgumentSchema::file(name, required, variadic, description)
}

/// Shorthand for [`ArgumentSchema::path`].
pub fn path_arg(name: &str, required: bool, variadic: bool, description: &str) -> ArgumentSchema {
    ArgumentSchema::path(name, required, variadic, description)
}
