//! Argument schemas and typed argument access for command definitions.
//!
//! This crate describes the positional parameters a command accepts and
//! gives command handlers a checked way to read the values bound to them:
//!
//! - [`ArgumentSchema`] — one parameter slot: its [`ArgumentKind`],
//!   requiredness, variadic-ness, and input-source capabilities (stdin,
//!   recursive directory expansion).
//! - [`ArgumentValue`] — a parsed value bound to a schema, read through
//!   kind-checked accessors or converted into a [`TypedArgument`].
//! - [`StructuredPath`] — the content-addressed path type the structured-path
//!   accessor parses into.
//! - [`Signature`] — an ordered list of schemas for one command, with
//!   [`validate_signature`] and JSON/YAML loading.
//!
//! Mistakes in a command's own definition are [`SchemaError`]s (and
//! [`ArgumentSchema::enable_recursive`] panics on one), while failures while
//! reading values are recoverable [`ArgumentError`]s.
//!
//! # Example
//!
//! ```
//! use command_args_core::*;
//!
//! let file = file_arg("file", true, false, "input file")
//!     .enable_stdin()
//!     .enable_recursive();
//! let name = string_arg("name", false, false, "name");
//!
//! let value = ArgumentValue::new("hello", &name);
//! assert_eq!(value.as_text().unwrap(), ("hello", true));
//! assert!(value.as_file_handle().unwrap_err().is_type_mismatch());
//!
//! let sig = Signature::new("add").with_arg(file);
//! assert!(validate_signature(&sig).is_empty());
//! ```

mod error;
mod path;
mod signature;
mod types;
mod validate;
mod value;

pub use error::{ArgumentError, SchemaError, SignatureError};
pub use path::{Namespace, PathError, StructuredPath};
pub use signature::Signature;
pub use types::*;
pub use validate::validate_signature;
pub use value::{AccessError, ArgumentValue, TypedArgument};
