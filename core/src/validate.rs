//! Signature validation.
//!
//! Checks the invariants a command's argument list must satisfy before it is
//! registered: names are present and unique, at most one variadic argument
//! appears and only in last position, required arguments precede optional
//! ones, and only file arguments are recursive.
//!
//! # Examples
//!
//! ```
//! use command_args_core::*;
//!
//! let sig = Signature::new("get").with_arg(path_arg("ref", true, false, "object"));
//! assert!(validate_signature(&sig).is_empty());
//!
//! // Invalid: variadic argument followed by another argument
//! let bad = Signature::new("get")
//!     .with_arg(path_arg("refs", true, true, "objects"))
//!     .with_arg(string_arg("output", false, false, "output"));
//! assert_eq!(
//!     validate_signature(&bad),
//!     vec![SchemaError::VariadicNotLast("refs".to_string())]
//! );
//! ```

use std::collections::HashSet;

use crate::{ArgumentKind, SchemaError, Signature};

/// Validates a command signature.
///
/// Stops at the first problem found, so the result holds at most one error.
pub fn validate_signature(signature: &Signature) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if signature.command.trim().is_empty() {
        errors.push(SchemaError::EmptyCommandName);
        return errors;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut seen_optional = false;
    let last = signature.arguments.len().saturating_sub(1);

    for (position, arg) in signature.arguments.iter().enumerate() {
        let name = arg.name.trim();
        if name.is_empty() {
            errors.push(SchemaError::EmptyArgumentName(position));
            return errors;
        }

        if !seen.insert(name) {
            errors.push(SchemaError::DuplicateArgument(name.to_string()));
            return errors;
        }

        if arg.recursive && arg.kind != ArgumentKind::FileHandle {
            errors.push(SchemaError::RecursiveNotFile {
                name: name.to_string(),
                kind: arg.kind,
            });
            return errors;
        }

        if arg.variadic && position != last {
            errors.push(SchemaError::VariadicNotLast(name.to_string()));
            return errors;
        }

        if arg.required && seen_optional {
            errors.push(SchemaError::RequiredAfterOptional(name.to_string()));
            return errors;
        }
        seen_optional |= !arg.required;
    }

    errors
}
