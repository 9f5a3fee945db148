use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ArgumentError, Result};
use crate::{ArgumentSchema, ArgumentValue, validate_signature};

/// Ordered positional-argument signature of one command.
///
/// Signatures are built in code at registration time, or loaded from a JSON
/// or YAML file so help and validation tooling can inspect them.
///
/// # Examples
///
/// ```
/// use command_args_core::*;
///
/// let sig = Signature::new("add")
///     .with_description("Add files to the store")
///     .with_arg(file_arg("file", true, true, "files to add").enable_stdin().enable_recursive());
///
/// assert_eq!(sig.usage(), "add <file>...");
/// assert!(validate_signature(&sig).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Command name.
    pub command: String,
    /// Optional command description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Positional arguments, in order.
    #[serde(default)]
    pub arguments: Vec<ArgumentSchema>,
}

impl Signature {
    /// Creates an empty signature for `command`.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Appends a positional argument.
    pub fn with_arg(mut self, arg: ArgumentSchema) -> Self {
        self.arguments.push(arg);
        self
    }

    /// Finds an argument by name.
    pub fn find_argument(&self, name: &str) -> Option<&ArgumentSchema> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Renders a one-line usage string, e.g. `cat <path>...`.
    pub fn usage(&self) -> String {
        std::iter::once(self.command.clone())
            .chain(self.arguments.iter().map(ArgumentSchema::usage_token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Checks that every required argument received a value.
    ///
    /// An argument counts as supplied when a bound value with the same name
    /// is non-empty. A stdin-capable argument is also satisfied when
    /// `stdin_available` is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::MissingRequired`] for the first required
    /// argument left unsatisfied.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_args_core::*;
    ///
    /// let sig = Signature::new("cat").with_arg(path_arg("ref", true, true, "objects"));
    /// let err = sig.check_required(&[], false).unwrap_err();
    /// assert_eq!(err.to_string(), "argument 'ref' is required");
    /// ```
    pub fn check_required(
        &self,
        supplied: &[ArgumentValue<'_>],
        stdin_available: bool,
    ) -> std::result::Result<(), ArgumentError> {
        for arg in self.arguments.iter().filter(|a| a.required) {
            let bound = supplied
                .iter()
                .any(|v| v.schema().name == arg.name && v.is_found());
            if bound || (arg.supports_stdin && stdin_available) {
                continue;
            }
            return Err(ArgumentError::MissingRequired {
                name: arg.name.clone(),
            });
        }
        Ok(())
    }

    /// Parses and validates a signature from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError`](crate::SignatureError::JsonError) if parsing
    /// fails, or [`Invalid`](crate::SignatureError::Invalid) if the
    /// signature breaks an invariant.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let signature: Self = serde_json::from_str(json)?;
        signature.validated()
    }

    /// Loads and validates a signature file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else
    /// as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SignatureError::IoError) if the file
    /// cannot be read, a JSON or YAML error if parsing fails, or
    /// [`Invalid`](crate::SignatureError::Invalid) if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(std::fs::File::open(path)?);
        let signature: Self = if is_yaml(path) {
            serde_yaml::from_reader(reader)?
        } else {
            serde_json::from_reader(reader)?
        };
        debug!(
            path = %path.display(),
            command = %signature.command,
            arguments = signature.arguments.len(),
            "Loaded signature"
        );
        signature.validated()
    }

    /// Saves the signature, choosing the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SignatureError::IoError) if the file
    /// cannot be written, or a serialization error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(std::fs::File::create(path)?);
        if is_yaml(path) {
            serde_yaml::to_writer(writer, self)?;
        } else {
            serde_json::to_writer_pretty(writer, self)?;
        }
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        if let Some(err) = validate_signature(&self).into_iter().next() {
            return Err(err.into());
        }
        Ok(self)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
