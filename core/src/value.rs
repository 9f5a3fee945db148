//! Argument values bound to a schema.
//!
//! An [`ArgumentValue`] pairs the raw payload produced by a command-line
//! parser with the [`ArgumentSchema`] it was bound from. Accessors check the
//! declared kind before converting, so reading a value with the wrong
//! accessor always yields [`ArgumentError::TypeMismatch`].

use crate::error::ArgumentError;
use crate::path::{PathError, StructuredPath};
use crate::{ArgumentKind, ArgumentSchema};

/// A realized argument value for one invocation.
///
/// Accessors return `(value, found)`, where `found` is `true` iff the raw
/// payload is non-empty.
///
/// # Examples
///
/// ```
/// use command_args_core::{ArgumentSchema, ArgumentValue};
///
/// let schema = ArgumentSchema::text("name", false, false, "name");
/// let value = ArgumentValue::new("hello", &schema);
///
/// assert_eq!(value.as_text().unwrap(), ("hello", true));
/// assert!(value.as_file_handle().unwrap_err().is_type_mismatch());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentValue<'a> {
    raw: String,
    schema: &'a ArgumentSchema,
}

impl<'a> ArgumentValue<'a> {
    /// Binds a raw payload to its schema.
    pub fn new(raw: impl Into<String>, schema: &'a ArgumentSchema) -> Self {
        Self {
            raw: raw.into(),
            schema,
        }
    }

    /// Schema this value was bound from.
    pub fn schema(&self) -> &'a ArgumentSchema {
        self.schema
    }

    /// Raw payload as supplied by the parser.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the raw payload is non-empty.
    pub fn is_found(&self) -> bool {
        !self.raw.is_empty()
    }

    fn expect_kind(&self, expected: ArgumentKind) -> Result<(), ArgumentError> {
        if self.schema.kind == expected {
            Ok(())
        } else {
            Err(ArgumentError::TypeMismatch {
                name: self.schema.name.clone(),
                expected,
                actual: self.schema.kind,
            })
        }
    }

    /// Reads a text argument.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::TypeMismatch`] unless the schema is
    /// [`ArgumentKind::Text`].
    pub fn as_text(&self) -> Result<(&str, bool), ArgumentError> {
        self.expect_kind(ArgumentKind::Text)?;
        Ok((&self.raw, self.is_found()))
    }

    /// Reads a file-handle argument.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::TypeMismatch`] unless the schema is
    /// [`ArgumentKind::FileHandle`].
    pub fn as_file_handle(&self) -> Result<(&str, bool), ArgumentError> {
        self.expect_kind(ArgumentKind::FileHandle)?;
        Ok((&self.raw, self.is_found()))
    }

    /// Reads a structured-path argument using [`StructuredPath::parse`].
    ///
    /// An empty payload yields the empty path with `found == false`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::TypeMismatch`] unless the schema is
    /// [`ArgumentKind::StructuredPath`], or [`ArgumentError::Path`] carrying
    /// the parser's error unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_args_core::{ArgumentError, ArgumentSchema, ArgumentValue, PathError};
    ///
    /// let schema = ArgumentSchema::path("ref", true, false, "object");
    ///
    /// let (path, found) = ArgumentValue::new("/ipns/example.org", &schema)
    ///     .as_structured_path()
    ///     .unwrap();
    /// assert!(found);
    /// assert_eq!(path.root(), "example.org");
    ///
    /// let err = ArgumentValue::new("/bogus/x", &schema)
    ///     .as_structured_path()
    ///     .unwrap_err();
    /// assert!(matches!(err, ArgumentError::Path(PathError::UnknownNamespace(_))));
    /// ```
    pub fn as_structured_path(&self) -> Result<(StructuredPath, bool), ArgumentError> {
        Ok(self.as_structured_path_with(StructuredPath::parse)?)
    }

    /// Reads a structured-path argument with a caller-supplied parser.
    ///
    /// The parser is not invoked for an empty payload; `P::default()` is
    /// returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Access`] on a kind mismatch, or
    /// [`AccessError::Parse`] with the parser's own error.
    pub fn as_structured_path_with<P, E, F>(&self, parse: F) -> Result<(P, bool), AccessError<E>>
    where
        P: Default,
        F: FnOnce(&str) -> Result<P, E>,
    {
        self.expect_kind(ArgumentKind::StructuredPath)
            .map_err(AccessError::Access)?;
        if !self.is_found() {
            return Ok((P::default(), false));
        }
        let path = parse(&self.raw).map_err(AccessError::Parse)?;
        Ok((path, true))
    }

    /// Converts the value into the variant matching its declared kind.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Path`] if a structured-path payload fails to
    /// parse.
    pub fn typed(&self) -> Result<TypedArgument, ArgumentError> {
        Ok(match self.schema.kind {
            ArgumentKind::Text => TypedArgument::Text(self.raw.clone()),
            ArgumentKind::FileHandle => TypedArgument::FileHandle(self.raw.clone()),
            ArgumentKind::StructuredPath => {
                let (path, _) = self.as_structured_path()?;
                TypedArgument::StructuredPath(path)
            }
        })
    }
}

/// Error from [`ArgumentValue::as_structured_path_with`].
///
/// Keeps the caller's parser error type intact.
#[derive(Debug, thiserror::Error)]
pub enum AccessError<E> {
    /// Kind mismatch.
    #[error(transparent)]
    Access(ArgumentError),
    /// The supplied parser rejected the payload.
    #[error("{0}")]
    Parse(E),
}

impl From<AccessError<PathError>> for ArgumentError {
    fn from(err: AccessError<PathError>) -> Self {
        match err {
            AccessError::Access(err) => err,
            AccessError::Parse(err) => ArgumentError::Path(err),
        }
    }
}

/// An argument value with one payload shape per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedArgument {
    /// Plain text.
    Text(String),
    /// File or stream reference.
    FileHandle(String),
    /// Parsed structured path.
    StructuredPath(StructuredPath),
}

impl TypedArgument {
    /// Kind of this value.
    pub fn kind(&self) -> ArgumentKind {
        match self {
            TypedArgument::Text(_) => ArgumentKind::Text,
            TypedArgument::FileHandle(_) => ArgumentKind::FileHandle,
            TypedArgument::StructuredPath(_) => ArgumentKind::StructuredPath,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";

    fn schemas() -> [ArgumentSchema; 3] {
        [
            ArgumentSchema::text("name", false, false, "name"),
            ArgumentSchema::file("file", true, false, "input file"),
            ArgumentSchema::path("ref", true, false, "object"),
        ]
    }

    #[test]
    fn test_matching_accessor_returns_value() {
        let [text, file, path] = schemas();

        assert_eq!(
            ArgumentValue::new("hello", &text).as_text().unwrap(),
            ("hello", true)
        );
        assert_eq!(
            ArgumentValue::new("-", &file).as_file_handle().unwrap(),
            ("-", true)
        );
        let (parsed, found) = ArgumentValue::new(KEY, &path)
            .as_structured_path()
            .unwrap();
        assert!(found);
        assert_eq!(parsed.root(), KEY);
    }

    #[test]
    fn test_mismatched_accessors_fail_regardless_of_payload() {
        for schema in &schemas() {
            for raw in ["", "hello", KEY] {
                let value = ArgumentValue::new(raw, schema);
                let results = [
                    (ArgumentKind::Text, value.as_text().map(|_| ())),
                    (ArgumentKind::FileHandle, value.as_file_handle().map(|_| ())),
                    (
                        ArgumentKind::StructuredPath,
                        value.as_structured_path().map(|_| ()),
                    ),
                ];
                for (kind, result) in results {
                    if kind == schema.kind {
                        continue;
                    }
                    match result {
                        Err(ArgumentError::TypeMismatch {
                            expected, actual, ..
                        }) => {
                            assert_eq!(expected, kind);
                            assert_eq!(actual, schema.kind);
                        }
                        other => panic!("expected type mismatch, got {other:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_payload_is_not_found() {
        let [text, file, path] = schemas();

        assert_eq!(ArgumentValue::new("", &text).as_text().unwrap(), ("", false));
        assert_eq!(
            ArgumentValue::new("", &file).as_file_handle().unwrap(),
            ("", false)
        );
        let (parsed, found) = ArgumentValue::new("", &path).as_structured_path().unwrap();
        assert!(!found);
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_path_parse_error_is_propagated_unchanged() {
        let [_, _, path] = schemas();
        let err = ArgumentValue::new("/ipfs", &path)
            .as_structured_path()
            .unwrap_err();

        let expected = PathError::NoComponents("/ipfs".to_string());
        assert_eq!(err.to_string(), expected.to_string());
        assert!(matches!(err, ArgumentError::Path(e) if e == expected));
    }

    #[test]
    fn test_custom_parser_error_type_is_kept() {
        let [text, _, path] = schemas();

        let err = ArgumentValue::new("abc", &path)
            .as_structured_path_with(|raw| raw.parse::<u32>())
            .unwrap_err();
        assert!(matches!(err, AccessError::Parse(_)));

        let err = ArgumentValue::new("abc", &text)
            .as_structured_path_with(|raw| raw.parse::<u32>())
            .unwrap_err();
        assert!(matches!(err, AccessError::Access(e) if e.is_type_mismatch()));
    }

    #[test]
    fn test_typed_follows_schema_kind() {
        let [text, file, path] = schemas();

        assert_eq!(
            ArgumentValue::new("hello", &text).typed().unwrap(),
            TypedArgument::Text("hello".to_string())
        );
        assert_eq!(
            ArgumentValue::new("a.txt", &file).typed().unwrap().kind(),
            ArgumentKind::FileHandle
        );
        assert_eq!(
            ArgumentValue::new(KEY, &path).typed().unwrap().kind(),
            ArgumentKind::StructuredPath
        );
        assert!(ArgumentValue::new("/x/y", &path).typed().is_err());
    }

    #[test]
    fn test_values_share_schema() {
        let schema = ArgumentSchema::file("files", true, true, "inputs");
        let values: Vec<_> = ["a", "b"]
            .into_iter()
            .map(|raw| ArgumentValue::new(raw, &schema))
            .collect();

        assert!(values.iter().all(|v| std::ptr::eq(v.schema(), &schema)));
    }
}
