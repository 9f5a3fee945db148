//! Structured path identifiers.
//!
//! A [`StructuredPath`] is a content-addressed path of the form
//! `/<namespace>/<root>[/<segment>...]`. A bare root key is accepted and
//! treated as an immutable content path.
//!
//! # Examples
//!
//! ```
//! use command_args_core::{Namespace, StructuredPath};
//!
//! let path: StructuredPath = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG/readme"
//!     .parse()
//!     .unwrap();
//! assert_eq!(path.namespace(), Namespace::Ipfs);
//! assert_eq!(path.segments(), ["readme"]);
//! assert_eq!(
//!     path.to_string(),
//!     "/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG/readme"
//! );
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static CONTENT_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{2,}$").expect("static regex must compile")
});

/// Errors produced while parsing a [`StructuredPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Input was empty.
    #[error("path is empty")]
    Empty,
    /// Path has a namespace but no root key.
    #[error("path must contain at least one component: {0}")]
    NoComponents(String),
    /// Namespace is not recognized.
    #[error("unknown path namespace: {0}")]
    UnknownNamespace(String),
    /// Root key is not a valid content key.
    #[error("invalid path key: {0}")]
    InvalidKey(String),
}

/// Root namespace of a structured path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Immutable content, rooted at a content key.
    #[default]
    Ipfs,
    /// Mutable name, resolved elsewhere to a content key.
    Ipns,
}

impl Namespace {
    /// Path prefix for this namespace, without slashes.
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Ipfs => "ipfs",
            Namespace::Ipns => "ipns",
        }
    }
}

/// A parsed, canonical structured path.
///
/// The [`Default`] value is the empty path, returned by accessors when no
/// value was supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StructuredPath {
    namespace: Namespace,
    root: String,
    segments: Vec<String>,
}

impl StructuredPath {
    /// Parses a path from text.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] describing the first problem found.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_args_core::{PathError, StructuredPath};
    ///
    /// assert!(StructuredPath::parse("/ipns/example.org/docs").is_ok());
    /// assert_eq!(
    ///     StructuredPath::parse("/ipfs"),
    ///     Err(PathError::NoComponents("/ipfs".to_string()))
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self, PathError> {
        if text.is_empty() {
            return Err(PathError::Empty);
        }

        let Some(rest) = text.strip_prefix('/') else {
            // Bare key: treat as immutable content.
            let mut parts = text.split('/').filter(|s| !s.is_empty());
            let root = parts.next().ok_or(PathError::Empty)?;
            validate_content_key(root)?;
            return Ok(Self {
                namespace: Namespace::Ipfs,
                root: root.to_string(),
                segments: parts.map(String::from).collect(),
            });
        };

        let mut parts = rest.split('/').filter(|s| !s.is_empty());
        let namespace = match parts.next() {
            Some("ipfs") => Namespace::Ipfs,
            Some("ipns") => Namespace::Ipns,
            Some(other) => return Err(PathError::UnknownNamespace(other.to_string())),
            None => return Err(PathError::NoComponents(text.to_string())),
        };
        let root = parts
            .next()
            .ok_or_else(|| PathError::NoComponents(text.to_string()))?;
        if namespace == Namespace::Ipfs {
            validate_content_key(root)?;
        }

        Ok(Self {
            namespace,
            root: root.to_string(),
            segments: parts.map(String::from).collect(),
        })
    }

    /// Namespace of the path.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Root key or name.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Segments below the root.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` for the empty (default) path.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns a new path with `segment` appended.
    ///
    /// Slashes inside `segment` split it into several segments.
    pub fn join(&self, segment: &str) -> Self {
        let mut joined = self.clone();
        joined.segments.extend(
            segment
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from),
        );
        joined
    }
}

fn validate_content_key(key: &str) -> Result<(), PathError> {
    if CONTENT_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(PathError::InvalidKey(key.to_string()))
    }
}

impl fmt::Display for StructuredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "/{}/{}", self.namespace.as_str(), self.root)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for StructuredPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StructuredPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&value)
    }
}

impl From<StructuredPath> for String {
    fn from(path: StructuredPath) -> Self {
        path.to_string()
    }
}
