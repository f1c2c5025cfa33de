//! Error types for parsing and navigating JSON documents.
//!
//! Every error carries the rendered [`Path`](crate::Path) that was active
//! when it was raised, available through [`Error::path`] separately from the
//! human-readable message.

use crate::path::Path;
use crate::value::Kind;
use thiserror::Error;

/// Errors that can occur while parsing or navigating a document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input text was not valid JSON, or its root value has an
    /// unsupported shape. `location` is the 1-based (line, column) reported
    /// by the deserializer, if any.
    #[error("JSON parse error at {path}: {message}")]
    Parse {
        path: String,
        message: String,
        location: Option<(usize, usize)>,
    },

    /// An object lookup named a key that isn't present.
    #[error("missing key \"{key}\" at {path}")]
    MissingKey { path: String, key: String },

    /// A list lookup used a negative index or one past the end.
    #[error("{} at {path}", describe_index(.index, .len))]
    IndexOutOfRange { path: String, index: i64, len: usize },

    /// A strict cast found a different variant than it needed.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: Kind,
        found: Kind,
    },

    /// The value is JSON the typed layer doesn't model (boolean, null, or an
    /// integer above `i64::MAX`).
    #[error("unsupported value at {path}: {found} is not an object, list, integer, float or string")]
    Unsupported { path: String, found: &'static str },

    /// A strict integer cast produced a value that doesn't fit the target.
    #[error("numeric overflow at {path}: {value} does not fit in {target}")]
    NumericOverflow {
        path: String,
        value: String,
        target: &'static str,
    },

    /// Serde deserialization of a subtree failed.
    #[error("cannot deserialize value at {path}: {message}")]
    Deserialize { path: String, message: String },

    /// A path expression passed to `select` could not be parsed.
    #[error("invalid path expression {expr:?} at offset {offset}: {message}")]
    InvalidExpression {
        path: String,
        expr: String,
        offset: usize,
        message: String,
    },
}

/// Discriminant of [`Error`], for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    MissingKey,
    IndexOutOfRange,
    TypeMismatch,
    Unsupported,
    NumericOverflow,
    Deserialize,
    InvalidExpression,
}

fn describe_index(index: &i64, len: &usize) -> String {
    if *index < 0 {
        format!("index {index} is negative")
    } else {
        format!("index {index} is out of range for size {len}")
    }
}

impl Error {
    /// The rendered path at which the failure happened, e.g. `root.a.b[2]`.
    pub fn path(&self) -> &str {
        match self {
            Error::Parse { path, .. }
            | Error::MissingKey { path, .. }
            | Error::IndexOutOfRange { path, .. }
            | Error::TypeMismatch { path, .. }
            | Error::Unsupported { path, .. }
            | Error::NumericOverflow { path, .. }
            | Error::Deserialize { path, .. }
            | Error::InvalidExpression { path, .. } => path,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } => ErrorKind::Parse,
            Error::MissingKey { .. } => ErrorKind::MissingKey,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Unsupported { .. } => ErrorKind::Unsupported,
            Error::NumericOverflow { .. } => ErrorKind::NumericOverflow,
            Error::Deserialize { .. } => ErrorKind::Deserialize,
            Error::InvalidExpression { .. } => ErrorKind::InvalidExpression,
        }
    }

    pub(crate) fn parse(
        path: &Path,
        message: impl Into<String>,
        location: Option<(usize, usize)>,
    ) -> Self {
        let err = Error::Parse {
            path: path.render(),
            message: message.into(),
            location,
        };
        tracing::debug!(error = %err, "document rejected");
        err
    }

    pub(crate) fn missing_key(path: &Path, key: &str) -> Self {
        Self::traced(Error::MissingKey {
            path: path.render(),
            key: key.to_owned(),
        })
    }

    pub(crate) fn index_out_of_range(path: &Path, index: i64, len: usize) -> Self {
        Self::traced(Error::IndexOutOfRange {
            path: path.render(),
            index,
            len,
        })
    }

    pub(crate) fn type_mismatch(path: &Path, expected: Kind, found: Kind) -> Self {
        Self::traced(Error::TypeMismatch {
            path: path.render(),
            expected,
            found,
        })
    }

    pub(crate) fn unsupported(path: &Path, found: &'static str) -> Self {
        Self::traced(Error::Unsupported {
            path: path.render(),
            found,
        })
    }

    pub(crate) fn numeric_overflow(
        path: &Path,
        value: impl ToString,
        target: &'static str,
    ) -> Self {
        Self::traced(Error::NumericOverflow {
            path: path.render(),
            value: value.to_string(),
            target,
        })
    }

    pub(crate) fn deserialize(path: &Path, source: serde_json::Error) -> Self {
        Self::traced(Error::Deserialize {
            path: path.render(),
            message: source.to_string(),
        })
    }

    pub(crate) fn invalid_expression(
        path: &Path,
        expr: &str,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::traced(Error::InvalidExpression {
            path: path.render(),
            expr: expr.to_owned(),
            offset,
            message: message.into(),
        })
    }

    fn traced(self) -> Self {
        tracing::trace!(kind = ?self.kind(), path = self.path(), "navigation failed");
        self
    }
}

/// Convenience alias used throughout json-nav.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_messages_distinguish_negative_and_past_end() {
        let path = Path::root().index(-1);
        let err = Error::index_out_of_range(&path, -1, 3);
        assert_eq!(err.to_string(), "index -1 is negative at root[-1]");

        let path = Path::root().index(5);
        let err = Error::index_out_of_range(&path, 5, 3);
        assert_eq!(
            err.to_string(),
            "index 5 is out of range for size 3 at root[5]"
        );
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(err.path(), "root[5]");
    }

    #[test]
    fn type_mismatch_names_both_kinds() {
        let err = Error::type_mismatch(&Path::root().key("x"), Kind::String, Kind::Integer);
        assert_eq!(
            err.to_string(),
            "type mismatch at root.x: expected string, found integer"
        );
    }

    #[test]
    fn path_is_separate_from_message() {
        let err = Error::missing_key(&Path::root().key("a").key("y"), "y");
        assert_eq!(err.path(), "root.a.y");
        assert_eq!(err.to_string(), "missing key \"y\" at root.a.y");
    }
}
