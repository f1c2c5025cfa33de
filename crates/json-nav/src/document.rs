//! Parsing entry point: JSON text → [`Document`].

use std::str::FromStr;

use serde_json::Value as RawValue;

use crate::error::{Error, Result};
use crate::path::Path;
use crate::value::{Node, Value};

/// A parsed JSON document whose root is one of the accepted shapes.
///
/// The document owns the deserialized value graph; every [`Node`] and view
/// borrows from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    raw: RawValue,
}

/// Parse JSON text into a [`Document`].
///
/// # Errors
///
/// [`Error::Parse`] if the text is not valid JSON (with the line and column
/// reported by `serde_json`), or if the top-level value is a boolean or null.
///
/// # Examples
///
/// ```
/// let doc = json_nav::parse(r#"{"x": 5}"#).unwrap();
/// assert_eq!(doc.root().as_object().unwrap().get_i32("x").unwrap(), 5);
///
/// let err = json_nav::parse("not json").unwrap_err();
/// assert_eq!(err.kind(), json_nav::ErrorKind::Parse);
/// assert_eq!(err.path(), "root");
/// ```
pub fn parse(text: &str) -> Result<Document> {
    let raw: RawValue = serde_json::from_str(text).map_err(|e| {
        Error::parse(&Path::root(), e.to_string(), Some((e.line(), e.column())))
    })?;
    let doc = Document::from_value(raw)?;
    tracing::debug!(
        bytes = text.len(),
        root = %doc.root().kind(),
        "parsed document"
    );
    Ok(doc)
}

impl Document {
    /// Wrap an already-deserialized value, checking the root shape.
    pub fn from_value(raw: RawValue) -> Result<Self> {
        if let Value::Invalid(found) = Value::classify(&raw) {
            return Err(Error::parse(
                &Path::root(),
                format!(
                    "root value is {found}; expected an object, list, integer, float or string"
                ),
                None,
            ));
        }
        Ok(Self { raw })
    }

    /// The root node, at path `root`.
    pub fn root(&self) -> Node<'_> {
        // shape was checked in from_value
        Node::from_parts(&self.raw, Value::classify(&self.raw), Path::root())
    }

    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    pub fn into_raw(self) -> RawValue {
        self.raw
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn malformed_text_reports_location() {
        let err = parse("{\n  \"a\": }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        match err {
            Error::Parse { location, .. } => assert_eq!(location.map(|(line, _)| line), Some(2)),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn boolean_and_null_roots_are_rejected() {
        for text in ["true", "false", "null"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{text}");
            assert_eq!(err.path(), "root");
        }
    }

    #[test]
    fn scalar_roots_are_accepted() {
        assert_eq!(parse("42").unwrap().root().as_i64().unwrap(), 42);
        assert_eq!(parse("\"hi\"").unwrap().root().as_str().unwrap(), "hi");
        assert_eq!(parse("1.5").unwrap().root().as_f64().unwrap(), 1.5);
    }

    #[test]
    fn from_str_matches_parse() {
        let doc: Document = "[1]".parse().unwrap();
        assert_eq!(doc, parse("[1]").unwrap());
    }
}
