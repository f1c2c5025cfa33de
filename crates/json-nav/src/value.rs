//! The tagged value model and the path-carrying [`Node`] wrapper.
//!
//! # Cast semantics
//!
//! Strict casts (`as_*`) fail with a path-annotated [`Error`]. The numeric
//! ones are deliberately lenient about the JSON number form:
//!
//! | cast               | accepts            | conversion                     |
//! |--------------------|--------------------|--------------------------------|
//! | `as_f64`, `as_f32` | `Integer`, `Float` | integers promoted              |
//! | `as_i64`, `as_i32` | `Integer`, `Float` | floats truncated toward zero   |
//!
//! Lenient casts (`try_*`) return `None` instead of failing and only accept
//! an exact variant match: `try_i64`/`try_i32` need `Integer`,
//! `try_f64`/`try_f32` need `Float`. So `5.0` is an `as_i64()` of 5 but a
//! `try_i64()` of `None`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value as RawValue};

use crate::convert::FromNode;
use crate::error::{Error, Result};
use crate::list::ListView;
use crate::object::ObjectView;
use crate::path::Path;

/// The variant tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    List,
    Integer,
    Float,
    String,
    Invalid,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::List => "list",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One JSON element, classified by runtime shape.
///
/// Booleans, null and integers above `i64::MAX` are not part of the accepted
/// subset and classify as `Invalid`, carrying a short description of what
/// was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Object(&'a Map<String, RawValue>),
    List(&'a [RawValue]),
    Integer(i64),
    Float(f64),
    String(&'a str),
    Invalid(&'static str),
}

impl<'a> Value<'a> {
    /// Classify a deserialized value.
    pub fn classify(raw: &'a RawValue) -> Self {
        match raw {
            RawValue::Object(map) => Value::Object(map),
            RawValue::Array(items) => Value::List(items),
            RawValue::String(s) => Value::String(s),
            RawValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if n.is_f64() {
                    n.as_f64().map_or(Value::Invalid("number"), Value::Float)
                } else {
                    Value::Invalid("integer above i64::MAX")
                }
            }
            RawValue::Bool(_) => Value::Invalid("boolean"),
            RawValue::Null => Value::Invalid("null"),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Object(_) => Kind::Object,
            Value::List(_) => Kind::List,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Invalid(_) => Kind::Invalid,
        }
    }
}

/// A value inside a [`Document`](crate::Document) together with the path
/// that reached it.
///
/// A `Node` never holds [`Value::Invalid`]; construction fails instead.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    raw: &'a RawValue,
    value: Value<'a>,
    path: Path,
}

impl<'a> Node<'a> {
    /// Wrap `raw`, failing with [`Error::Unsupported`] if its shape is not
    /// one of the five accepted variants.
    pub fn new(raw: &'a RawValue, path: Path) -> Result<Self> {
        match Value::classify(raw) {
            Value::Invalid(found) => Err(Error::unsupported(&path, found)),
            value => Ok(Self { raw, value, path }),
        }
    }

    pub(crate) fn from_parts(raw: &'a RawValue, value: Value<'a>, path: Path) -> Self {
        Self { raw, value, path }
    }

    pub(crate) fn try_new(raw: &'a RawValue, path: Path) -> Option<Self> {
        match Value::classify(raw) {
            Value::Invalid(_) => None,
            value => Some(Self { raw, value, path }),
        }
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn value(&self) -> Value<'a> {
        self.value
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying `serde_json` value.
    pub fn raw(&self) -> &'a RawValue {
        self.raw
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::type_mismatch(&self.path, expected, self.kind())
    }

    // -- strict casts -------------------------------------------------------

    pub fn as_object(&self) -> Result<ObjectView<'a>> {
        self.try_object().ok_or_else(|| self.mismatch(Kind::Object))
    }

    pub fn as_list(&self) -> Result<ListView<'a>> {
        self.try_list().ok_or_else(|| self.mismatch(Kind::List))
    }

    pub fn as_str(&self) -> Result<&'a str> {
        self.try_str().ok_or_else(|| self.mismatch(Kind::String))
    }

    pub fn as_string(&self) -> Result<String> {
        self.as_str().map(str::to_owned)
    }

    /// Accepts `Integer` (promoted) or `Float`.
    pub fn as_f64(&self) -> Result<f64> {
        match self.value {
            Value::Integer(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            _ => Err(self.mismatch(Kind::Float)),
        }
    }

    /// Accepts `Integer` (promoted) or `Float`, narrowed to `f32`.
    pub fn as_f32(&self) -> Result<f32> {
        self.as_f64().map(|f| f as f32)
    }

    /// Accepts `Integer` or `Float` (truncated toward zero).
    pub fn as_i64(&self) -> Result<i64> {
        self.truncated("i64")
    }

    /// Accepts `Integer` or `Float` (truncated toward zero). Fails with
    /// [`Error::NumericOverflow`] outside the `i32` range.
    pub fn as_i32(&self) -> Result<i32> {
        let wide = self.truncated("i32")?;
        i32::try_from(wide).map_err(|_| Error::numeric_overflow(&self.path, wide, "i32"))
    }

    fn truncated(&self, target: &'static str) -> Result<i64> {
        match self.value {
            Value::Integer(i) => Ok(i),
            Value::Float(f) => {
                let t = f.trunc();
                // i64::MIN is exactly representable, i64::MAX + 1 is the
                // first float past the range.
                if (-9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0).contains(&t) {
                    Ok(t as i64)
                } else {
                    Err(Error::numeric_overflow(&self.path, f, target))
                }
            }
            _ => Err(self.mismatch(Kind::Integer)),
        }
    }

    // -- lenient casts ------------------------------------------------------

    pub fn try_object(&self) -> Option<ObjectView<'a>> {
        match self.value {
            Value::Object(map) => Some(ObjectView::new(map, self.path.clone())),
            _ => None,
        }
    }

    pub fn try_list(&self) -> Option<ListView<'a>> {
        match self.value {
            Value::List(items) => Some(ListView::new(items, self.path.clone())),
            _ => None,
        }
    }

    pub fn try_str(&self) -> Option<&'a str> {
        match self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn try_string(&self) -> Option<String> {
        self.try_str().map(str::to_owned)
    }

    /// `Integer` only; a `Float` yields `None`.
    pub fn try_i64(&self) -> Option<i64> {
        match self.value {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// `Integer` within `i32` range only.
    pub fn try_i32(&self) -> Option<i32> {
        self.try_i64().and_then(|i| i32::try_from(i).ok())
    }

    /// `Float` only; an `Integer` yields `None`.
    pub fn try_f64(&self) -> Option<f64> {
        match self.value {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    pub fn try_f32(&self) -> Option<f32> {
        self.try_f64().map(|f| f as f32)
    }

    // -- conversions --------------------------------------------------------

    /// Convert this node with its [`FromNode`] implementation.
    pub fn get_as<T: FromNode<'a>>(&self) -> Result<T> {
        T::from_node(self)
    }

    /// Run serde over the subtree. Failures keep this node's path.
    ///
    /// Unlike the typed accessors, serde sees the raw JSON, so booleans and
    /// null are available here.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        <T as Deserialize<'a>>::deserialize(self.raw)
            .map_err(|e| Error::deserialize(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_covers_every_raw_shape() {
        assert_eq!(Value::classify(&json!({})).kind(), Kind::Object);
        assert_eq!(Value::classify(&json!([])).kind(), Kind::List);
        assert_eq!(Value::classify(&json!(-3)).kind(), Kind::Integer);
        assert_eq!(Value::classify(&json!(1.5)).kind(), Kind::Float);
        assert_eq!(Value::classify(&json!("s")).kind(), Kind::String);
        assert_eq!(Value::classify(&json!(true)), Value::Invalid("boolean"));
        assert_eq!(Value::classify(&json!(null)), Value::Invalid("null"));
        assert_eq!(
            Value::classify(&json!(u64::MAX)),
            Value::Invalid("integer above i64::MAX")
        );
    }

    #[test]
    fn node_rejects_invalid() {
        let raw = json!(null);
        let err = Node::new(&raw, Path::root().key("n")).unwrap_err();
        assert_eq!(err.path(), "root.n");
        assert!(Node::try_new(&raw, Path::root()).is_none());
    }

    #[test]
    fn float_truncates_toward_zero() {
        let raw = json!(-2.9);
        let node = Node::new(&raw, Path::root()).unwrap();
        assert_eq!(node.as_i64().unwrap(), -2);
        assert_eq!(node.as_i32().unwrap(), -2);
        assert_eq!(node.try_i64(), None);
    }

    #[test]
    fn float_past_i64_range_overflows() {
        let raw = json!(1e20);
        let node = Node::new(&raw, Path::root()).unwrap();
        let err = node.as_i64().unwrap_err();
        assert!(matches!(err, Error::NumericOverflow { target: "i64", .. }));
    }
}
