//! Conversion from nodes into domain types.
//!
//! [`FromNode`] is the hook configuration loaders implement for their own
//! types; the provided impls cover scalars and collections using the strict
//! casts, so every failure keeps the path of the offending element.
//!
//! ```
//! use json_nav::{parse, FromNode, Node, Result};
//!
//! #[derive(Debug)]
//! struct Listener {
//!     host: String,
//!     port: i32,
//!     tags: Vec<String>,
//! }
//!
//! impl<'a> FromNode<'a> for Listener {
//!     fn from_node(node: &Node<'a>) -> Result<Self> {
//!         let obj = node.as_object()?;
//!         Ok(Listener {
//!             host: obj.get_string("host")?,
//!             port: obj.get_i32("port")?,
//!             tags: obj.try_get_as("tags")?.unwrap_or_default(),
//!         })
//!     }
//! }
//!
//! let doc = parse(r#"[{"host":"a","port":80},{"host":"b","port":"x"}]"#).unwrap();
//! let err = doc.root().get_as::<Vec<Listener>>().unwrap_err();
//! assert_eq!(err.path(), "root[1].port");
//! ```

use std::collections::BTreeMap;

use crate::error::Result;
use crate::list::ListView;
use crate::object::ObjectView;
use crate::value::Node;

/// Build `Self` from a [`Node`].
pub trait FromNode<'a>: Sized {
    fn from_node(node: &Node<'a>) -> Result<Self>;
}

impl<'a> FromNode<'a> for Node<'a> {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        Ok(node.clone())
    }
}

impl<'a> FromNode<'a> for ObjectView<'a> {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_object()
    }
}

impl<'a> FromNode<'a> for ListView<'a> {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_list()
    }
}

impl<'a> FromNode<'a> for &'a str {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_str()
    }
}

impl<'a> FromNode<'a> for String {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_string()
    }
}

impl<'a> FromNode<'a> for i64 {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_i64()
    }
}

impl<'a> FromNode<'a> for i32 {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_i32()
    }
}

impl<'a> FromNode<'a> for f64 {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_f64()
    }
}

impl<'a> FromNode<'a> for f32 {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_f32()
    }
}

impl<'a, T: FromNode<'a>> FromNode<'a> for Vec<T> {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_list()?
            .iter()
            .map(|item| T::from_node(&item?))
            .collect()
    }
}

impl<'a, T: FromNode<'a>> FromNode<'a> for BTreeMap<String, T> {
    fn from_node(node: &Node<'a>) -> Result<Self> {
        node.as_object()?
            .iter()
            .map(|entry| {
                let (key, value) = entry?;
                Ok((key.to_owned(), T::from_node(&value)?))
            })
            .collect()
    }
}
