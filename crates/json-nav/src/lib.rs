//! # json-nav
//!
//! Typed, path-tracking access over parsed JSON.
//!
//! Configuration loaders usually receive JSON as an untyped tree and need to
//! turn it into strongly typed values while telling the user exactly *where*
//! the input is wrong. `json-nav` wraps a `serde_json` value graph in
//! [`Node`]s that remember how they were reached, so a failed lookup reads
//! `missing key "port" at root.servers[2].port` rather than just "missing
//! field".
//!
//! ## Quick start
//!
//! ```rust
//! use json_nav::{parse, ErrorKind};
//!
//! let doc = parse(r#"{"a":{"b":[10,20]}}"#).unwrap();
//! let root = doc.root();
//!
//! let b = root.as_object().unwrap().get_object("a").unwrap().get_list("b").unwrap();
//! assert_eq!(b.get_i32(1).unwrap(), 20);
//!
//! let err = b.get(5).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
//! assert_eq!(err.path(), "root.a.b[5]");
//! ```
//!
//! ## Accepted values
//!
//! Objects, lists, 64-bit signed integers, floats and strings. Booleans and
//! null are outside the typed subset: a document whose root is one fails to
//! parse, and wrapping a nested one fails with [`Error::Unsupported`].
//! [`Node::raw`] and [`Node::deserialize`] still give access to them.
//!
//! ## Modules
//!
//! - [`path`] — persistent path chains and their rendering
//! - [`value`] — the [`Value`] tagged union and the [`Node`] wrapper with casts
//! - [`object`] / [`list`] — keyed and indexed views
//! - [`document`] — [`parse`] and the owning [`Document`]
//! - [`convert`] — [`FromNode`] for domain types
//! - [`expr`] — `a.b[2]` selectors via [`Node::select`]
//! - [`error`] — [`Error`], [`ErrorKind`] and the crate `Result`

pub mod convert;
pub mod document;
pub mod error;
pub mod expr;
pub mod list;
pub mod object;
pub mod path;
pub mod value;

pub use convert::FromNode;
pub use document::{parse, Document};
pub use error::{Error, ErrorKind, Result};
pub use list::{Items, ListView};
pub use object::{Entries, ObjectView};
pub use path::{Path, Segment, MAX_RENDERED_SEGMENTS};
pub use value::{Kind, Node, Value};
