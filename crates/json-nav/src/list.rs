//! Indexed access over a list [`Node`].

use std::iter::Enumerate;
use std::slice;

use serde_json::Value as RawValue;

use crate::convert::FromNode;
use crate::error::{Error, Result};
use crate::object::ObjectView;
use crate::path::Path;
use crate::value::Node;

/// A view of a JSON array. Every lookup extends the view's path with
/// `[index]`.
///
/// Indices are signed so that a negative index is reported as such rather
/// than wrapping; see [`ListView::get`].
#[derive(Debug, Clone)]
pub struct ListView<'a> {
    items: &'a [RawValue],
    path: Path,
}

impl<'a> ListView<'a> {
    pub(crate) fn new(items: &'a [RawValue], path: Path) -> Self {
        Self { items, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn raw(&self, index: i64) -> Option<&'a RawValue> {
        usize::try_from(index).ok().and_then(|i| self.items.get(i))
    }

    /// Element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index < 0` or `index >= len()`; the
    /// message says which. [`Error::Unsupported`] for a boolean or null
    /// element.
    pub fn get(&self, index: i64) -> Result<Node<'a>> {
        let path = self.path.index(index);
        match self.raw(index) {
            Some(raw) => Node::new(raw, path),
            None => Err(Error::index_out_of_range(&path, index, self.items.len())),
        }
    }

    /// Like [`get`](Self::get), but out-of-bounds indices and unsupported
    /// elements give `None`.
    pub fn try_get(&self, index: i64) -> Option<Node<'a>> {
        let raw = self.raw(index)?;
        Node::try_new(raw, self.path.index(index))
    }

    pub fn get_object(&self, index: i64) -> Result<ObjectView<'a>> {
        self.get(index)?.as_object()
    }

    pub fn get_list(&self, index: i64) -> Result<ListView<'a>> {
        self.get(index)?.as_list()
    }

    pub fn get_str(&self, index: i64) -> Result<&'a str> {
        self.get(index)?.as_str()
    }

    pub fn get_string(&self, index: i64) -> Result<String> {
        self.get(index)?.as_string()
    }

    pub fn get_f64(&self, index: i64) -> Result<f64> {
        self.get(index)?.as_f64()
    }

    pub fn get_f32(&self, index: i64) -> Result<f32> {
        self.get(index)?.as_f32()
    }

    pub fn get_i64(&self, index: i64) -> Result<i64> {
        self.get(index)?.as_i64()
    }

    pub fn get_i32(&self, index: i64) -> Result<i32> {
        self.get(index)?.as_i32()
    }

    pub fn get_as<T: FromNode<'a>>(&self, index: i64) -> Result<T> {
        T::from_node(&self.get(index)?)
    }

    /// Iterate elements for indices `0..len()`. Each call starts a fresh
    /// pass.
    pub fn iter(&self) -> Items<'a> {
        Items {
            inner: self.items.iter().enumerate(),
            path: self.path.clone(),
        }
    }
}

impl<'v, 'a> IntoIterator for &'v ListView<'a> {
    type Item = Result<Node<'a>>;
    type IntoIter = Items<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a list's elements. See [`ListView::iter`].
#[derive(Debug, Clone)]
pub struct Items<'a> {
    inner: Enumerate<slice::Iter<'a, RawValue>>,
    path: Path,
}

impl<'a> Iterator for Items<'a> {
    type Item = Result<Node<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (i, raw) = self.inner.next()?;
        Some(Node::new(raw, self.path.index(i as i64)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Items<'_> {}

#[cfg(test)]
mod tests {
    use crate::parse;

    #[test]
    fn element_paths_extend_with_index() {
        let doc = parse("[[1,2],[3]]").unwrap();
        let root = doc.root();
        let inner = root.as_list().unwrap().get_list(1).unwrap();
        assert_eq!(inner.path().render(), "root[1]");
        assert_eq!(inner.get(0).unwrap().path().render(), "root[1][0]");
    }

    #[test]
    fn iteration_yields_indices_in_order() {
        let doc = parse("[10,20,30]").unwrap();
        let root = doc.root();
        let list = root.as_list().unwrap();
        let paths: Vec<String> = list
            .iter()
            .map(|n| n.unwrap().path().render())
            .collect();
        assert_eq!(paths, vec!["root[0]", "root[1]", "root[2]"]);
        let sum: i64 = (&list).into_iter().map(|n| n.unwrap().as_i64().unwrap()).sum();
        assert_eq!(sum, 60);
    }
}
