//! Keyed access over an object [`Node`].

use serde_json::{map, Map, Value as RawValue};

use crate::convert::FromNode;
use crate::error::{Error, Result};
use crate::list::ListView;
use crate::path::Path;
use crate::value::Node;

/// A view of a JSON object. Every lookup extends the view's path with
/// `.key`.
///
/// Obtained from [`Node::as_object`] or [`Node::try_object`].
#[derive(Debug, Clone)]
pub struct ObjectView<'a> {
    map: &'a Map<String, RawValue>,
    path: Path,
}

impl<'a> ObjectView<'a> {
    pub(crate) fn new(map: &'a Map<String, RawValue>, path: Path) -> Self {
        Self { map, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.map.keys().map(String::as_str)
    }

    /// Look up `key`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingKey`] if the key is absent, [`Error::Unsupported`] if
    /// its value is a boolean or null. Both report the path including `.key`.
    pub fn get(&self, key: &str) -> Result<Node<'a>> {
        let path = self.path.key(key);
        match self.map.get(key) {
            Some(raw) => Node::new(raw, path),
            None => Err(Error::missing_key(&path, key)),
        }
    }

    /// Like [`get`](Self::get), but absent keys and unsupported values give
    /// `None`.
    pub fn try_get(&self, key: &str) -> Option<Node<'a>> {
        let raw = self.map.get(key)?;
        Node::try_new(raw, self.path.key(key))
    }

    pub fn get_object(&self, key: &str) -> Result<ObjectView<'a>> {
        self.get(key)?.as_object()
    }

    pub fn get_list(&self, key: &str) -> Result<ListView<'a>> {
        self.get(key)?.as_list()
    }

    pub fn get_str(&self, key: &str) -> Result<&'a str> {
        self.get(key)?.as_str()
    }

    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)?.as_string()
    }

    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.get(key)?.as_f64()
    }

    pub fn get_f32(&self, key: &str) -> Result<f32> {
        self.get(key)?.as_f32()
    }

    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get(key)?.as_i64()
    }

    pub fn get_i32(&self, key: &str) -> Result<i32> {
        self.get(key)?.as_i32()
    }

    /// Look up `key` and convert it with [`FromNode`].
    pub fn get_as<T: FromNode<'a>>(&self, key: &str) -> Result<T> {
        T::from_node(&self.get(key)?)
    }

    /// Optional field: `Ok(None)` when `key` is absent, but a present value
    /// of the wrong shape is still an error.
    pub fn try_get_as<T: FromNode<'a>>(&self, key: &str) -> Result<Option<T>> {
        if !self.map.contains_key(key) {
            return Ok(None);
        }
        self.get_as(key).map(Some)
    }

    /// Iterate `(key, node)` pairs in insertion order.
    ///
    /// Each call starts a fresh pass. A member holding an unsupported value
    /// yields an `Err` for that member only.
    pub fn iter(&self) -> Entries<'a> {
        Entries {
            inner: self.map.iter(),
            path: self.path.clone(),
        }
    }
}

impl<'v, 'a> IntoIterator for &'v ObjectView<'a> {
    type Item = Result<(&'a str, Node<'a>)>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an object's members. See [`ObjectView::iter`].
pub struct Entries<'a> {
    inner: map::Iter<'a>,
    path: Path,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<(&'a str, Node<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, raw) = self.inner.next()?;
        Some(Node::new(raw, self.path.key(key)).map(|node| (key.as_str(), node)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

#[cfg(test)]
mod tests {
    use crate::parse;

    #[test]
    fn member_paths_extend_with_key() {
        let doc = parse(r#"{"server":{"port":8080}}"#).unwrap();
        let root = doc.root();
        let server = root.as_object().unwrap().get_object("server").unwrap();
        assert_eq!(server.path().render(), "root.server");
        let port = server.get("port").unwrap();
        assert_eq!(port.path().render(), "root.server.port");
    }

    #[test]
    fn iteration_is_restartable() {
        let doc = parse(r#"{"a":1,"b":2}"#).unwrap();
        let root = doc.root();
        let obj = root.as_object().unwrap();
        let first: Vec<&str> = obj.iter().map(|e| e.unwrap().0).collect();
        let second: Vec<&str> = obj.iter().map(|e| e.unwrap().0).collect();
        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(first, second);
        assert_eq!(obj.iter().len(), 2);
    }
}
