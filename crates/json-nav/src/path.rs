//! Path chains: the record of how a value was reached from the document root.
//!
//! A [`Path`] is a persistent, backward-linked list. Every navigation step
//! (`.key` on an object, `[index]` on a list) allocates one new node that
//! points at its parent, so sibling lookups share the whole prefix and a
//! path is never copied. Paths exist purely for diagnostics: they are
//! rendered into error messages such as `root.servers[2].port`.
//!
//! # Truncation
//!
//! Rendering stops after [`MAX_RENDERED_SEGMENTS`] segments. Because the
//! walk starts at the leaf, the segments dropped on truncation are the ones
//! closest to the **root**; the rendered string is then prefixed with `...`
//! so a reader can tell it is incomplete:
//!
//! ```
//! use json_nav::Path;
//!
//! let mut path = Path::root();
//! for i in 0..150 {
//!     path = path.index(i);
//! }
//! let rendered = path.render();
//! assert!(rendered.starts_with("...[50]"));
//! assert!(rendered.ends_with("[149]"));
//! ```

use std::fmt;
use std::sync::Arc;

/// Maximum number of segments included by [`Path::render`].
pub const MAX_RENDERED_SEGMENTS: usize = 100;

const TRUNCATION_MARKER: &str = "...";

/// One navigation step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The document root, rendered as `root`.
    Root,
    /// An object member, rendered as `.key`.
    Key(String),
    /// A list element, rendered as `[index]`.
    Index(i64),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Root => f.write_str("root"),
            Segment::Key(key) => write!(f, ".{key}"),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

#[derive(Debug)]
struct PathNode {
    segment: Segment,
    parent: Option<Path>,
    depth: usize,
}

// Unlink iteratively so dropping a very long chain can't overflow the stack.
impl Drop for PathNode {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(path) = next {
            match Arc::try_unwrap(path.0) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// An immutable, shared path from the document root to a value.
///
/// Cloning is an `Arc` bump.
#[derive(Debug, Clone)]
pub struct Path(Arc<PathNode>);

impl Path {
    /// The path of a document's root value.
    pub fn root() -> Self {
        Self(Arc::new(PathNode {
            segment: Segment::Root,
            parent: None,
            depth: 1,
        }))
    }

    /// Extend this path with an object member access.
    pub fn key(&self, key: &str) -> Self {
        self.push(Segment::Key(key.to_owned()))
    }

    /// Extend this path with a list element access.
    pub fn index(&self, index: i64) -> Self {
        self.push(Segment::Index(index))
    }

    fn push(&self, segment: Segment) -> Self {
        Self(Arc::new(PathNode {
            segment,
            parent: Some(self.clone()),
            depth: self.0.depth + 1,
        }))
    }

    /// The last segment of this path.
    pub fn segment(&self) -> &Segment {
        &self.0.segment
    }

    /// The path this one was derived from, or `None` for a root.
    pub fn parent(&self) -> Option<&Path> {
        self.0.parent.as_ref()
    }

    /// Number of segments in the chain, including `root`.
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    /// Iterate segments from the leaf back to the root.
    pub fn segments(&self) -> Segments<'_> {
        Segments { next: Some(self) }
    }

    /// Render the path, keeping at most [`MAX_RENDERED_SEGMENTS`] segments.
    pub fn render(&self) -> String {
        self.render_with_limit(MAX_RENDERED_SEGMENTS)
    }

    /// Render the path, keeping at most `limit` segments nearest the leaf.
    ///
    /// If segments were dropped the result starts with `...`.
    pub fn render_with_limit(&self, limit: usize) -> String {
        let mut kept: Vec<&Segment> = self.segments().take(limit).collect();
        kept.reverse();

        let mut out = String::new();
        if self.depth() > kept.len() {
            out.push_str(TRUNCATION_MARKER);
        }
        for segment in kept {
            // fmt::Write into a String cannot fail
            let _ = fmt::Write::write_fmt(&mut out, format_args!("{segment}"));
        }
        out
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::root()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.depth() == other.depth() && self.segments().eq(other.segments()))
    }
}

impl Eq for Path {}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over a path's segments, leaf first. See [`Path::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'p> {
    next: Option<&'p Path>,
}

impl<'p> Iterator for Segments<'p> {
    type Item = &'p Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.next?;
        self.next = path.parent();
        Some(path.segment())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, Path::depth);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_root() {
        assert_eq!(Path::root().render(), "root");
        assert!(Path::root().is_root());
        assert_eq!(Path::root().depth(), 1);
    }

    #[test]
    fn mixed_segments_render_root_to_leaf() {
        let path = Path::root().key("a").key("b").index(2);
        assert_eq!(path.render(), "root.a.b[2]");
        assert_eq!(path.to_string(), "root.a.b[2]");
        assert_eq!(path.depth(), 4);
    }

    #[test]
    fn siblings_share_prefix() {
        let parent = Path::root().key("servers");
        let first = parent.index(0);
        let second = parent.index(1);
        assert!(Arc::ptr_eq(&first.parent().unwrap().0, &parent.0));
        assert!(Arc::ptr_eq(&second.parent().unwrap().0, &parent.0));
        assert_eq!(first.render(), "root.servers[0]");
        assert_eq!(second.render(), "root.servers[1]");
    }

    #[test]
    fn negative_index_renders_sign() {
        assert_eq!(Path::root().index(-1).render(), "root[-1]");
    }

    #[test]
    fn segments_iterate_leaf_first() {
        let path = Path::root().key("x").index(3);
        let segs: Vec<_> = path.segments().cloned().collect();
        assert_eq!(
            segs,
            vec![Segment::Index(3), Segment::Key("x".into()), Segment::Root]
        );
        assert_eq!(path.segments().len(), 3);
    }

    #[test]
    fn exactly_limit_segments_is_not_truncated() {
        let mut path = Path::root();
        for i in 0..(MAX_RENDERED_SEGMENTS as i64 - 1) {
            path = path.index(i);
        }
        assert_eq!(path.depth(), MAX_RENDERED_SEGMENTS);
        assert!(path.render().starts_with("root["));
    }

    #[test]
    fn one_past_limit_drops_root() {
        let mut path = Path::root();
        for i in 0..(MAX_RENDERED_SEGMENTS as i64) {
            path = path.index(i);
        }
        let rendered = path.render();
        assert!(rendered.starts_with("...[0]"), "got {rendered}");
        assert!(!rendered.contains("root"));
    }

    #[test]
    fn custom_limit() {
        let path = Path::root().key("a").key("b").key("c");
        assert_eq!(path.render_with_limit(2), "....b.c");
        assert_eq!(path.render_with_limit(0), "...");
        assert_eq!(path.render_with_limit(10), "root.a.b.c");
    }

    #[test]
    fn structural_equality() {
        let a = Path::root().key("k").index(1);
        let b = Path::root().key("k").index(1);
        let c = Path::root().key("k").index(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn dropping_deep_chain_does_not_overflow() {
        let mut path = Path::root();
        for i in 0..200_000 {
            path = path.index(i);
        }
        assert_eq!(path.depth(), 200_001);
        drop(path);
    }
}
