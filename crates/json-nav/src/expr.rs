//! Path expressions -- resolve `servers[0].port` style selectors.
//!
//! # Syntax
//!
//! - `name` -- member `name` of the current object (leading key, no dot)
//! - `.name` -- member access after another segment
//! - `[3]`, `[-1]` -- element access; the index is a signed decimal integer
//! - the empty expression selects the node itself
//!
//! Keys run until the next `.`, `[` or `]`, so keys containing those
//! characters can't be addressed this way; use [`ObjectView::get`] directly.
//!
//! Resolution uses the strict navigation methods step by step, so a failing
//! `select("a.b[5]")` produces exactly the error `get("a")` / `get("b")` /
//! `get(5)` would have.
//!
//! [`ObjectView::get`]: crate::ObjectView::get

use crate::error::{Error, Result};
use crate::path::Path;
use crate::value::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Key(String),
    Index(i64),
}

/// Byte offset just past the key starting at `start`.
fn key_end(expr: &str, start: usize) -> usize {
    expr[start..]
        .find(|c: char| matches!(c, '.' | '[' | ']'))
        .map_or(expr.len(), |i| start + i)
}

fn parse_steps(expr: &str, at: &Path) -> Result<Vec<Step>> {
    let bytes = expr.as_bytes();
    let mut steps = Vec::new();
    let mut pos = 0;

    let fail = |offset: usize, message: &str| Error::invalid_expression(at, expr, offset, message);

    // Leading key without a dot.
    if !expr.is_empty() && bytes[0] != b'[' {
        let end = key_end(expr, 0);
        if end == 0 {
            return Err(fail(0, "expected a key or '['"));
        }
        steps.push(Step::Key(expr[..end].to_owned()));
        pos = end;
    }

    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => {
                let start = pos + 1;
                let end = key_end(expr, start);
                if end == start {
                    return Err(fail(start, "empty key"));
                }
                steps.push(Step::Key(expr[start..end].to_owned()));
                pos = end;
            }
            b'[' => {
                let close = expr[pos + 1..]
                    .find(']')
                    .map(|i| pos + 1 + i)
                    .ok_or_else(|| fail(pos, "unclosed '['"))?;
                let text = &expr[pos + 1..close];
                let index = text
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| fail(pos + 1, "index must be an integer"))?;
                steps.push(Step::Index(index));
                pos = close + 1;
            }
            _ => return Err(fail(pos, "expected '.' or '['")),
        }
    }

    Ok(steps)
}

impl<'a> Node<'a> {
    /// Resolve a path expression relative to this node.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidExpression`] for malformed selectors; otherwise
    /// whatever the equivalent chain of `as_object()?.get(..)` /
    /// `as_list()?.get(..)` calls returns.
    ///
    /// # Examples
    ///
    /// ```
    /// let doc = json_nav::parse(r#"{"a":{"b":[10,20]}}"#).unwrap();
    /// let root = doc.root();
    /// assert_eq!(root.select("a.b[1]").unwrap().as_i64().unwrap(), 20);
    ///
    /// let err = root.select("a.b[5]").unwrap_err();
    /// assert_eq!(err.path(), "root.a.b[5]");
    /// ```
    pub fn select(&self, expr: &str) -> Result<Node<'a>> {
        let steps = parse_steps(expr, self.path())?;
        steps
            .iter()
            .try_fold(self.clone(), |node, step| match step {
                Step::Key(key) => node.as_object()?.get(key),
                Step::Index(index) => node.as_list()?.get(*index),
            })
    }

    /// Like [`select`](Self::select), but any failure, including a malformed
    /// expression, gives `None`.
    pub fn try_select(&self, expr: &str) -> Option<Node<'a>> {
        let steps = parse_steps(expr, self.path()).ok()?;
        steps
            .iter()
            .try_fold(self.clone(), |node, step| match step {
                Step::Key(key) => node.try_object()?.try_get(key),
                Step::Index(index) => node.try_list()?.try_get(*index),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn steps(expr: &str) -> Result<Vec<Step>> {
        parse_steps(expr, &Path::root())
    }

    #[test]
    fn empty_expression_has_no_steps() {
        assert_eq!(steps("").unwrap(), vec![]);
    }

    #[test]
    fn keys_and_indices() {
        assert_eq!(
            steps("a.b[2]").unwrap(),
            vec![
                Step::Key("a".into()),
                Step::Key("b".into()),
                Step::Index(2)
            ]
        );
        assert_eq!(
            steps("[0].name").unwrap(),
            vec![Step::Index(0), Step::Key("name".into())]
        );
        assert_eq!(
            steps("m[1][-2]").unwrap(),
            vec![Step::Key("m".into()), Step::Index(1), Step::Index(-2)]
        );
    }

    #[test]
    fn malformed_expressions() {
        for (expr, offset) in [
            (".a", 0),
            ("a..b", 2),
            ("a.", 2),
            ("a[1", 1),
            ("a[x]", 2),
            ("a[0]b", 4),
            ("a]", 1),
        ] {
            let err = steps(expr).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidExpression, "{expr}");
            match err {
                Error::InvalidExpression { offset: got, .. } => {
                    assert_eq!(got, offset, "offset for {expr}")
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn unicode_keys() {
        assert_eq!(
            steps("caf\u{e9}.\u{4f60}").unwrap(),
            vec![Step::Key("caf\u{e9}".into()), Step::Key("\u{4f60}".into())]
        );
    }
}
