//! Persistent tree node representation
//!
//! Node = key + two optional shared children.
//! Nodes are never mutated after construction: an update rebuilds the
//! root-to-target path and shares every untouched subtree via `Arc`.

use std::fmt;
use std::sync::Arc;

use super::Key;

/// Shared link to a child subtree
pub type Link = Option<Arc<Node>>;

/// Tree node (immutable once built)
///
/// `Display`, `Debug`, equality and drop all walk with an explicit stack,
/// so a degenerate spine of any length is safe to print or compare.
#[derive(Clone)]
pub struct Node {
    /// Key stored at this node
    pub value: Key,

    /// Subtree of strictly smaller keys
    pub left: Link,

    /// Subtree of strictly greater keys
    pub right: Link,
}

impl Node {
    /// Create a leaf holding `value`
    pub fn leaf(value: Key) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Create a node from a key and two existing subtrees
    pub fn with_children(value: Key, left: Link, right: Link) -> Self {
        Self { value, left, right }
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of children (0, 1 or 2)
    #[inline]
    pub fn degree(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Left child, if any
    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right child, if any
    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Leftmost node of this subtree (its minimum)
    pub fn min_node(&self) -> &Node {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Rightmost node of this subtree (its maximum)
    pub fn max_node(&self) -> &Node {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

// Unlinks uniquely owned descendants one at a time so dropping a deep
// (skewed) tree never recurses once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Arc<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(link) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(link) {
                pending.extend(node.left.take());
                pending.extend(node.right.take());
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if std::ptr::eq(a, b) {
                continue;
            }
            if a.value != b.value {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (None, None) => {}
                    (Some(x), Some(y)) => pending.push((x, y)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

/// Pending output while rendering a subtree
enum Frame<'a> {
    Subtree(&'a Node),
    Text(&'static str),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frames = vec![Frame::Subtree(self)];
        while let Some(frame) = frames.pop() {
            let node = match frame {
                Frame::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Frame::Subtree(node) => node,
            };

            if node.is_leaf() {
                write!(f, "({})", node.value)?;
                continue;
            }
            write!(f, "({}", node.value)?;
            // popped in reverse: " " left " " right ")"
            frames.push(Frame::Text(")"));
            frames.push(node.right().map_or(Frame::Text("."), Frame::Subtree));
            frames.push(Frame::Text(" "));
            frames.push(node.left().map_or(Frame::Text("."), Frame::Subtree));
            frames.push(Frame::Text(" "));
        }
        Ok(())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("subtree", &format_args!("{}", self))
            .finish()
    }
}
