//! Persistent binary search tree
//!
//! Key idea: updates never touch existing nodes.
//! `insert`/`remove` reallocate only the root-to-target path and share every
//! other subtree with the input tree, so older snapshots stay valid.
//!
//! All walks are iterative (explicit path / stack), never recursive.

mod node;
mod traversal;

pub use node::{Link, Node};
pub use traversal::{DepthFirst, Order};

use std::fmt;
use std::sync::Arc;

/// Key type stored in the tree (totally ordered, no duplicates)
pub type Key = i64;

/// Demo tree used when no values are supplied
pub const SAMPLE_VALUES: [Key; 15] = [50, 25, 75, 12, 37, 62, 87, 6, 18, 30, 43, 56, 68, 81, 93];

/// Which child a walk stepped into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Descended into the left child
    Left,

    /// Descended into the right child
    Right,
}

/// Tree handle: an optional shared root
///
/// Cloning is O(1) and yields a snapshot that later updates cannot affect.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tree").field(&format_args!("{}", self)).finish()
    }
}

impl Tree {
    /// Create empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Build by inserting `values` left to right into an empty tree
    ///
    /// The first value becomes the root; duplicates are skipped.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        values
            .into_iter()
            .fold(Tree::new(), |tree, value| tree.insert(value))
    }

    /// Tree built from [`SAMPLE_VALUES`]
    pub fn sample() -> Self {
        Self::from_values(SAMPLE_VALUES)
    }

    /// Root node, `None` for the empty tree
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether both handles point at the very same root allocation
    pub fn shares_root_with(&self, other: &Tree) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Return a tree that also contains `value`
    ///
    /// Inserting a key that is already present returns the same tree.
    pub fn insert(&self, value: Key) -> Tree {
        let mut path = Vec::new();
        let mut current = self.root();

        while let Some(node) = current {
            if value < node.value {
                path.push((node, Direction::Left));
                current = node.left();
            } else if value > node.value {
                path.push((node, Direction::Right));
                current = node.right();
            } else {
                return self.clone();
            }
        }

        Tree {
            root: rebuild(&path, Some(Arc::new(Node::leaf(value)))),
        }
    }

    /// Return a tree without `value`
    ///
    /// Leaf: dropped. One child: replaced by that child.
    /// Two children: takes its in-order successor's key (minimum of the right
    /// subtree) and the successor is unlinked from the right subtree.
    /// Removing an absent key returns the same tree.
    pub fn remove(&self, value: Key) -> Tree {
        let mut path = Vec::new();
        let mut current = self.root();

        let target = loop {
            let Some(node) = current else {
                return self.clone();
            };
            if value < node.value {
                path.push((node, Direction::Left));
                current = node.left();
            } else if value > node.value {
                path.push((node, Direction::Right));
                current = node.right();
            } else {
                break node;
            }
        };

        let replacement = match (&target.left, &target.right) {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(Arc::clone(only)),
            (Some(left), Some(right)) => {
                let (successor, right_rest) = detach_min(right);
                Some(Arc::new(Node::with_children(
                    successor,
                    Some(Arc::clone(left)),
                    right_rest,
                )))
            }
        };

        Tree {
            root: rebuild(&path, replacement),
        }
    }

    /// Exact membership test
    pub fn contains(&self, value: Key) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            if value < node.value {
                current = node.left();
            } else if value > node.value {
                current = node.right();
            } else {
                return true;
            }
        }
        false
    }

    /// Number of nodes
    pub fn count(&self) -> usize {
        size(self.root())
    }

    /// Height in edges: -1 for empty, 0 for a single node
    pub fn height(&self) -> isize {
        let Some(root) = self.root() else {
            return -1;
        };

        let mut stack = vec![(root, 0isize)];
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Smallest key
    pub fn min(&self) -> Option<Key> {
        self.root().map(|root| root.min_node().value)
    }

    /// Largest key
    pub fn max(&self) -> Option<Key> {
        self.root().map(|root| root.max_node().value)
    }

    /// Iterate nodes in the given order
    pub fn iter(&self, order: Order) -> DepthFirst<'_> {
        DepthFirst::new(self.root(), order)
    }

    /// Collect keys in the given order
    pub fn values(&self, order: Order) -> Vec<Key> {
        self.iter(order).map(|node| node.value).collect()
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Tree::from_values(iter)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root),
            None => write!(f, "()"),
        }
    }
}

/// Size of the subtree rooted at `node` (0 for `None`)
pub fn size(node: Option<&Node>) -> usize {
    DepthFirst::new(node, Order::Preorder).count()
}

/// Re-link `child` under copies of every node on `path`, bottom up
///
/// Siblings off the path are shared, not copied.
fn rebuild(path: &[(&Node, Direction)], child: Link) -> Link {
    path.iter().rev().fold(child, |child, (parent, dir)| {
        let node = match dir {
            Direction::Left => Node::with_children(parent.value, child, parent.right.clone()),
            Direction::Right => Node::with_children(parent.value, parent.left.clone(), child),
        };
        Some(Arc::new(node))
    })
}

/// Split off the minimum of `subtree`
///
/// Returns: (minimum key, subtree without it)
fn detach_min(subtree: &Arc<Node>) -> (Key, Link) {
    let mut spine = Vec::new();
    let mut node: &Node = subtree;
    while let Some(left) = node.left() {
        spine.push((node, Direction::Left));
        node = left;
    }
    (node.value, rebuild(&spine, node.right.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Tree {
        Tree::from_values([50, 25, 75, 12, 37, 62, 87])
    }

    #[test]
    fn test_first_value_becomes_root() {
        let tree = seven();
        assert_eq!(tree.root().map(|n| n.value), Some(50));
        assert_eq!(tree.count(), 7);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_height_conventions() {
        assert_eq!(Tree::new().height(), -1);
        assert_eq!(Tree::from_values([1]).height(), 0);
        assert_eq!(Tree::from_values([1, 2, 3]).height(), 2);
    }

    #[test]
    fn test_duplicate_insert_returns_same_tree() {
        let tree = seven();
        let again = tree.insert(37);
        assert!(again.shares_root_with(&tree));
    }

    #[test]
    fn test_insert_shares_untouched_subtrees() {
        let tree = seven();
        let grown = tree.insert(40);

        let old_right = tree.root().and_then(|n| n.right.clone());
        let new_right = grown.root().and_then(|n| n.right.clone());
        match (old_right, new_right) {
            (Some(a), Some(b)) => assert!(Arc::ptr_eq(&a, &b)),
            _ => panic!("right subtree missing"),
        }
        // snapshot unaffected
        assert!(!tree.contains(40));
        assert!(grown.contains(40));
    }

    #[test]
    fn test_remove_leaf() {
        let tree = seven().remove(12);
        assert_eq!(tree.values(Order::Inorder), vec![25, 37, 50, 62, 75, 87]);
    }

    #[test]
    fn test_remove_one_child_promotes_child() {
        let tree = seven().remove(12).remove(25);
        assert_eq!(tree.root().and_then(|n| n.left()).map(|n| n.value), Some(37));
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let tree = seven().remove(25);
        let left = tree.root().and_then(|n| n.left()).map(|n| n.value);
        assert_eq!(left, Some(37));
        assert_eq!(tree.values(Order::Inorder), vec![12, 37, 50, 62, 75, 87]);
    }

    #[test]
    fn test_remove_root_with_deep_successor() {
        let tree = Tree::sample().remove(50);
        assert_eq!(tree.root().map(|n| n.value), Some(56));
        assert_eq!(tree.count(), 14);
        assert!(!tree.contains(50));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let tree = seven();
        assert!(tree.remove(40).shares_root_with(&tree));
        assert!(Tree::new().remove(1).is_empty());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(seven().min(), Some(12));
        assert_eq!(seven().max(), Some(87));
        assert_eq!(Tree::new().min(), None);
    }

    #[test]
    fn test_display() {
        let tree = Tree::from_values([2, 1, 3]);
        assert_eq!(tree.to_string(), "(2 (1) (3))");
        assert_eq!(Tree::new().to_string(), "()");
    }
}
