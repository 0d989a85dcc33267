//! Stack-based depth-first traversal
//!
//! No recursion: depth is bounded by the explicit stack, so skewed trees
//! (height ~ n) walk as safely as balanced ones.
//! Each stack frame holds a node plus the phase it is in.

use super::Node;

/// Depth-first visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// Left, node, right (sorted order)
    Inorder,

    /// Node, left, right
    Preorder,

    /// Left, right, node
    Postorder,
}

/// Where a frame is in its visit of a node
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Left subtree not yet entered
    Enter,

    /// Left subtree done, right subtree not yet entered
    Between,

    /// Both subtrees done
    Exit,
}

/// Iterator over node references in a given [`Order`]
#[derive(Debug)]
pub struct DepthFirst<'a> {
    order: Order,

    /// Stack of (node, phase) frames
    stack: Vec<(&'a Node, Phase)>,
}

impl<'a> DepthFirst<'a> {
    /// Create new traversal starting at `root`
    pub fn new(root: Option<&'a Node>, order: Order) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push((root, Phase::Enter));
        }
        Self { order, stack }
    }

    /// Current stack depth (number of open frames)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, phase)) = self.stack.pop() {
            match phase {
                Phase::Enter => {
                    self.stack.push((node, Phase::Between));
                    if let Some(left) = node.left() {
                        self.stack.push((left, Phase::Enter));
                    }
                    if self.order == Order::Preorder {
                        return Some(node);
                    }
                }
                Phase::Between => {
                    self.stack.push((node, Phase::Exit));
                    if let Some(right) = node.right() {
                        self.stack.push((right, Phase::Enter));
                    }
                    if self.order == Order::Inorder {
                        return Some(node);
                    }
                }
                Phase::Exit => {
                    if self.order == Order::Postorder {
                        return Some(node);
                    }
                }
            }
        }
        None
    }
}
