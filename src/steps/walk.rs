//! Full traversals, one step per visited node

use super::{Recorder, Step, StepResult};
use crate::tree::{Order, Tree};

/// Trace of a complete depth-first traversal in `order`
///
/// The last visit is tagged `Found` with "— traversal complete." appended.
pub fn traverse(tree: &Tree, order: Order) -> Vec<Step> {
    let line = visit_line(order);
    let mut rec = Recorder::new();

    for node in tree.iter(order) {
        rec.visit(node.value);
        rec.step(Some(node.value), line, format!("Visit {}", node.value));
    }

    rec.finish_last(" — traversal complete.", StepResult::Found, |rec| {
        rec.finish(None, 1, "Tree is empty.", StepResult::NotFound)
    })
}

/// Highlights [`crate::pseudocode::INORDER`].
pub fn inorder(tree: &Tree) -> Vec<Step> {
    traverse(tree, Order::Inorder)
}

/// Highlights [`crate::pseudocode::PREORDER`].
pub fn preorder(tree: &Tree) -> Vec<Step> {
    traverse(tree, Order::Preorder)
}

/// Highlights [`crate::pseudocode::POSTORDER`].
pub fn postorder(tree: &Tree) -> Vec<Step> {
    traverse(tree, Order::Postorder)
}

/// Line of the `visit(node)` statement in each listing
fn visit_line(order: Order) -> usize {
    match order {
        Order::Inorder => 3,
        Order::Preorder => 2,
        Order::Postorder => 4,
    }
}
