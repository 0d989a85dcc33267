//! Order-statistic traces: predecessor, successor, select
//!
//! Nodes hold no parent links. The in-order neighbour's ancestor case is
//! handled by remembering the last turn of the right kind while searching
//! down from the root.

use super::{Recorder, Step, StepResult};
use crate::tree::{size, Key, Node, Tree};

/// Which in-order neighbour to look for
#[derive(Debug, Clone, Copy, PartialEq)]
enum Neighbor {
    /// Next smaller key
    Predecessor,

    /// Next larger key
    Successor,
}

impl Neighbor {
    fn name(self) -> &'static str {
        match self {
            Neighbor::Predecessor => "predecessor",
            Neighbor::Successor => "successor",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Neighbor::Predecessor => "Predecessor",
            Neighbor::Successor => "Successor",
        }
    }

    /// Subtree that holds the neighbour when it exists below the node
    fn subtree(self, node: &Node) -> Option<&Node> {
        match self {
            Neighbor::Predecessor => node.left(),
            Neighbor::Successor => node.right(),
        }
    }

    /// Spine followed inside that subtree (towards the key closest to the node)
    fn inward(self, node: &Node) -> Option<&Node> {
        match self {
            Neighbor::Predecessor => node.right(),
            Neighbor::Successor => node.left(),
        }
    }

    fn subtree_side(self) -> &'static str {
        match self {
            Neighbor::Predecessor => "left",
            Neighbor::Successor => "right",
        }
    }

    fn inward_side(self) -> &'static str {
        match self {
            Neighbor::Predecessor => "right",
            Neighbor::Successor => "left",
        }
    }

    fn extreme(self) -> &'static str {
        match self {
            Neighbor::Predecessor => "max",
            Neighbor::Successor => "min",
        }
    }
}

/// Trace of finding the in-order predecessor of `value`
///
/// Highlights [`crate::pseudocode::PREDECESSOR`].
pub fn predecessor(tree: &Tree, value: Key) -> Vec<Step> {
    neighbor(tree, value, Neighbor::Predecessor)
}

/// Trace of finding the in-order successor of `value`
///
/// Highlights [`crate::pseudocode::SUCCESSOR`].
pub fn successor(tree: &Tree, value: Key) -> Vec<Step> {
    neighbor(tree, value, Neighbor::Successor)
}

fn neighbor(tree: &Tree, value: Key, which: Neighbor) -> Vec<Step> {
    let mut rec = Recorder::new();
    let mut current = tree.root();
    // last ancestor we turned away from in the neighbour's direction
    let mut turn: Option<Key> = None;

    let target = loop {
        let Some(node) = current else {
            return rec.finish(
                None,
                0,
                format!("Value {} not found in tree.", value),
                StepResult::NotFound,
            );
        };
        rec.visit(node.value);

        if node.value == value {
            rec.step(Some(node.value), 0, format!("Found node {}.", value));
            break node;
        }

        let go_left = value < node.value;
        let marks = match which {
            Neighbor::Predecessor => !go_left,
            Neighbor::Successor => go_left,
        };
        let (op, dir) = if go_left { ('<', "left") } else { ('>', "right") };

        if marks {
            turn = Some(node.value);
            rec.step(
                Some(node.value),
                0,
                format!(
                    "{} {} {}, go {} (mark as potential {}).",
                    value,
                    op,
                    node.value,
                    dir,
                    which.name()
                ),
            );
        } else {
            rec.step(
                Some(node.value),
                0,
                format!("{} {} {}, go {}.", value, op, node.value, dir),
            );
        }
        current = if go_left { node.left() } else { node.right() };
    };

    if let Some(mut found) = which.subtree(target) {
        rec.step(
            Some(target.value),
            1,
            format!(
                "Node has {} subtree — {} is {} of {} subtree.",
                which.subtree_side(),
                which.name(),
                which.extreme(),
                which.subtree_side()
            ),
        );

        rec.visit(found.value);
        while let Some(next) = which.inward(found) {
            rec.step(
                Some(found.value),
                2,
                format!("Go {} to find {}...", which.inward_side(), which.extreme()),
            );
            found = next;
            rec.visit(found.value);
        }

        return rec.finish(
            Some(found.value),
            4,
            format!("{} of {} is {}.", which.title(), value, found.value),
            StepResult::Found,
        );
    }

    match turn {
        Some(ancestor) => rec.finish(
            Some(ancestor),
            3,
            format!(
                "No {} subtree. {} is last {}-turn ancestor: {}.",
                which.subtree_side(),
                which.title(),
                which.inward_side(),
                ancestor
            ),
            StepResult::Found,
        ),
        None => rec.finish(
            None,
            4,
            format!("No {} exists for {}.", which.name(), value),
            StepResult::NotFound,
        ),
    }
}

/// Trace of finding the `k`-th smallest key (1-indexed)
///
/// `k` is checked against the current tree size before any node is visited.
/// Descent is guided by left-subtree sizes.
/// Highlights [`crate::pseudocode::SELECT`].
pub fn select(tree: &Tree, k: i64) -> Vec<Step> {
    let mut rec = Recorder::new();
    let total = tree.count();

    let Some(mut remaining) = usize::try_from(k)
        .ok()
        .filter(|k| (1..=total).contains(k))
    else {
        let status = if k < 1 {
            "k must be >= 1.".to_string()
        } else {
            format!("k={} is out of range (tree has {} nodes).", k, total)
        };
        return rec.finish(None, 0, status, StepResult::NotFound);
    };

    let mut current = tree.root();
    while let Some(node) = current {
        let left_size = size(node.left());
        rec.visit(node.value);

        if remaining <= left_size {
            rec.step(
                Some(node.value),
                3,
                format!(
                    "k={}, left subtree has {} nodes — go left.",
                    remaining, left_size
                ),
            );
            current = node.left();
        } else if remaining == left_size + 1 {
            return rec.finish(
                Some(node.value),
                5,
                format!(
                    "k={}, left subtree has {} nodes — this is the {}-th smallest: {}!",
                    remaining, left_size, k, node.value
                ),
                StepResult::Found,
            );
        } else {
            let next = remaining - left_size - 1;
            rec.step(
                Some(node.value),
                6,
                format!(
                    "k={}, left subtree has {} nodes — go right with k={}.",
                    remaining, left_size, next
                ),
            );
            remaining = next;
            current = node.right();
        }
    }

    // unreachable while 1 <= k <= count
    rec.finish(
        None,
        0,
        format!("k={} is out of range.", k),
        StepResult::NotFound,
    )
}
