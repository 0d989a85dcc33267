//! Read-only descents: exact search, lower bound, min, max

use super::{Recorder, Step, StepResult};
use crate::tree::{Key, Node, Tree};

/// Exact search for `target`
///
/// Highlights [`crate::pseudocode::SEARCH`].
pub fn search(tree: &Tree, target: Key) -> Vec<Step> {
    let mut rec = Recorder::new();
    let mut current = tree.root();

    while let Some(node) = current {
        rec.visit(node.value);

        if node.value == target {
            return rec.finish(
                Some(node.value),
                3,
                format!("{} == {}, found!", node.value, target),
                StepResult::Found,
            );
        } else if node.value < target {
            rec.step(Some(node.value), 5, format!("{} < {}, go right", node.value, target));
            current = node.right();
        } else {
            rec.step(Some(node.value), 6, format!("{} > {}, go left", node.value, target));
            current = node.left();
        }
    }

    rec.finish(
        None,
        1,
        format!("Value {} is not found.", target),
        StepResult::NotFound,
    )
}

/// Smallest key `>= target`
///
/// Every node that qualifies becomes the new candidate before the walk
/// moves left to look for a smaller one.
/// Highlights [`crate::pseudocode::LOWER_BOUND`].
pub fn lower_bound(tree: &Tree, target: Key) -> Vec<Step> {
    let mut rec = Recorder::new();
    let mut current = tree.root();
    let mut best: Option<Key> = None;

    while let Some(node) = current {
        rec.visit(node.value);

        if node.value >= target {
            best = Some(node.value);
            rec.step(
                Some(node.value),
                5,
                format!(
                    "{} >= {}, update result={}, go left",
                    node.value, target, node.value
                ),
            );
            current = node.left();
        } else {
            rec.step(Some(node.value), 6, format!("{} < {}, go right", node.value, target));
            current = node.right();
        }
    }

    match best {
        Some(bound) => rec.finish(
            Some(bound),
            2,
            format!("Lower bound of {} is {}.", target, bound),
            StepResult::Found,
        ),
        None => rec.finish(
            None,
            2,
            format!("No lower bound found for {}.", target),
            StepResult::NotFound,
        ),
    }
}

/// Walk the left spine to the minimum
///
/// Highlights [`crate::pseudocode::MIN_MAX`].
pub fn min(tree: &Tree) -> Vec<Step> {
    extreme(tree, Extreme::Min)
}

/// Walk the right spine to the maximum
///
/// Highlights [`crate::pseudocode::MIN_MAX`].
pub fn max(tree: &Tree) -> Vec<Step> {
    extreme(tree, Extreme::Max)
}

#[derive(Debug, Clone, Copy)]
enum Extreme {
    Min,
    Max,
}

impl Extreme {
    fn side(self) -> &'static str {
        match self {
            Extreme::Min => "left",
            Extreme::Max => "right",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Extreme::Min => "minimum",
            Extreme::Max => "maximum",
        }
    }

    fn child(self, node: &Node) -> Option<&Node> {
        match self {
            Extreme::Min => node.left(),
            Extreme::Max => node.right(),
        }
    }
}

fn extreme(tree: &Tree, which: Extreme) -> Vec<Step> {
    let mut rec = Recorder::new();
    let Some(mut node) = tree.root() else {
        return rec.finish(None, 1, "Tree is empty.", StepResult::NotFound);
    };

    while let Some(next) = which.child(node) {
        rec.visit(node.value);
        rec.step(
            Some(node.value),
            4,
            format!("{} has {} child, go {}", node.value, which.side(), which.side()),
        );
        node = next;
    }

    rec.visit(node.value);
    rec.finish(
        Some(node.value),
        3,
        format!(
            "{} has no {} child — {} found!",
            node.value,
            which.side(),
            which.noun()
        ),
        StepResult::Found,
    )
}
