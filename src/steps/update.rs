//! Traces for the two mutating operations
//!
//! These only describe the walk; the new tree itself comes from
//! [`Tree::insert`] / [`Tree::remove`].

use super::{Recorder, Step, StepResult};
use crate::tree::{Key, Tree};

/// Trace of inserting `value`
///
/// Highlights [`crate::pseudocode::INSERT`]. A duplicate ends `NotFound`.
pub fn insert(tree: &Tree, value: Key) -> Vec<Step> {
    let mut rec = Recorder::new();
    let Some(mut node) = tree.root() else {
        return rec.finish(
            Some(value),
            1,
            format!("Tree is empty — create node {}.", value),
            StepResult::Found,
        );
    };

    loop {
        rec.visit(node.value);

        let (next, side, dir, walk_line) = if value < node.value {
            (node.left(), '<', "left", 3)
        } else if value > node.value {
            (node.right(), '>', "right", 5)
        } else {
            return rec.finish(
                Some(node.value),
                6,
                format!("{} == {}, duplicate — ignored.", node.value, value),
                StepResult::NotFound,
            );
        };

        match next {
            Some(child) => {
                rec.step(
                    Some(node.value),
                    walk_line,
                    format!("{} {} {}, go {}.", value, side, node.value, dir),
                );
                node = child;
            }
            None => {
                rec.step(
                    Some(node.value),
                    1,
                    format!("{} {} {}, go {} — null, insert here.", value, side, node.value, dir),
                );
                rec.visit(value);
                return rec.finish(
                    Some(value),
                    1,
                    format!("Created new node {}.", value),
                    StepResult::Found,
                );
            }
        }
    }
}

/// Trace of removing `value`
///
/// Highlights [`crate::pseudocode::REMOVE`]. The two-children case walks
/// the right subtree's left spine down to the in-order successor.
pub fn remove(tree: &Tree, value: Key) -> Vec<Step> {
    let mut rec = Recorder::new();
    let mut current = tree.root();

    while let Some(node) = current {
        rec.visit(node.value);

        if value < node.value {
            rec.step(Some(node.value), 4, format!("{} < {}, go left", value, node.value));
            current = node.left();
            continue;
        }
        if value > node.value {
            rec.step(Some(node.value), 2, format!("{} > {}, go right", value, node.value));
            current = node.right();
            continue;
        }

        return match (node.left(), node.right()) {
            (None, None) => rec.finish(
                Some(node.value),
                7,
                format!("Found {} — it's a leaf, simply delete it.", node.value),
                StepResult::Found,
            ),
            (None, Some(_)) => rec.finish(
                Some(node.value),
                8,
                format!(
                    "Found {} — has only right child, bypass with right subtree.",
                    node.value
                ),
                StepResult::Found,
            ),
            (Some(_), None) => rec.finish(
                Some(node.value),
                8,
                format!(
                    "Found {} — has only left child, bypass with left subtree.",
                    node.value
                ),
                StepResult::Found,
            ),
            (Some(_), Some(right)) => {
                rec.step(
                    Some(node.value),
                    9,
                    format!(
                        "Found {} — has two children. Finding in-order successor…",
                        node.value
                    ),
                );

                let mut succ = right;
                while let Some(left) = succ.left() {
                    rec.visit(succ.value);
                    rec.step(
                        Some(succ.value),
                        10,
                        format!(
                            "Looking for successor: {} has left child, go left",
                            succ.value
                        ),
                    );
                    succ = left;
                }

                rec.visit(succ.value);
                rec.finish(
                    Some(succ.value),
                    10,
                    format!(
                        "Successor is {s}. Swap {v} with {s}, then remove {s}.",
                        s = succ.value,
                        v = node.value
                    ),
                    StepResult::Found,
                )
            }
        };
    }

    rec.finish(
        None,
        1,
        format!("Value {} is not in the BST.", value),
        StepResult::NotFound,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Tree {
        Tree::from_values([50, 25, 75, 12, 37, 62, 87])
    }

    #[test]
    fn test_insert_into_empty() {
        let steps = insert(&Tree::new(), 5);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].node, Some(5));
        assert!(steps[0].visited.is_empty());
        assert_eq!(steps[0].result, Some(StepResult::Found));
    }

    #[test]
    fn test_insert_synthesizes_new_node_step() {
        let steps = insert(&seven(), 40);
        let statuses: Vec<&str> = steps.iter().map(|s| s.status.as_str()).collect();
        assert_eq!(
            statuses,
            vec![
                "40 < 50, go left.",
                "40 > 25, go right.",
                "40 > 37, go right — null, insert here.",
                "Created new node 40.",
            ]
        );
        assert_eq!(steps[3].visited, vec![50, 25, 37, 40]);
        assert_eq!(steps[3].node, Some(40));
    }

    #[test]
    fn test_insert_duplicate_is_not_found() {
        let steps = insert(&seven(), 75);
        let last = steps.last().unwrap();
        assert_eq!(last.status, "75 == 75, duplicate — ignored.");
        assert_eq!(last.highlight_line, 6);
        assert_eq!(last.result, Some(StepResult::NotFound));
    }

    #[test]
    fn test_remove_two_children_walks_to_successor() {
        let steps = remove(&seven(), 25);
        let last = steps.last().unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].highlight_line, 9);
        assert_eq!(last.node, Some(37));
        assert_eq!(last.visited, vec![50, 25, 37]);
        assert_eq!(last.status, "Successor is 37. Swap 25 with 37, then remove 37.");
    }

    #[test]
    fn test_remove_root_successor_spine() {
        let tree = Tree::sample();
        let steps = remove(&tree, 50);
        let last = steps.last().unwrap();
        assert_eq!(last.visited, vec![50, 75, 62, 56]);
        assert_eq!(last.node, Some(56));
    }

    #[test]
    fn test_remove_one_child_cases() {
        let tree = seven().remove(12);
        let steps = remove(&tree, 25);
        assert_eq!(
            steps.last().unwrap().status,
            "Found 25 — has only right child, bypass with right subtree."
        );

        let tree = seven().remove(37);
        let steps = remove(&tree, 25);
        assert_eq!(steps.last().unwrap().highlight_line, 8);
    }

    #[test]
    fn test_remove_missing() {
        let steps = remove(&seven(), 40);
        let last = steps.last().unwrap();
        assert_eq!(last.node, None);
        assert_eq!(last.visited, vec![50, 25, 37]);
        assert_eq!(last.result, Some(StepResult::NotFound));

        let empty = remove(&Tree::new(), 1);
        assert_eq!(empty.len(), 1);
        assert!(empty[0].visited.is_empty());
    }
}
