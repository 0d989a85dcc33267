//! Worked scenarios on small, hand-checkable trees

use bst_steps::{steps, Operation, Order, Session, StepResult, Tree};

mod common;
use common::{final_trail, seven};

#[test]
fn search_found_and_missing() {
    let tree = seven();

    let hit = steps::search(&tree, 37);
    assert_eq!(final_trail(&hit), vec![50, 25, 37]);
    assert_eq!(hit.last().unwrap().node, Some(37));
    assert_eq!(hit.last().unwrap().result, Some(StepResult::Found));

    let miss = steps::search(&tree, 40);
    assert_eq!(final_trail(&miss), vec![50, 25, 37]);
    assert_eq!(miss.last().unwrap().node, None);
    assert_eq!(miss.last().unwrap().result, Some(StepResult::NotFound));
}

#[test]
fn remove_two_children_replaces_with_successor() {
    let tree = seven();
    let trace = Operation::Remove(25).run(&tree);

    assert_eq!(trace.answer(), Some(37));
    assert_eq!(
        trace.after.values(Order::Inorder),
        vec![12, 37, 50, 62, 75, 87]
    );
    let left = trace.after.root().and_then(|root| root.left()).map(|n| n.value);
    assert_eq!(left, Some(37));
    // input snapshot untouched
    assert_eq!(tree.count(), 7);
}

#[test]
fn select_by_rank() {
    let tree = seven();
    assert_eq!(steps::select(&tree, 1).last().unwrap().node, Some(12));
    assert_eq!(steps::select(&tree, 7).last().unwrap().node, Some(87));

    let out = steps::select(&tree, 8);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].result, Some(StepResult::NotFound));
}

#[test]
fn empty_tree_yields_single_not_found_step() {
    let empty = Tree::new();
    let traces = [
        steps::search(&empty, 1),
        steps::lower_bound(&empty, 1),
        steps::min(&empty),
        steps::max(&empty),
        steps::remove(&empty, 1),
        steps::predecessor(&empty, 1),
        steps::successor(&empty, 1),
        steps::select(&empty, 1),
        steps::inorder(&empty),
        steps::preorder(&empty),
        steps::postorder(&empty),
    ];

    for trace in traces {
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].result, Some(StepResult::NotFound));
        assert!(trace[0].visited.is_empty());
        assert_eq!(trace[0].node, None);
    }
}

#[test]
fn insert_into_empty_tree_creates_root() {
    let trace = Operation::Insert(9).run(&Tree::new());
    assert_eq!(trace.steps.len(), 1);
    assert_eq!(trace.result(), Some(StepResult::Found));
    assert_eq!(trace.after.values(Order::Preorder), vec![9]);
}

#[test]
fn session_replays_a_lesson() {
    let mut session = Session::sample();
    let traces = session
        .run_script("search 43; insert 44; successor 43; remove 50; select 9")
        .expect("script parses");

    assert_eq!(traces[0].result(), Some(StepResult::Found));
    assert_eq!(traces[2].answer(), Some(44));
    // 56 replaces the root after removing 50
    assert_eq!(session.tree().root().map(|n| n.value), Some(56));
    assert_eq!(traces[4].answer(), Some(56));
}

#[test]
fn remove_trace_matches_golden() {
    let trace = Operation::Remove(25).run(&seven());
    common::assert_trace_golden("remove_25.txt", &trace);
}
