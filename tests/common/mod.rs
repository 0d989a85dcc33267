#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use bst_steps::{Step, Trace, Tree};

/// The seven-node tree used across scenarios
pub const SEVEN: [i64; 7] = [50, 25, 75, 12, 37, 62, 87];

pub fn seven() -> Tree {
    Tree::from_values(SEVEN)
}

/// Keys on the terminal step's trail
pub fn final_trail(steps: &[Step]) -> Vec<i64> {
    steps.last().map(|s| s.visited.clone()).unwrap_or_default()
}

/// Compare a rendered trace against `tests/snapshots/<name>`
///
/// Lines are compared one by one (CRLF tolerant) and the first mismatch is
/// reported with its line number. `BST_STEPS_UPDATE_SNAPSHOTS=1` rewrites
/// the file from `trace` instead.
pub fn assert_trace_golden(name: &str, trace: &Trace) {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "snapshots", name]
        .iter()
        .collect();
    let actual = trace.to_string();

    if std::env::var_os("BST_STEPS_UPDATE_SNAPSHOTS").is_some() {
        fs::write(&path, &actual).unwrap();
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("missing golden {}: {}", path.display(), err));
    let (want, got): (Vec<&str>, Vec<&str>) = (expected.lines().collect(), actual.lines().collect());

    if let Some(idx) = (0..want.len().max(got.len())).find(|&i| want.get(i) != got.get(i)) {
        panic!(
            "{} ({} steps) differs from {} at line {}:\n  golden: {:?}\n  traced: {:?}\nrerun with BST_STEPS_UPDATE_SNAPSHOTS=1 to accept",
            trace.label,
            trace.steps.len(),
            path.display(),
            idx + 1,
            want.get(idx),
            got.get(idx),
        );
    }
}
