//! Step generators
//!
//! Each generator replays one operation against an immutable tree snapshot
//! and returns the complete, ordered trace up front. Nothing here knows
//! about timing: pacing the trace belongs to whoever displays it.
//!
//! Shape of every trace:
//! - never empty; the last step (and only the last) carries a [`StepResult`]
//! - each step owns a copy of the visited trail, which only ever grows
//! - `highlight_line` indexes the operation's [`crate::pseudocode`] listing

mod order;
mod search;
mod update;
mod walk;

pub use order::{predecessor, select, successor};
pub use search::{lower_bound, max, min, search};
pub use update::{insert, remove};
pub use walk::{inorder, postorder, preorder, traverse};

use std::fmt;

use crate::tree::Key;

/// Terminal outcome of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StepResult {
    /// Operation located (or created) its target
    Found,

    /// Target absent, tree empty, index out of range, or duplicate insert
    NotFound,
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepResult::Found => write!(f, "found"),
            StepResult::NotFound => write!(f, "not-found"),
        }
    }
}

/// One unit of observable progress
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Step {
    /// Node under examination; `None` means "no node"
    #[cfg_attr(feature = "serde", serde(rename = "nodeValue"))]
    pub node: Option<Key>,

    /// Human-readable status line
    #[cfg_attr(feature = "serde", serde(rename = "statusText"))]
    pub status: String,

    /// 0-based pseudocode line to highlight
    pub highlight_line: usize,

    /// Keys visited so far, in visiting order
    #[cfg_attr(feature = "serde", serde(rename = "visitedSoFar"))]
    pub visited: Vec<Key>,

    /// Set on the terminal step only
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub result: Option<StepResult>,
}

impl Step {
    /// Whether this is the terminal step of its trace
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => write!(f, "node={:<4}", node)?,
            None => write!(f, "node=-   ")?,
        }
        write!(f, " line={:<2} trail={:?} {}", self.highlight_line, self.visited, self.status)?;
        if let Some(result) = self.result {
            write!(f, " [{}]", result)?;
        }
        Ok(())
    }
}

/// Accumulates steps and the running visited trail for one generator run
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    steps: Vec<Step>,
    visited: Vec<Key>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `key` to the trail
    pub(crate) fn visit(&mut self, key: Key) {
        self.visited.push(key);
    }

    /// Record a non-terminal step
    pub(crate) fn step(&mut self, node: Option<Key>, line: usize, status: impl Into<String>) {
        self.push(node, line, status.into(), None);
    }

    /// Record the terminal step and hand back the trace
    pub(crate) fn finish(
        mut self,
        node: Option<Key>,
        line: usize,
        status: impl Into<String>,
        result: StepResult,
    ) -> Vec<Step> {
        self.push(node, line, status.into(), Some(result));
        self.steps
    }

    /// Promote the last recorded step to terminal, appending `suffix` to its status
    ///
    /// Falls back to `otherwise` when nothing was recorded.
    pub(crate) fn finish_last(
        mut self,
        suffix: &str,
        result: StepResult,
        otherwise: impl FnOnce(Self) -> Vec<Step>,
    ) -> Vec<Step> {
        match self.steps.last_mut() {
            Some(last) => {
                last.status.push_str(suffix);
                last.result = Some(result);
                self.steps
            }
            None => otherwise(self),
        }
    }

    fn push(&mut self, node: Option<Key>, line: usize, status: String, result: Option<StepResult>) {
        self.steps.push(Step {
            node,
            status,
            highlight_line: line,
            visited: self.visited.clone(),
            result,
        });
    }
}
