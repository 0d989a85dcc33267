//! # Step-by-step binary search tree engine
//!
//! This library turns binary search tree operations into ordered,
//! replayable animation traces for teaching the algorithms.
//!
//! ## Core Pieces
//!
//! 1. **Persistent tree**: immutable nodes, path copying on insert/remove,
//!    every older snapshot stays valid
//! 2. **Step generators**: pure functions `(tree, params) → Vec<Step>`,
//!    each step carrying the active node, a status line, a pseudocode line
//!    and the visited trail so far
//! 3. **Operation catalogue**: label + pseudocode listing + generator +
//!    effect on the tree, per operation
//! 4. **Session**: current snapshot, random creation, script runs
//!
//! Traces are generated completely before anything is shown; pacing and
//! cancellation of playback belong to the consumer.
//!
//! ## Usage Example
//!
//! ```
//! use bst_steps::{steps, StepResult, Tree};
//!
//! let tree = Tree::from_values([50, 25, 75, 12, 37, 62, 87]);
//! let trace = steps::search(&tree, 37);
//!
//! let last = trace.last().unwrap();
//! assert_eq!(last.visited, vec![50, 25, 37]);
//! assert_eq!(last.result, Some(StepResult::Found));
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod tree;       // Persistent BST and structural operations
pub mod steps;      // Step generators
pub mod pseudocode; // Fixed listings indexed by Step::highlight_line
pub mod operation;  // Operation catalogue and traces
pub mod input;      // User input parsing
pub mod session;    // Current-tree session and configuration

// Re-exports for convenience
pub use tree::{Key, Node, Order, Tree, SAMPLE_VALUES};
pub use steps::{Step, StepResult};
pub use operation::{Operation, Trace};
pub use input::{parse_key, parse_values, ParseError};
pub use session::{ConfigError, Palette, Session, SessionConfig};

use thiserror::Error;

/// Errors surfaced by the fallible (input and configuration) layers
///
/// Tree operations and step generators never fail: a missing key, an empty
/// tree or an out-of-range index is reported by the trace itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed user input
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Unusable configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for the fallible layers
pub type Result<T> = std::result::Result<T, Error>;

/// Parse `values` and build a tree from them in order
pub fn build_from_str(values: &str) -> Result<Tree> {
    Ok(Tree::from_values(parse_values(values)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_str() {
        let tree = build_from_str("2, 1, 3").unwrap();
        assert_eq!(tree.values(Order::Inorder), vec![1, 2, 3]);
    }

    #[test]
    fn test_build_from_str_rejects_garbage() {
        assert_eq!(
            build_from_str("2, x"),
            Err(Error::Parse(ParseError::InvalidNumber("x".to_string())))
        );
    }
}
