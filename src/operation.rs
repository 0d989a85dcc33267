//! Operation catalogue
//!
//! Ties each operation to its step generator, its pseudocode listing and
//! its effect on the tree, and bundles one run into a [`Trace`].

use std::fmt;
use std::str::FromStr;

use crate::input::{parse_key, ParseError};
use crate::pseudocode;
use crate::steps::{self, Step, StepResult};
use crate::tree::{Key, Order, Tree};

/// Every operation that produces a step trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "op", content = "arg", rename_all = "kebab-case")
)]
pub enum Operation {
    /// Exact search for a key
    Search(Key),
    /// Smallest key `>=` the argument
    LowerBound(Key),
    /// Minimum key
    Min,
    /// Maximum key
    Max,
    /// Insert a key (duplicates ignored)
    Insert(Key),
    /// Remove a key (absent keys ignored)
    Remove(Key),
    /// In-order predecessor of a key
    Predecessor(Key),
    /// In-order successor of a key
    Successor(Key),
    /// k-th smallest key, 1-indexed
    Select(i64),
    /// In-order traversal
    Inorder,
    /// Pre-order traversal
    Preorder,
    /// Post-order traversal
    Postorder,
}

impl Operation {
    /// Display label, e.g. `Search(37)` or `FindMin()`
    pub fn label(&self) -> String {
        match self {
            Operation::Search(v) => format!("Search({})", v),
            Operation::LowerBound(v) => format!("LowerBound({})", v),
            Operation::Min => "FindMin()".to_string(),
            Operation::Max => "FindMax()".to_string(),
            Operation::Insert(v) => format!("Insert({})", v),
            Operation::Remove(v) => format!("Remove({})", v),
            Operation::Predecessor(v) => format!("Predecessor({})", v),
            Operation::Successor(v) => format!("Successor({})", v),
            Operation::Select(k) => format!("Select({})", k),
            Operation::Inorder => "Inorder()".to_string(),
            Operation::Preorder => "Preorder()".to_string(),
            Operation::Postorder => "Postorder()".to_string(),
        }
    }

    /// Listing that this operation's steps highlight into
    pub fn pseudocode(&self) -> &'static [&'static str] {
        match self {
            Operation::Search(_) => pseudocode::SEARCH,
            Operation::LowerBound(_) => pseudocode::LOWER_BOUND,
            Operation::Min | Operation::Max => pseudocode::MIN_MAX,
            Operation::Insert(_) => pseudocode::INSERT,
            Operation::Remove(_) => pseudocode::REMOVE,
            Operation::Predecessor(_) => pseudocode::PREDECESSOR,
            Operation::Successor(_) => pseudocode::SUCCESSOR,
            Operation::Select(_) => pseudocode::SELECT,
            Operation::Inorder => pseudocode::INORDER,
            Operation::Preorder => pseudocode::PREORDER,
            Operation::Postorder => pseudocode::POSTORDER,
        }
    }

    /// Whether running this operation replaces the tree
    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Insert(_) | Operation::Remove(_))
    }

    /// Generate the step trace against `tree`
    pub fn steps(&self, tree: &Tree) -> Vec<Step> {
        match *self {
            Operation::Search(v) => steps::search(tree, v),
            Operation::LowerBound(v) => steps::lower_bound(tree, v),
            Operation::Min => steps::min(tree),
            Operation::Max => steps::max(tree),
            Operation::Insert(v) => steps::insert(tree, v),
            Operation::Remove(v) => steps::remove(tree, v),
            Operation::Predecessor(v) => steps::predecessor(tree, v),
            Operation::Successor(v) => steps::successor(tree, v),
            Operation::Select(k) => steps::select(tree, k),
            Operation::Inorder => steps::traverse(tree, Order::Inorder),
            Operation::Preorder => steps::traverse(tree, Order::Preorder),
            Operation::Postorder => steps::traverse(tree, Order::Postorder),
        }
    }

    /// Tree after the operation (the same snapshot for read-only operations)
    pub fn apply(&self, tree: &Tree) -> Tree {
        match *self {
            Operation::Insert(v) => tree.insert(v),
            Operation::Remove(v) => tree.remove(v),
            _ => tree.clone(),
        }
    }

    /// Generate the trace and the resulting tree in one go
    pub fn run(&self, tree: &Tree) -> Trace {
        Trace {
            label: self.label(),
            code: self.pseudocode(),
            steps: self.steps(tree),
            before: tree.clone(),
            after: self.apply(tree),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    /// Accepts `search 37`, `search:37`, `Search(37)`, `FindMin()`, `min`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .map(|c| if matches!(c, '(' | ')' | ':' | ',') { ' ' } else { c })
            .collect();
        let mut tokens = normalized.split_whitespace();
        let verb = tokens.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
        let arg = tokens.next();
        if let Some(extra) = tokens.next() {
            return Err(ParseError::UnexpectedArgument {
                op: verb,
                extra: extra.to_string(),
            });
        }

        let keyed = |make: fn(Key) -> Operation| -> Result<Operation, ParseError> {
            let token = arg.ok_or_else(|| ParseError::MissingArgument(verb.clone()))?;
            parse_key(token).map(make)
        };
        let bare = |op: Operation| -> Result<Operation, ParseError> {
            match arg {
                Some(extra) => Err(ParseError::UnexpectedArgument {
                    op: verb.clone(),
                    extra: extra.to_string(),
                }),
                None => Ok(op),
            }
        };

        match verb.as_str() {
            "search" | "find" => keyed(Operation::Search),
            "lower-bound" | "lower_bound" | "lowerbound" => keyed(Operation::LowerBound),
            "min" | "findmin" => bare(Operation::Min),
            "max" | "findmax" => bare(Operation::Max),
            "insert" => keyed(Operation::Insert),
            "remove" | "delete" => keyed(Operation::Remove),
            "predecessor" | "pred" => keyed(Operation::Predecessor),
            "successor" | "succ" => keyed(Operation::Successor),
            "select" => keyed(Operation::Select),
            "inorder" => bare(Operation::Inorder),
            "preorder" => bare(Operation::Preorder),
            "postorder" => bare(Operation::Postorder),
            _ => Err(ParseError::UnknownOperation(verb.clone())),
        }
    }
}

/// One complete run of an operation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trace {
    /// Operation label
    pub label: String,

    /// Pseudocode listing the steps index into
    pub code: &'static [&'static str],

    /// Ordered steps, terminal step last
    pub steps: Vec<Step>,

    /// Snapshot the steps were generated against
    #[cfg_attr(feature = "serde", serde(skip))]
    pub before: Tree,

    /// Snapshot after the operation
    #[cfg_attr(feature = "serde", serde(skip))]
    pub after: Tree,
}

impl Trace {
    /// Terminal step (every trace has one)
    pub fn terminal(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Outcome carried by the terminal step
    pub fn result(&self) -> Option<StepResult> {
        self.terminal().and_then(|step| step.result)
    }

    /// Node carried by the terminal step
    pub fn answer(&self) -> Option<Key> {
        self.terminal().and_then(|step| step.node)
    }

    /// Line currently highlighted by step `index`, if both exist
    pub fn highlighted(&self, index: usize) -> Option<&'static str> {
        let line = self.steps.get(index)?.highlight_line;
        self.code.get(line).copied()
    }

    /// BLAKE3 digest of the rendered trace
    ///
    /// Two traces with equal fingerprints rendered identically.
    pub fn fingerprint(&self) -> blake3::Hash {
        blake3::hash(self.to_string().as_bytes())
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        for (idx, line) in self.code.iter().enumerate() {
            writeln!(f, "  {:>2} | {}", idx, line)?;
        }
        for (idx, step) in self.steps.iter().enumerate() {
            writeln!(f, "  #{:<3} {}", idx, step)?;
        }
        Ok(())
    }
}
