//! Interactive session
//!
//! Holds the current tree snapshot and runs operations against it.
//! Each run returns the complete trace; mutating operations then swap in
//! the new snapshot. No timers live here: the caller decides how fast to
//! show the steps and drops a trace to cancel it.

mod config;

pub use config::{
    ConfigError, Palette, SessionConfig, DEFAULT_RANDOM_COUNT, DEFAULT_RANDOM_RANGE,
    DEFAULT_STEP_DELAY,
};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::operation::{Operation, Trace};
use crate::tree::{Key, Tree};
use crate::Result;

/// Current tree plus the configuration it was created with
#[derive(Debug)]
pub struct Session {
    tree: Tree,
    config: SessionConfig,
    rng: StdRng,
}

impl Session {
    /// Create a session from a validated configuration
    pub fn new(config: SessionConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let tree = Tree::from_values(config.initial_values.iter().copied());
        debug!(
            nodes = tree.count(),
            height = tree.height(),
            palette = %config.palette,
            "session created"
        );

        Ok(Self { tree, config, rng })
    }

    /// Session over the default sample tree
    pub fn sample() -> Self {
        Self {
            tree: Tree::sample(),
            config: SessionConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Current snapshot
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Configuration in use
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run `op` against the current snapshot
    ///
    /// The trace is generated before the tree is replaced, so its steps
    /// describe the tree as it was when the operation started.
    pub fn run(&mut self, op: Operation) -> Trace {
        let trace = op.run(&self.tree);
        debug!(
            op = %trace.label,
            steps = trace.steps.len(),
            result = ?trace.result(),
            "operation traced"
        );

        if op.is_mutating() {
            self.tree = trace.after.clone();
            trace!(nodes = self.tree.count(), "tree replaced");
        }
        trace
    }

    /// Parse and run a script of operations separated by `;` or newlines
    ///
    /// Parsing happens first: a malformed command runs nothing.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<Trace>> {
        let ops = script
            .split(|c: char| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::parse::<Operation>)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ops.into_iter().map(|op| self.run(op)).collect())
    }

    /// Replace the tree with one built from `values`
    pub fn reset<I>(&mut self, values: I) -> &Tree
    where
        I: IntoIterator<Item = Key>,
    {
        self.tree = Tree::from_values(values);
        debug!(nodes = self.tree.count(), "tree rebuilt");
        &self.tree
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.tree = Tree::new();
    }

    /// Replace the tree with `count` distinct random keys from the configured range
    ///
    /// Keys are inserted in draw order, so the shape varies with the seed.
    pub fn create_random(&mut self, count: usize) -> std::result::Result<&Tree, ConfigError> {
        let values = self.draw(count)?;
        debug!(count, ?values, "random tree drawn");
        Ok(self.reset(values))
    }

    /// Replace the tree with `count` distinct random keys inserted in ascending order
    ///
    /// Every key lands as the right child of the previous one: a single
    /// right spine of height `count - 1`.
    pub fn create_skewed(&mut self, count: usize) -> std::result::Result<&Tree, ConfigError> {
        let mut values = self.draw(count)?;
        values.sort_unstable();
        debug!(count, ?values, "skewed tree drawn");
        Ok(self.reset(values))
    }

    /// `count` distinct keys from the random range, in draw order
    fn draw(&mut self, count: usize) -> std::result::Result<Vec<Key>, ConfigError> {
        self.config.check_random(count)?;

        let start = *self.config.random_range.start();
        let picks = rand::seq::index::sample(&mut self.rng, self.config.range_len(), count);
        Ok(picks
            .into_iter()
            .map(|offset| start.wrapping_add(offset as Key))
            .collect())
    }

    /// [`Session::create_random`] with the configured count
    pub fn create_random_default(&mut self) -> std::result::Result<&Tree, ConfigError> {
        self.create_random(self.config.random_count)
    }

    /// [`Session::create_skewed`] with the configured count
    pub fn create_skewed_default(&mut self) -> std::result::Result<&Tree, ConfigError> {
        self.create_skewed(self.config.random_count)
    }
}
