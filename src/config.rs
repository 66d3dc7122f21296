use std::time::Duration;

/// Pacing used by the walkthrough player unless configured otherwise.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(1500);

/// What [`RbTree::delete`](crate::RbTree::delete) does after unlinking a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteMode {
    /// Run the double-black fixup, all red-black rules hold afterwards.
    Rebalance,
    /// Plain BST splice, only the root is forced black. Black-height can
    /// become unbalanced.
    SpliceOnly,
}

impl Default for DeleteMode {
    fn default() -> DeleteMode {
        DeleteMode::Rebalance
    }
}

/// Configuration for an [`RbTree`](crate::RbTree) instance and its
/// walkthrough.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    name: String,
    step_delay: Duration,
    delete_mode: DeleteMode,
}

impl Config {
    /// Create a default configuration for a tree identified by `name`.
    pub fn new<S>(name: S) -> Config
    where
        S: AsRef<str>,
    {
        Config {
            name: name.as_ref().to_string(),
            ..Default::default()
        }
    }

    /// Delay the [`Player`](crate::Player) waits between two steps.
    pub fn set_step_delay(&mut self, delay: Duration) -> &mut Self {
        self.step_delay = delay;
        self
    }

    pub fn set_delete_mode(&mut self, mode: DeleteMode) -> &mut Self {
        self.delete_mode = mode;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    #[inline]
    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            name: "rbtree".to_string(),
            step_delay: DEFAULT_STEP_DELAY,
            delete_mode: Default::default(),
        }
    }
}
