use serde::{Deserialize, Serialize};

/// Matches the fixed stack size scripts were written against.
pub const DEFAULT_STACK_CAPACITY: usize = 100;
pub const DEFAULT_MAX_NESTING: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of values on the data stack.
    pub stack_capacity: usize,
    /// Maximum depth of quotations invoking quotations.
    pub max_nesting: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_STACK_CAPACITY,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}
