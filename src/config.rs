use serde::{Deserialize, Serialize};

use crate::kernel::DEFAULT_EPSILON;

/// Decimal places used by [`equal`](crate::relate::equal) unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 6;

/// Factor applied to the tolerance each time a simplified ring collapses.
pub const DEFAULT_SIMPLIFY_DECAY: f64 = 0.99;

/// Numeric tolerances shared by the predicates and the simplifier.
///
/// Missing fields take their defaults when deserializing, so a partial
/// configuration such as `{"precision": 3}` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collinearity and on-segment tolerance.
    pub epsilon: f64,
    /// Decimal places compared by the equality relationship.
    pub precision: u32,
    /// Tolerance decay used when a simplified ring becomes invalid. Must
    /// lie in `(0, 1)`.
    pub simplify_decay: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            epsilon: DEFAULT_EPSILON,
            precision: DEFAULT_PRECISION,
            simplify_decay: DEFAULT_SIMPLIFY_DECAY,
        }
    }
}

impl Config {
    /// Returns a copy with the given collinearity tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns a copy with the given equality precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Decay factor clamped into a range that always shrinks the tolerance.
    pub(crate) fn decay(&self) -> f64 {
        if self.simplify_decay > 0. && self.simplify_decay < 1. {
            self.simplify_decay
        } else {
            DEFAULT_SIMPLIFY_DECAY
        }
    }
}
