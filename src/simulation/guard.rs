//! Non-termination guard.

use tracing::warn;

/// Default maximum number of scheduling steps per simulation.
pub const DEFAULT_STEP_LIMIT: usize = 100_000;

/// Counts loop iterations and refuses to continue past a hard limit.
///
/// Tripping the guard is not an error: the policy stops and returns the
/// timeline built so far. A result shorter than expected signals
/// malformed parameters.
#[derive(Debug, Clone)]
pub struct StepGuard {
    policy: &'static str,
    limit: usize,
    steps: usize,
}

impl StepGuard {
    /// Creates a guard for the named policy.
    pub fn new(policy: &'static str, limit: usize) -> Self {
        Self {
            policy,
            limit,
            steps: 0,
        }
    }

    /// Records one step. Returns `false` once the limit is exceeded.
    pub fn tick(&mut self) -> bool {
        if self.steps >= self.limit {
            if self.steps == self.limit {
                warn!(
                    policy = self.policy,
                    limit = self.limit,
                    "step limit reached, stopping simulation early"
                );
                self.steps += 1;
            }
            return false;
        }
        self.steps += 1;
        true
    }

    /// Steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps.min(self.limit)
    }

    /// Whether the limit has been hit.
    pub fn tripped(&self) -> bool {
        self.steps > self.limit
    }
}

impl Default for StepGuard {
    fn default() -> Self {
        Self::new("simulation", DEFAULT_STEP_LIMIT)
    }
}
