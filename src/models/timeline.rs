//! Timeline (Gantt) blocks.

use serde::{Deserialize, Serialize};

use super::Time;

/// One contiguous interval of CPU occupancy.
///
/// Either the CPU idles or exactly one process runs. `end > start` for
/// every block a policy emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimelineBlock {
    /// No process is ready.
    Idle {
        /// Start time (inclusive).
        start: Time,
        /// End time (exclusive).
        end: Time,
    },
    /// A process occupies the CPU.
    Execution {
        /// Running process.
        pid: String,
        /// Start time (inclusive).
        start: Time,
        /// End time (exclusive).
        end: Time,
    },
}

impl TimelineBlock {
    /// Creates an idle block.
    pub fn idle(start: Time, end: Time) -> Self {
        Self::Idle { start, end }
    }

    /// Creates an execution block.
    pub fn execution(pid: impl Into<String>, start: Time, end: Time) -> Self {
        Self::Execution {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Start time.
    #[inline]
    pub fn start(&self) -> Time {
        match self {
            Self::Idle { start, .. } | Self::Execution { start, .. } => *start,
        }
    }

    /// End time.
    #[inline]
    pub fn end(&self) -> Time {
        match self {
            Self::Idle { end, .. } | Self::Execution { end, .. } => *end,
        }
    }

    /// Length of the block.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end() - self.start()
    }

    /// Running process, `None` for idle blocks.
    pub fn pid(&self) -> Option<&str> {
        match self {
            Self::Idle { .. } => None,
            Self::Execution { pid, .. } => Some(pid),
        }
    }

    /// Whether the CPU idles during this block.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }
}
