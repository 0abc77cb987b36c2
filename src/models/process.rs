//! Process (input) model.
//!
//! A process is a CPU-bound unit of work known before the simulation
//! starts: it arrives at a fixed time and needs a fixed amount of CPU.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Time;

/// Queue assignment for Multilevel Queue scheduling.
///
/// A process is bound to one queue for its whole lifetime. Lower levels
/// are served first.
///
/// | Level | Discipline | Quantum |
/// |-------|-----------|---------|
/// | `System` (0) | Round Robin | 2 |
/// | `Interactive` (1) | Round Robin | 4 |
/// | `Batch` (2) | FCFS | unbounded |
///
/// Serialized as its numeric index.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum QueueLevel {
    /// Queue 0.
    #[default]
    System,
    /// Queue 1.
    Interactive,
    /// Queue 2.
    Batch,
}

impl QueueLevel {
    /// All levels, highest priority first.
    pub const ALL: [QueueLevel; 3] = [
        QueueLevel::System,
        QueueLevel::Interactive,
        QueueLevel::Batch,
    ];

    /// Level for a numeric queue index (0, 1 or 2).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::System),
            1 => Some(Self::Interactive),
            2 => Some(Self::Batch),
            _ => None,
        }
    }

    /// Level for arbitrary numeric input, clamped into 0..=2.
    pub fn clamped(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Self::System,
            1 => Self::Interactive,
            _ => Self::Batch,
        }
    }

    /// Numeric queue index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Time quantum of this queue. `None` = runs to completion (FCFS).
    pub fn quantum(self) -> Option<Time> {
        match self {
            Self::System => Some(2),
            Self::Interactive => Some(4),
            Self::Batch => None,
        }
    }
}

/// Queue index outside 0..=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidQueueLevel(pub u8);

impl fmt::Display for InvalidQueueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue level {} is not in 0..=2", self.0)
    }
}

impl std::error::Error for InvalidQueueLevel {}

impl TryFrom<u8> for QueueLevel {
    type Error = InvalidQueueLevel;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(InvalidQueueLevel(index))
    }
}

impl From<QueueLevel> for u8 {
    fn from(level: QueueLevel) -> Self {
        level as u8
    }
}

/// A process to be scheduled.
///
/// Immutable once handed to a policy; every policy keeps its own working
/// copy of remaining burst and run markers.
///
/// # Fields used per policy
/// - `priority`: Priority scheduling only (lower value = dispatched first).
/// - `queue_level`: Multilevel Queue only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Time at which the process becomes ready.
    pub arrival: Time,
    /// Total CPU time required.
    pub burst: Time,
    /// Scheduling priority (lower = more urgent).
    #[serde(default)]
    pub priority: i32,
    /// Fixed Multilevel Queue assignment.
    #[serde(default)]
    pub queue_level: QueueLevel,
}

impl Process {
    /// Creates a process with default priority (0) and queue level (0).
    pub fn new(pid: impl Into<String>, arrival: Time, burst: Time) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: 0,
            queue_level: QueueLevel::System,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the Multilevel Queue assignment.
    pub fn with_queue_level(mut self, queue_level: QueueLevel) -> Self {
        self.queue_level = queue_level;
        self
    }
}
