//! CPU scheduling domain models.
//!
//! Provides the input record ([`Process`]) and the output contract shared
//! by every policy ([`TimelineBlock`], [`ProcessResult`],
//! [`SimulationResult`]).
//!
//! # Time Representation
//! All times are integer CPU-time units relative to t=0. No wall-clock
//! meaning is attached to a unit.

mod process;
mod result;
mod timeline;

pub use process::{InvalidQueueLevel, Process, QueueLevel};
pub use result::{PolicyAttribute, ProcessResult, SimulationResult};
pub use timeline::TimelineBlock;

/// Simulation time in CPU-time units.
pub type Time = i64;
