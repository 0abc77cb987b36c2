//! Shared stepping primitives for single-CPU discrete-event simulation.
//!
//! Every policy is built from the same three pieces:
//!
//! - [`WorkingSet`]: per-call remaining burst, indexed by input position.
//! - [`TimelineRecorder`]: owns the clock, emits idle/execution blocks and
//!   counts one context switch per emitted block.
//! - [`StepGuard`]: bounded iteration counter that stops degenerate
//!   inputs (zero quantum, non-positive bursts) from looping forever.
//!
//! All state is local to one policy call and dropped when the
//! [`SimulationResult`](crate::models::SimulationResult) is returned.

mod guard;
mod recorder;
mod working_set;

pub use guard::{StepGuard, DEFAULT_STEP_LIMIT};
pub use recorder::TimelineRecorder;
pub use working_set::WorkingSet;
