//! Outbound controller events.
//!
//! The [`ProgramController`](super::service::ProgramController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them.

use crate::error::Error;
use crate::program::{ProgramConfiguration, RunResult, Status};

use super::sequence::WashStep;

/// Structured events emitted during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum WashEvent {
    /// A run was requested.
    RunStarted(ProgramConfiguration),

    /// Door or filter check refused the run.  Carries the filter reading
    /// when the filter was the cause.
    PreconditionFailed { status: Status, filter_capacity: Option<f32> },

    /// One wash step finished.  `index` is its position in the plan.
    StepCompleted { index: usize, step: WashStep },

    /// A hardware call failed; the run is aborted at `step`.
    HardwareFault { index: usize, step: WashStep, error: Error },

    /// The run is over, whatever the outcome.
    RunFinished(RunResult),
}
