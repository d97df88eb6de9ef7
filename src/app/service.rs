//! Program controller — the hexagonal core.
//!
//! [`ProgramController`] owns the configuration and run history.  It
//! exposes a single hardware-agnostic operation, [`ProgramController::run`].
//! All I/O flows through port traits injected at call sites, making the
//! entire controller testable with mock adapters.
//!
//! ```text
//!   Door ─────▶ ┌──────────────────────────┐ ──▶ EventSink
//!   DirtFilter ▶│    ProgramController      │
//!   WaterPump ◀─│ preconditions · wash plan │
//!   Engine ◀────└──────────────────────────┘
//! ```
//!
//! A run is strictly ordered: door check, filter check, then the wash plan
//! from [`sequence::wash_plan`](super::sequence::wash_plan).  A failed
//! precondition returns before any pump or engine call.  A failed hardware
//! call aborts the plan at that step; nothing after it runs.

use log::{debug, error, info, warn};

use crate::config::ControllerConfig;
use crate::diagnostics::{RunHistory, RunRecord};
use crate::error::{ConfigError, Error};
use crate::program::{ProgramConfiguration, RunResult, Status};

use super::events::WashEvent;
use super::ports::{Appliance, EventSink, NullSink};
use super::sequence::{WashStep, wash_plan};

// ───────────────────────────────────────────────────────────────
// ProgramController
// ───────────────────────────────────────────────────────────────

/// Sequences one dishwasher run against an [`Appliance`].
pub struct ProgramController {
    config: ControllerConfig,
    history: RunHistory,
    /// Fault that aborted the most recent run, if any.
    last_fault: Option<Error>,
    runs_requested: u32,
}

impl ProgramController {
    /// Construct with factory defaults.
    pub fn new() -> Self {
        Self {
            config: ControllerConfig::default(),
            history: RunHistory::new(),
            last_fault: None,
            runs_requested: 0,
        }
    }

    /// Construct with a validated configuration.
    pub fn with_config(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    // ── Run ───────────────────────────────────────────────────

    /// Execute one run, discarding events.
    pub fn run(&mut self, config: &ProgramConfiguration, hw: &mut impl Appliance) -> RunResult {
        self.run_with(config, hw, &mut NullSink)
    }

    /// Execute one run and report progress through `sink`.
    pub fn run_with(
        &mut self,
        config: &ProgramConfiguration,
        hw: &mut impl Appliance,
        sink: &mut impl EventSink,
    ) -> RunResult {
        self.last_fault = None;
        self.runs_requested = self.runs_requested.wrapping_add(1);
        info!(
            "Run #{} requested: program={} fill={} tablets={}",
            self.runs_requested, config.program, config.fill_level, config.tablets_used
        );
        sink.emit(&WashEvent::RunStarted(*config));

        let result = match self.check_preconditions(&*hw, sink) {
            Err(status) => RunResult::failure(status),
            Ok(()) => match execute_plan(config, hw, sink) {
                Ok(()) => RunResult::success(config.program),
                Err(fault) => {
                    self.last_fault = Some(fault);
                    RunResult::failure(fault.status())
                }
            },
        };

        info!(
            "Run #{} finished: status={} minutes={}",
            self.runs_requested,
            result.status(),
            result.run_minutes()
        );
        if self.config.history_enabled {
            self.history
                .push(RunRecord::new(self.runs_requested, config, result));
        }
        sink.emit(&WashEvent::RunFinished(result));
        result
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Typed hardware fault behind the most recent `ErrorPump` /
    /// `ErrorProgram` result.  Cleared at the start of every run.
    pub fn last_fault(&self) -> Option<Error> {
        self.last_fault
    }

    /// Total `run()` calls since construction, including runs refused at
    /// the door or filter check.
    pub fn runs_requested(&self) -> u32 {
        self.runs_requested
    }

    // ── Internal ──────────────────────────────────────────────

    /// Door first, then filter.  No actuator is touched here.
    fn check_preconditions(
        &self,
        hw: &impl Appliance,
        sink: &mut impl EventSink,
    ) -> Result<(), Status> {
        if !hw.closed() {
            warn!("Door open, refusing to start");
            sink.emit(&WashEvent::PreconditionFailed {
                status: Status::DoorOpen,
                filter_capacity: None,
            });
            return Err(Status::DoorOpen);
        }

        let capacity = hw.capacity();
        if capacity.is_nan() || capacity < self.config.min_filter_capacity_percent {
            warn!(
                "Dirt filter at {:.1}% (minimum {:.1}%), refusing to start",
                capacity, self.config.min_filter_capacity_percent
            );
            sink.emit(&WashEvent::PreconditionFailed {
                status: Status::ErrorFilter,
                filter_capacity: Some(capacity),
            });
            return Err(Status::ErrorFilter);
        }

        Ok(())
    }
}

impl Default for ProgramController {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every planned step in order, stopping at the first failure.
fn execute_plan(
    config: &ProgramConfiguration,
    hw: &mut impl Appliance,
    sink: &mut impl EventSink,
) -> Result<(), Error> {
    for (index, step) in wash_plan(config).into_iter().enumerate() {
        if let Err(e) = execute_step(step, hw) {
            error!("Step {} ({}) failed: {}, aborting run", index, step, e);
            sink.emit(&WashEvent::HardwareFault {
                index,
                step,
                error: e,
            });
            return Err(e);
        }
        debug!("Step {} ({}) done", index, step);
        sink.emit(&WashEvent::StepCompleted { index, step });
    }
    Ok(())
}

fn execute_step(step: WashStep, hw: &mut impl Appliance) -> Result<(), Error> {
    match step {
        WashStep::Pour(level) => hw.pour(level)?,
        WashStep::RunProgram(program) => hw.run_program(program)?,
        WashStep::Drain => hw.drain()?,
    }
    Ok(())
}
