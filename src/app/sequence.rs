//! Wash plan construction.
//!
//! A run is a flat list of [`WashStep`]s computed up front from the
//! configuration, then executed in order by the controller:
//!
//! ```text
//!  primary:  Pour(level) ─▶ RunProgram(program) ─▶ Drain
//!  appendix: Pour(Full)  ─▶ RunProgram(Rinse)   ─▶ Drain   (program != Rinse)
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::program::{FillLevel, ProgramConfiguration, WashingProgram};

/// Steps in one wash sequence.
pub const STEPS_PER_SEQUENCE: usize = 3;

/// Upper bound on plan length: primary sequence plus rinse appendix.
pub const MAX_PLAN_STEPS: usize = 2 * STEPS_PER_SEQUENCE;

/// Fill level used by the rinse appendix regardless of the request.
pub const APPENDIX_FILL_LEVEL: FillLevel = FillLevel::Full;

/// A single hardware action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WashStep {
    Pour(FillLevel),
    RunProgram(WashingProgram),
    Drain,
}

impl fmt::Display for WashStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pour(level) => write!(f, "pour({level})"),
            Self::RunProgram(program) => write!(f, "run({program})"),
            Self::Drain => write!(f, "drain"),
        }
    }
}

/// Ordered steps for one run.
pub type WashPlan = heapless::Vec<WashStep, MAX_PLAN_STEPS>;

/// Pour, run, drain.
pub const fn primary_sequence(
    level: FillLevel,
    program: WashingProgram,
) -> [WashStep; STEPS_PER_SEQUENCE] {
    [
        WashStep::Pour(level),
        WashStep::RunProgram(program),
        WashStep::Drain,
    ]
}

/// Whether `program` is followed by a rinse appendix.
pub const fn needs_rinse_appendix(program: WashingProgram) -> bool {
    !program.is_rinse()
}

/// Build the full plan for `config`.
pub fn wash_plan(config: &ProgramConfiguration) -> WashPlan {
    let mut plan = WashPlan::new();
    push_sequence(
        &mut plan,
        primary_sequence(config.fill_level, config.program),
    );
    if needs_rinse_appendix(config.program) {
        push_sequence(
            &mut plan,
            primary_sequence(APPENDIX_FILL_LEVEL, WashingProgram::Rinse),
        );
    }
    plan
}

fn push_sequence(plan: &mut WashPlan, seq: [WashStep; STEPS_PER_SEQUENCE]) {
    // Capacity is sized for two sequences; a third would be a logic error.
    let pushed = plan.extend_from_slice(&seq);
    debug_assert!(pushed.is_ok(), "wash plan overflow");
}
