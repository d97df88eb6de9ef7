//! Wash program value types.
//!
//! Everything the caller hands to the controller and everything it gets
//! back: the requested program, the fill level, and the run result.
//! All types are plain `Copy` values with no behaviour beyond the data
//! intrinsic to each variant.

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Washing program
// ---------------------------------------------------------------------------

/// A selectable wash program. Each variant carries its nominal duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WashingProgram {
    Eco,
    Intensive,
    Night,
    Rinse,
}

impl WashingProgram {
    /// Every program, in front-panel order.
    pub const ALL: [Self; 4] = [Self::Eco, Self::Intensive, Self::Night, Self::Rinse];

    /// Nominal program duration in minutes.
    pub const fn duration_minutes(self) -> u32 {
        match self {
            Self::Eco => 90,
            Self::Intensive => 120,
            Self::Night => 180,
            Self::Rinse => 12,
        }
    }

    /// True for the program used by the rinse appendix.
    pub const fn is_rinse(self) -> bool {
        matches!(self, Self::Rinse)
    }
}

impl fmt::Display for WashingProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eco => write!(f, "ECO"),
            Self::Intensive => write!(f, "INTENSIVE"),
            Self::Night => write!(f, "NIGHT"),
            Self::Rinse => write!(f, "RINSE"),
        }
    }
}

// ---------------------------------------------------------------------------
// Fill level
// ---------------------------------------------------------------------------

/// Discrete water fill amount requested from the pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillLevel {
    Half,
    Full,
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Half => write!(f, "HALF"),
            Self::Full => write!(f, "FULL"),
        }
    }
}

// ---------------------------------------------------------------------------
// Program configuration
// ---------------------------------------------------------------------------

/// One run request. Built by the caller, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfiguration {
    pub program: WashingProgram,
    pub fill_level: FillLevel,
    /// Detergent tablet loaded. Carried through; the wash sequence does
    /// not depend on it.
    pub tablets_used: bool,
}

impl ProgramConfiguration {
    pub const fn new(program: WashingProgram, fill_level: FillLevel, tablets_used: bool) -> Self {
        Self {
            program,
            fill_level,
            tablets_used,
        }
    }
}

// ---------------------------------------------------------------------------
// Status and result
// ---------------------------------------------------------------------------

/// Outcome category of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Every wash step completed.
    Success,
    /// Dirt filter capacity below the acceptable minimum.
    ErrorFilter,
    /// Door was open when the run was requested.
    DoorOpen,
    /// The water pump failed mid-cycle.
    ErrorPump,
    /// The wash engine failed mid-cycle.
    ErrorProgram,
}

impl Status {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Refused before any hardware was touched.
    pub const fn is_precondition_failure(self) -> bool {
        matches!(self, Self::DoorOpen | Self::ErrorFilter)
    }

    /// Aborted part-way through the wash sequence.
    pub const fn is_hardware_fault(self) -> bool {
        matches!(self, Self::ErrorPump | Self::ErrorProgram)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::ErrorFilter => write!(f, "ERROR_FILTER"),
            Self::DoorOpen => write!(f, "DOOR_OPEN"),
            Self::ErrorPump => write!(f, "ERROR_PUMP"),
            Self::ErrorProgram => write!(f, "ERROR_PROGRAM"),
        }
    }
}

/// Result of a single `run()` call.
///
/// `run_minutes` is non-zero only for [`Status::Success`], where it is
/// the duration of the requested program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    status: Status,
    run_minutes: u32,
}

impl RunResult {
    /// A completed run of `program`.
    pub const fn success(program: WashingProgram) -> Self {
        Self {
            status: Status::Success,
            run_minutes: program.duration_minutes(),
        }
    }

    /// A refused or aborted run.
    pub const fn failure(status: Status) -> Self {
        debug_assert!(!status.is_success());
        Self {
            status,
            run_minutes: 0,
        }
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn run_minutes(&self) -> u32 {
        self.run_minutes
    }
}
