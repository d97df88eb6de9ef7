//! Unified error types for the dishwasher controller.
//!
//! A single `Error` enum that every hardware-facing subsystem converts
//! into, so the controller maps faults to a [`Status`] in one place.
//! All variants are `Copy` so they can be stored as the controller's
//! last fault and carried in events without allocation.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::program::Status;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The water pump could not fill or drain.
    Pump(PumpError),
    /// The wash engine could not complete a program.
    Engine(EngineError),
}

impl Error {
    /// Result status reported to the caller when this error aborts a run.
    pub const fn status(self) -> Status {
        match self {
            Self::Pump(_) => Status::ErrorPump,
            Self::Engine(_) => Status::ErrorProgram,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pump(e) => write!(f, "pump: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pump errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpError {
    /// Inlet valve or pump failed while filling.
    FillFailed,
    /// Outlet pump failed while draining.
    DrainFailed,
    /// Level sensor reported more water than requested.
    Overflow,
    /// Pour requested while the tub still holds water.
    NotEmpty,
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FillFailed => write!(f, "fill failed"),
            Self::DrainFailed => write!(f, "drain failed"),
            Self::Overflow => write!(f, "overflow"),
            Self::NotEmpty => write!(f, "tub not empty"),
        }
    }
}

impl From<PumpError> for Error {
    fn from(e: PumpError) -> Self {
        Self::Pump(e)
    }
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// Spray arm motor stalled mid-program.
    Stalled,
    /// Program started with no water in the tub.
    NotFilled,
    /// Heater exceeded its thermal limit.
    OverTemperature,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stalled => write!(f, "motor stalled"),
            Self::NotFilled => write!(f, "no water in tub"),
            Self::OverTemperature => write!(f, "over temperature"),
        }
    }
}

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Returned by config validation and controller construction; never
/// produced during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Serialized config could not be parsed.
    Malformed,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed config"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
