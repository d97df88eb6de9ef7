//! Dishwasher program controller library.
//!
//! Validates run preconditions (door, dirt filter), then drives a water
//! pump and wash engine through a fixed pour / run / drain sequence with
//! a rinse appendix, and reports a [`program::RunResult`].
//!
//! Hardware is reached only through the traits in [`app::ports`].  The
//! [`drivers`], [`sensors`] and [`adapters`] modules provide in-memory
//! implementations for host-side simulation and tests.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod program;

pub mod adapters;
pub mod drivers;
pub mod sensors;

pub use app::ports::{Appliance, DirtFilter, Door, Engine, EventSink, WaterPump};
pub use app::service::ProgramController;
pub use error::{EngineError, Error, PumpError};
pub use program::{FillLevel, ProgramConfiguration, RunResult, Status, WashingProgram};
