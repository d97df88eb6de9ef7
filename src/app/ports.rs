//! Port traits — the hexagonal boundary between controller logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ProgramController (domain)
//! ```
//!
//! Driven adapters (door and filter sensors, pump, engine, event sinks)
//! implement these traits.  The [`ProgramController`](super::service::ProgramController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! The hardware models physical, non-reentrant devices.  Every mutating
//! call takes `&mut self`; sharing an appliance between threads requires
//! the caller to serialize access.

use crate::error::{EngineError, PumpError};
use crate::program::{FillLevel, WashingProgram};

use super::events::WashEvent;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Door position switch.
pub trait Door {
    /// `true` when the door is latched shut.
    fn closed(&self) -> bool;
}

/// Dirt filter fill sensor.
pub trait DirtFilter {
    /// Remaining filter capacity as a percentage (0.0 – 100.0).
    fn capacity(&self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Inlet/outlet water pump.
pub trait WaterPump {
    /// Fill the tub to `level`.
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError>;

    /// Empty the tub.
    fn drain(&mut self) -> Result<(), PumpError>;
}

/// Spray arm motor and heater.
pub trait Engine {
    /// Run `program` to completion on the water currently in the tub.
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError>;
}

/// Everything the controller drives during a run.
///
/// Blanket-implemented for any type that provides all four ports, so a
/// single adapter (or a single test double) can record the full call
/// history without a double mutable borrow.
pub trait Appliance: Door + DirtFilter + WaterPump + Engine {}

impl<T: Door + DirtFilter + WaterPump + Engine> Appliance for T {}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`WashEvent`]s through this port.
/// Adapters decide where they go (serial log, display, remote app).
pub trait EventSink {
    fn emit(&mut self, event: &WashEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &WashEvent) {}
}
