//! Simulated appliance adapter — bridges the host-side drivers to the
//! domain port traits.
//!
//! Owns the door and filter sensors plus the pump and engine drivers,
//! exposing them through [`Door`], [`DirtFilter`], [`WaterPump`] and
//! [`Engine`].  Each completed engine program wears the filter by
//! [`FILTER_WEAR_PER_PROGRAM`] so repeated runs eventually trip the
//! filter check.

use crate::app::ports::{DirtFilter, Door, Engine, WaterPump};
use crate::drivers::engine::SimEngine;
use crate::drivers::pump::SimWaterPump;
use crate::error::{EngineError, PumpError};
use crate::program::{FillLevel, WashingProgram};
use crate::sensors::dirt_filter::DirtFilterSensor;
use crate::sensors::door::DoorSensor;

/// Filter capacity (percent) consumed by one engine program.
pub const FILTER_WEAR_PER_PROGRAM: f32 = 2.0;

/// Concrete adapter that combines all simulated hardware behind port traits.
#[derive(Default)]
pub struct SimAppliance {
    pub door: DoorSensor,
    pub filter: DirtFilterSensor,
    pub pump: SimWaterPump,
    pub engine: SimEngine,
}

impl SimAppliance {
    pub fn new(
        door: DoorSensor,
        filter: DirtFilterSensor,
        pump: SimWaterPump,
        engine: SimEngine,
    ) -> Self {
        Self {
            door,
            filter,
            pump,
            engine,
        }
    }
}

// ── Sensor ports ──────────────────────────────────────────────

impl Door for SimAppliance {
    fn closed(&self) -> bool {
        self.door.closed()
    }
}

impl DirtFilter for SimAppliance {
    fn capacity(&self) -> f32 {
        self.filter.capacity()
    }
}

// ── Actuator ports ────────────────────────────────────────────

impl WaterPump for SimAppliance {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.pump.pour(level)
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.pump.drain()
    }
}

impl Engine for SimAppliance {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.engine.run(program, self.pump.is_filled())?;
        self.filter.clog(FILTER_WEAR_PER_PROGRAM);
        Ok(())
    }
}
