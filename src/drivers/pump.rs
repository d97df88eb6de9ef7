//! Simulated inlet/outlet water pump.
//!
//! Tracks the tub water level in-memory and enforces the physical
//! ordering a real pump would: the tub must be drained before it can be
//! filled again.  Draining an empty tub is harmless.
//!
//! ## Fault injection
//!
//! [`SimWaterPump::inject_fault`] arms a one-shot failure on the next
//! pour or drain; [`SimWaterPump::inject_fault_after`] lets a number of
//! calls succeed first.

use log::{debug, warn};

use crate::error::PumpError;
use crate::program::FillLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Empty,
    Filled(FillLevel),
}

#[derive(Debug, Clone, Copy)]
struct ArmedFault {
    /// Calls that still succeed before the fault fires.
    skip: u32,
    fault: PumpError,
}

pub struct SimWaterPump {
    state: PumpState,
    pours: u32,
    drains: u32,
    armed: Option<ArmedFault>,
}

impl SimWaterPump {
    pub fn new() -> Self {
        Self {
            state: PumpState::Empty,
            pours: 0,
            drains: 0,
            armed: None,
        }
    }

    pub fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.check_armed()?;
        if let PumpState::Filled(current) = self.state {
            warn!("Pour({}) refused, tub already holds {}", level, current);
            return Err(PumpError::NotEmpty);
        }
        self.state = PumpState::Filled(level);
        self.pours += 1;
        debug!("Pump filled to {}", level);
        Ok(())
    }

    pub fn drain(&mut self) -> Result<(), PumpError> {
        self.check_armed()?;
        self.state = PumpState::Empty;
        self.drains += 1;
        debug!("Pump drained");
        Ok(())
    }

    /// Fail the next pour or drain with `fault`.
    pub fn inject_fault(&mut self, fault: PumpError) {
        self.inject_fault_after(0, fault);
    }

    /// Let `skip` calls succeed, then fail the next one with `fault`.
    pub fn inject_fault_after(&mut self, skip: u32, fault: PumpError) {
        self.armed = Some(ArmedFault { skip, fault });
    }

    fn check_armed(&mut self) -> Result<(), PumpError> {
        let Some(armed) = self.armed.as_mut() else {
            return Ok(());
        };
        if armed.skip > 0 {
            armed.skip -= 1;
            return Ok(());
        }
        let fault = armed.fault;
        self.armed = None;
        warn!("Pump fault: {}", fault);
        Err(fault)
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_filled(&self) -> bool {
        matches!(self.state, PumpState::Filled(_))
    }

    pub fn pour_count(&self) -> u32 {
        self.pours
    }

    pub fn drain_count(&self) -> u32 {
        self.drains
    }
}

impl Default for SimWaterPump {
    fn default() -> Self {
        Self::new()
    }
}
