//! Simulated wash engine (spray arm motor + heater).
//!
//! Refuses to run without water in the tub.  The caller reports the
//! water state on each run since the engine has no level sensor of its
//! own.  Completed programs are kept in a short log for inspection.

use log::{debug, warn};

use crate::error::EngineError;
use crate::program::WashingProgram;

/// Programs remembered by [`SimEngine::completed`].
pub const ENGINE_LOG_SLOTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Faulted(EngineError),
}

pub struct SimEngine {
    state: EngineState,
    completed: heapless::Deque<WashingProgram, ENGINE_LOG_SLOTS>,
    pending_fault: Option<EngineError>,
}

impl SimEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            completed: heapless::Deque::new(),
            pending_fault: None,
        }
    }

    pub fn run(&mut self, program: WashingProgram, water_present: bool) -> Result<(), EngineError> {
        if let Some(fault) = self.pending_fault.take() {
            warn!("Engine fault during {}: {}", program, fault);
            self.state = EngineState::Faulted(fault);
            return Err(fault);
        }
        if !water_present {
            warn!("Engine refused {}: tub is empty", program);
            self.state = EngineState::Faulted(EngineError::NotFilled);
            return Err(EngineError::NotFilled);
        }
        if self.completed.is_full() {
            self.completed.pop_front();
        }
        let _ = self.completed.push_back(program);
        self.state = EngineState::Idle;
        debug!("Engine completed {}", program);
        Ok(())
    }

    /// Fail the next run with `fault`.
    pub fn inject_fault(&mut self, fault: EngineError) {
        self.pending_fault = Some(fault);
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Recently completed programs, oldest first.
    pub fn completed(&self) -> impl Iterator<Item = &WashingProgram> {
        self.completed.iter()
    }

    pub fn last_program(&self) -> Option<WashingProgram> {
        self.completed.back().copied()
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}
