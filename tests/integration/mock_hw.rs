//! Mock hardware adapter for integration tests.
//!
//! Records every pump and engine call, in order, so tests can assert on
//! the full command history without touching real valves or motors.

use std::cell::Cell;

use dishwasher::app::events::WashEvent;
use dishwasher::app::ports::{DirtFilter, Door, Engine, EventSink, WaterPump};
use dishwasher::{EngineError, FillLevel, PumpError, WashingProgram};

// ── Hardware call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    Pour(FillLevel),
    RunProgram(WashingProgram),
    Drain,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<HwCall>,
    pub door_closed: bool,
    pub filter_capacity: f32,
    door_reads: Cell<u32>,
    filter_reads: Cell<u32>,
    /// Fail the n-th pump call (pour or drain, 0-based).
    pump_fault: Option<(usize, PumpError)>,
    /// Fail the n-th engine call (0-based).
    engine_fault: Option<(usize, EngineError)>,
    pump_calls: usize,
    engine_calls: usize,
}

#[allow(dead_code)]
impl MockHardware {
    /// Door closed, clean filter, no faults.
    pub fn healthy() -> Self {
        Self {
            calls: Vec::new(),
            door_closed: true,
            filter_capacity: 100.0,
            door_reads: Cell::new(0),
            filter_reads: Cell::new(0),
            pump_fault: None,
            engine_fault: None,
            pump_calls: 0,
            engine_calls: 0,
        }
    }

    pub fn with_door_open(mut self) -> Self {
        self.door_closed = false;
        self
    }

    pub fn with_filter(mut self, capacity: f32) -> Self {
        self.filter_capacity = capacity;
        self
    }

    pub fn failing_pump_call(mut self, n: usize, fault: PumpError) -> Self {
        self.pump_fault = Some((n, fault));
        self
    }

    pub fn failing_engine_call(mut self, n: usize, fault: EngineError) -> Self {
        self.engine_fault = Some((n, fault));
        self
    }

    pub fn door_reads(&self) -> u32 {
        self.door_reads.get()
    }

    pub fn filter_reads(&self) -> u32 {
        self.filter_reads.get()
    }

    fn pump_result(&mut self) -> Result<(), PumpError> {
        let n = self.pump_calls;
        self.pump_calls += 1;
        match self.pump_fault {
            Some((at, fault)) if at == n => Err(fault),
            _ => Ok(()),
        }
    }
}

impl Door for MockHardware {
    fn closed(&self) -> bool {
        self.door_reads.set(self.door_reads.get() + 1);
        self.door_closed
    }
}

impl DirtFilter for MockHardware {
    fn capacity(&self) -> f32 {
        self.filter_reads.set(self.filter_reads.get() + 1);
        self.filter_capacity
    }
}

impl WaterPump for MockHardware {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.calls.push(HwCall::Pour(level));
        self.pump_result()
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.calls.push(HwCall::Drain);
        self.pump_result()
    }
}

impl Engine for MockHardware {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.calls.push(HwCall::RunProgram(program));
        let n = self.engine_calls;
        self.engine_calls += 1;
        match self.engine_fault {
            Some((at, fault)) if at == n => Err(fault),
            _ => Ok(()),
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<WashEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &WashEvent) {
        self.events.push(event.clone());
    }
}
