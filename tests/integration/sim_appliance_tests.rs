//! End-to-end runs against the simulated appliance adapter.

use dishwasher::adapters::hardware::SimAppliance;
use dishwasher::drivers::engine::SimEngine;
use dishwasher::drivers::pump::{PumpState, SimWaterPump};
use dishwasher::sensors::dirt_filter::DirtFilterSensor;
use dishwasher::sensors::door::DoorSensor;
use dishwasher::{
    EngineError, Error, FillLevel, ProgramConfiguration, ProgramController, PumpError, Status,
    WashingProgram,
};

fn appliance(door_closed: bool, filter: f32) -> SimAppliance {
    SimAppliance::new(
        DoorSensor::new(door_closed),
        DirtFilterSensor::new(filter),
        SimWaterPump::new(),
        SimEngine::new(),
    )
}

#[test]
fn every_program_completes_and_leaves_tub_empty() {
    for program in WashingProgram::ALL {
        let mut hw = appliance(true, 100.0);
        let mut ctl = ProgramController::new();
        let cfg = ProgramConfiguration::new(program, FillLevel::Full, true);

        let r = ctl.run(&cfg, &mut hw);

        assert_eq!(r.status(), Status::Success, "{program}");
        assert_eq!(r.run_minutes(), program.duration_minutes());
        assert_eq!(hw.pump.state(), PumpState::Empty);
        assert_eq!(hw.engine.last_program(), Some(WashingProgram::Rinse));
    }
}

#[test]
fn opening_door_between_runs_blocks_next_run() {
    let mut hw = appliance(true, 100.0);
    let mut ctl = ProgramController::new();
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, FillLevel::Half, false);

    assert_eq!(ctl.run(&cfg, &mut hw).status(), Status::Success);
    hw.door.open();
    assert_eq!(ctl.run(&cfg, &mut hw).status(), Status::DoorOpen);
    assert_eq!(hw.pump.pour_count(), 2, "no extra pour after door opened");
}

#[test]
fn clogged_filter_blocks_run() {
    let mut hw = appliance(true, 60.0);
    let mut ctl = ProgramController::new();
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, FillLevel::Half, false);

    assert_eq!(ctl.run(&cfg, &mut hw).status(), Status::ErrorFilter);
    assert_eq!(hw.pump.pour_count(), 0);
    assert!(hw.engine.last_program().is_none());
}

#[test]
fn injected_pump_fault_aborts_run() {
    let mut hw = appliance(true, 100.0);
    // pour, drain succeed; appendix pour fails.
    hw.pump.inject_fault_after(2, PumpError::FillFailed);
    let mut ctl = ProgramController::new();
    let cfg = ProgramConfiguration::new(WashingProgram::Intensive, FillLevel::Full, true);

    let r = ctl.run(&cfg, &mut hw);

    assert_eq!(r.status(), Status::ErrorPump);
    assert_eq!(ctl.last_fault(), Some(Error::Pump(PumpError::FillFailed)));
    assert_eq!(hw.engine.last_program(), Some(WashingProgram::Intensive));
}

#[test]
fn injected_engine_fault_leaves_water_in_tub() {
    let mut hw = appliance(true, 100.0);
    hw.engine.inject_fault(EngineError::Stalled);
    let mut ctl = ProgramController::new();
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, FillLevel::Half, true);

    let r = ctl.run(&cfg, &mut hw);

    assert_eq!(r.status(), Status::ErrorProgram);
    assert_eq!(hw.pump.state(), PumpState::Filled(FillLevel::Half));
}
