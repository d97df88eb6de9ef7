//! Event stream emitted through the EventSink port.

use super::mock_hw::{MockHardware, RecordingSink};

use dishwasher::adapters::log_sink::LogEventSink;
use dishwasher::app::events::WashEvent;
use dishwasher::app::sequence::WashStep;
use dishwasher::{
    EngineError, Error, FillLevel, ProgramConfiguration, ProgramController, RunResult, Status,
    WashingProgram,
};

#[test]
fn successful_rinse_emits_start_steps_finish() {
    let cfg = ProgramConfiguration::new(WashingProgram::Rinse, FillLevel::Full, false);
    let mut ctl = ProgramController::new();
    let mut sink = RecordingSink::new();

    ctl.run_with(&cfg, &mut MockHardware::healthy(), &mut sink);

    assert_eq!(
        sink.events,
        vec![
            WashEvent::RunStarted(cfg),
            WashEvent::StepCompleted {
                index: 0,
                step: WashStep::Pour(FillLevel::Full)
            },
            WashEvent::StepCompleted {
                index: 1,
                step: WashStep::RunProgram(WashingProgram::Rinse)
            },
            WashEvent::StepCompleted {
                index: 2,
                step: WashStep::Drain
            },
            WashEvent::RunFinished(RunResult::success(WashingProgram::Rinse)),
        ]
    );
}

#[test]
fn filter_refusal_reports_reading() {
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, FillLevel::Full, true);
    let mut ctl = ProgramController::new();
    let mut sink = RecordingSink::new();

    ctl.run_with(&cfg, &mut MockHardware::healthy().with_filter(50.0), &mut sink);

    assert_eq!(sink.events.len(), 3);
    assert_eq!(
        sink.events[1],
        WashEvent::PreconditionFailed {
            status: Status::ErrorFilter,
            filter_capacity: Some(50.0),
        }
    );
    assert_eq!(
        sink.events[2],
        WashEvent::RunFinished(RunResult::failure(Status::ErrorFilter))
    );
}

#[test]
fn hardware_fault_event_names_failing_step() {
    let cfg = ProgramConfiguration::new(WashingProgram::Night, FillLevel::Half, true);
    let mut ctl = ProgramController::new();
    let mut sink = RecordingSink::new();
    let mut hw = MockHardware::healthy().failing_engine_call(0, EngineError::Stalled);

    ctl.run_with(&cfg, &mut hw, &mut sink);

    let fault = sink
        .events
        .iter()
        .find(|e| matches!(e, WashEvent::HardwareFault { .. }))
        .cloned();
    assert_eq!(
        fault,
        Some(WashEvent::HardwareFault {
            index: 1,
            step: WashStep::RunProgram(WashingProgram::Night),
            error: Error::Engine(EngineError::Stalled),
        })
    );
    assert!(!sink.events.iter().any(
        |e| matches!(e, WashEvent::StepCompleted { index, .. } if *index >= 1)
    ));
}

#[test]
fn log_sink_accepts_every_event_kind() {
    let cfg = ProgramConfiguration::new(WashingProgram::Eco, FillLevel::Half, true);
    let mut ctl = ProgramController::new();
    let mut sink = LogEventSink::new();

    let ok = ctl.run_with(&cfg, &mut MockHardware::healthy(), &mut sink);
    let refused = ctl.run_with(&cfg, &mut MockHardware::healthy().with_door_open(), &mut sink);
    let faulted = ctl.run_with(
        &cfg,
        &mut MockHardware::healthy().failing_engine_call(0, EngineError::NotFilled),
        &mut sink,
    );

    assert_eq!(ok.status(), Status::Success);
    assert_eq!(refused.status(), Status::DoorOpen);
    assert_eq!(faulted.status(), Status::ErrorProgram);
}
