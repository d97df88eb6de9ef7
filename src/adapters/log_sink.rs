//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured wash events to the
//! `log` facade.  The host installs whichever logger backend it uses
//! (serial console, journald, test capture).

use log::{Level, log};

use crate::app::events::WashEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`WashEvent`] as a single line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// Record level for `event`: refusals warn, hardware faults are errors.
pub fn event_level(event: &WashEvent) -> Level {
    match event {
        WashEvent::PreconditionFailed { .. } => Level::Warn,
        WashEvent::HardwareFault { .. } => Level::Error,
        WashEvent::RunStarted(_) | WashEvent::StepCompleted { .. } | WashEvent::RunFinished(_) => {
            Level::Info
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &WashEvent) {
        let level = event_level(event);
        match event {
            WashEvent::RunStarted(cfg) => {
                log!(
                    level,
                    "START | program={} fill={} tablets={}",
                    cfg.program,
                    cfg.fill_level,
                    if cfg.tablets_used { "yes" } else { "no" },
                );
            }
            WashEvent::PreconditionFailed {
                status,
                filter_capacity,
            } => match filter_capacity {
                Some(pct) => log!(level, "PRECOND | {} | filter={:.1}%", status, pct),
                None => log!(level, "PRECOND | {}", status),
            },
            WashEvent::StepCompleted { index, step } => {
                log!(level, "STEP | #{} {}", index, step);
            }
            WashEvent::HardwareFault { index, step, error } => {
                log!(level, "FAULT | #{} {} | {}", index, step, error);
            }
            WashEvent::RunFinished(result) => {
                log!(
                    level,
                    "DONE | status={} minutes={}",
                    result.status(),
                    result.run_minutes()
                );
            }
        }
    }
}
