//! Run history and diagnostics.
//!
//! Keeps the last [`HISTORY_SLOTS`] runs in a fixed-capacity ring.  Once the
//! ring is full the oldest record is evicted.  The ring can be exported
//! and restored as a compact postcard blob so a host can persist it
//! across power cycles.

use serde::{Deserialize, Serialize};

use crate::program::{FillLevel, ProgramConfiguration, RunResult, Status, WashingProgram};

pub const HISTORY_SLOTS: usize = 16;

/// One completed `run()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Monotonic run counter at the time of the run (starts at 1).
    pub sequence: u32,
    pub program: WashingProgram,
    pub fill_level: FillLevel,
    pub tablets_used: bool,
    pub status: Status,
    pub run_minutes: u32,
}

impl RunRecord {
    pub fn new(sequence: u32, config: &ProgramConfiguration, result: RunResult) -> Self {
        Self {
            sequence,
            program: config.program,
            fill_level: config.fill_level,
            tablets_used: config.tablets_used,
            status: result.status(),
            run_minutes: result.run_minutes(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsError {
    /// Export buffer could not be produced.
    Encode,
    /// Stored blob is truncated, corrupted, or has too many records.
    Decode,
}

impl core::fmt::Display for DiagnosticsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Encode => write!(f, "history encode failed"),
            Self::Decode => write!(f, "history decode failed"),
        }
    }
}

/// Bounded ring of recent runs.
#[derive(Debug, Default)]
pub struct RunHistory {
    records: heapless::Deque<RunRecord, HISTORY_SLOTS>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, evicting the oldest when full.
    pub fn push(&mut self, record: RunRecord) {
        if self.records.is_full() {
            self.records.pop_front();
        }
        // Cannot fail: a slot was freed above.
        let _ = self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RunRecord> {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&RunRecord> {
        self.records.back()
    }

    /// Number of retained runs that ended with `status`.
    pub fn count(&self, status: Status) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    /// Sum of run minutes over retained successful runs.
    pub fn total_run_minutes(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.run_minutes)).sum()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Serialize all retained records, oldest first.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DiagnosticsError> {
        let records: heapless::Vec<RunRecord, HISTORY_SLOTS> = self.records.iter().copied().collect();
        postcard::to_allocvec(&records).map_err(|e| {
            log::warn!("History export failed: {}", e);
            DiagnosticsError::Encode
        })
    }

    /// Restore a ring previously produced by [`RunHistory::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DiagnosticsError> {
        let records: heapless::Vec<RunRecord, HISTORY_SLOTS> =
            postcard::from_bytes(bytes).map_err(|e| {
                log::warn!("History import failed: {}", e);
                DiagnosticsError::Decode
            })?;
        let mut history = Self::new();
        for r in records {
            history.push(r);
        }
        Ok(history)
    }
}
