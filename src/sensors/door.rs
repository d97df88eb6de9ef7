//! Door latch switch.
//!
//! The latch state is cached in an atomic so it can be updated from an
//! edge interrupt (or a test) through a shared reference while the
//! controller holds the appliance.  `true` = latched shut.

use core::sync::atomic::{AtomicBool, Ordering};

pub struct DoorSensor {
    closed: AtomicBool,
}

impl DoorSensor {
    pub fn new(closed: bool) -> Self {
        Self {
            closed: AtomicBool::new(closed),
        }
    }

    /// Lock-free, safe to call from interrupt context.
    pub fn set_closed(&self, closed: bool) {
        self.closed.store(closed, Ordering::Release);
    }

    pub fn open(&self) {
        self.set_closed(false);
    }

    pub fn close(&self) {
        self.set_closed(true);
    }

    pub fn closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Default for DoorSensor {
    fn default() -> Self {
        Self::new(true)
    }
}
