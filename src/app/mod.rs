//! Application core — pure controller logic, zero I/O.
//!
//! This module contains the rules for a dishwasher run: precondition
//! checks, wash plan construction, and hardware sequencing.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod sequence;
pub mod service;
