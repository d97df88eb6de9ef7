//! Actuator drivers: water pump and wash engine.

pub mod engine;
pub mod pump;
