//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                | Connects to                |
//! |-------------|---------------------------|----------------------------|
//! | `hardware`  | Door, DirtFilter          | simulated sensors          |
//! |             | WaterPump, Engine         | simulated pump and engine  |
//! | `log_sink`  | EventSink                 | `log` facade               |

pub mod hardware;
pub mod log_sink;
