//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the service layer.
//! Every handler operates on the explicit per-invocation `Session`.

pub mod export;
pub mod schedule;
pub mod simulate;
pub mod units;

pub use export::{handle_export, handle_proposal};
pub use schedule::handle_schedule;
pub use simulate::{handle_compare, handle_simulate, parse_what_if, WhatIf};
pub use units::handle_units;
