//! Core data models for obra-cli
//!
//! This module contains the data structures that represent the budgeting
//! domain: housing units, cost breakdowns, construction phases and what-if
//! simulations.

pub mod cost;
pub mod money;
pub mod phase;
pub mod simulation;
pub mod unit;

pub use cost::CostBreakdown;
pub use money::Money;
pub use phase::{PhaseCost, PhaseSpec, ScheduledPhase, PHASE_COUNT, PHASE_PLAN};
pub use simulation::Simulation;
pub use unit::{CostedUnit, Unit};
