//! Service layer for obra-cli
//!
//! The calculation engine: cost derivation, phase allocation, schedule
//! generation, simulation bookkeeping and comparison building, plus CSV batch
//! ingestion. All computation services are pure functions over in-memory
//! values; the simulation store is the only mutable piece and it is owned by
//! the session.

pub mod comparison;
pub mod cost;
pub mod import;
pub mod phases;
pub mod schedule;
pub mod simulation;

pub use comparison::{ComparisonBuilder, ComparisonRow};
pub use cost::{CostModel, DEFAULT_LABOR_MARKUP_PCT, DEFAULT_MATERIAL_MARKUP_PCT, EFFICIENCY_SCALE};
pub use phases::PhaseAllocator;
pub use schedule::{ScheduleBuilder, DEFAULT_ANCHOR};
pub use simulation::SimulationStore;
