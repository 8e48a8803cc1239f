//! JSON export
//!
//! Serializes a full session snapshot: the costed batch, the stored
//! simulations and the derived comparison series.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::services::ComparisonRow;
use crate::models::{CostedUnit, Simulation};

#[derive(Serialize)]
struct SessionSnapshot<'a> {
    units: &'a [CostedUnit],
    simulations: &'a [Simulation],
    comparison: &'a [ComparisonRow],
}

/// Serialize the session state to pretty-printed JSON
pub fn export_session_json(
    units: &[CostedUnit],
    simulations: &[Simulation],
    comparison: &[ComparisonRow],
) -> BudgetResult<String> {
    let snapshot = SessionSnapshot {
        units,
        simulations,
        comparison,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
