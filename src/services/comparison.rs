//! Comparison building service
//!
//! Merges the baseline costed units and the stored simulations into a single
//! name/final-cost series for side-by-side comparison.

use serde::{Deserialize, Serialize};

use crate::models::{CostedUnit, Simulation};

/// One row of the comparison series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Unit or simulation name
    pub name: String,

    /// Final cost after both markups
    pub final_cost: f64,
}

/// Service merging baseline units and simulations into comparison rows
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonBuilder;

impl ComparisonBuilder {
    /// Build the comparison series: one row per unit followed by one row per
    /// simulation, each source's order preserved. No deduplication — a
    /// simulation sharing a unit's name yields two distinct rows. Zero
    /// simulations simply means an empty tail.
    pub fn build(units: &[CostedUnit], simulations: &[Simulation]) -> Vec<ComparisonRow> {
        units
            .iter()
            .map(|u| ComparisonRow {
                name: u.unit.name.clone(),
                final_cost: u.costs.final_cost,
            })
            .chain(simulations.iter().map(|s| ComparisonRow {
                name: s.name.clone(),
                final_cost: s.costs.final_cost,
            }))
            .collect()
    }
}
