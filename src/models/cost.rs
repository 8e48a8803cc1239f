//! Cost breakdown derived from a unit or a simulation
//!
//! All fields are raw f64 figures straight out of the markup chain; rounding
//! to centavos happens only when a figure is allocated or exported.

use serde::{Deserialize, Serialize};

/// The derived cost figures for one housing unit or simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Base cost: area x unit price
    pub total: f64,

    /// Base cost after the labor markup
    pub after_labor: f64,

    /// Cost after both labor and material markups
    pub final_cost: f64,

    /// Relative value metric: scale constant / final cost (higher is better)
    pub efficiency: f64,
}
