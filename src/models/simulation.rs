//! What-if simulation model
//!
//! A simulation is a user-defined hypothetical budget: its own area, unit
//! price and two independent markups, run through the same cost model as real
//! units. Records are immutable once stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::cost::CostBreakdown;

/// A stored what-if budget simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Unique identifier
    pub id: Uuid,

    /// User-supplied name, or the auto-assigned "Simulation {n}" label
    pub name: String,

    /// Hypothetical built area in square meters
    pub area_m2: f64,

    /// Hypothetical price per square meter
    pub unit_price: f64,

    /// Labor markup percentage
    pub labor_markup_pct: f64,

    /// Material markup percentage
    pub material_markup_pct: f64,

    /// Derived cost figures
    pub costs: CostBreakdown,

    /// When this simulation was created
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} m² @ {:.2} (labor {}%, material {}%)",
            self.name, self.area_m2, self.unit_price, self.labor_markup_pct, self.material_markup_pct
        )
    }
}
