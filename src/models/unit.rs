//! Housing unit model
//!
//! A `Unit` is one house in the input batch: a unique name, a built area and
//! a unit price per square meter. Units are immutable within a session; a new
//! upload replaces the batch wholesale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cost::CostBreakdown;

/// One housing unit from the input batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit name, unique within a batch
    pub name: String,

    /// Built area in square meters (positive)
    #[serde(rename = "area")]
    pub area_m2: f64,

    /// Price per square meter (positive)
    pub unit_price: f64,
}

impl Unit {
    /// Create a new unit
    pub fn new(name: impl Into<String>, area_m2: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            area_m2,
            unit_price,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} m² @ {:.2})", self.name, self.area_m2, self.unit_price)
    }
}

/// A unit augmented with its computed cost breakdown and best-value flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostedUnit {
    /// The source unit
    #[serde(flatten)]
    pub unit: Unit,

    /// Derived cost figures
    #[serde(flatten)]
    pub costs: CostBreakdown,

    /// True for the unit(s) whose efficiency equals the batch maximum
    pub best_value: bool,
}

impl CostedUnit {
    /// The unit name
    pub fn name(&self) -> &str {
        &self.unit.name
    }
}
