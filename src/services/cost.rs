//! Cost model service
//!
//! Turns a unit's area and unit price into a final cost through the labor and
//! material markup multipliers, and derives the efficiency score used to rank
//! units. Pure computation, no I/O.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{CostBreakdown, CostedUnit, Unit};

/// Default labor markup applied to the baseline batch (x1.025)
pub const DEFAULT_LABOR_MARKUP_PCT: f64 = 2.5;

/// Default material markup applied to the baseline batch (x1.013)
pub const DEFAULT_MATERIAL_MARKUP_PCT: f64 = 1.3;

/// Numerator of the efficiency metric. Efficiency is relative, not absolute:
/// it only orders units against each other.
pub const EFFICIENCY_SCALE: f64 = 1000.0;

/// Service deriving cost breakdowns from unit dimensions
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    labor_markup_pct: f64,
    material_markup_pct: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            labor_markup_pct: DEFAULT_LABOR_MARKUP_PCT,
            material_markup_pct: DEFAULT_MATERIAL_MARKUP_PCT,
        }
    }
}

impl CostModel {
    /// Create a cost model with explicit markups
    pub fn new(labor_markup_pct: f64, material_markup_pct: f64) -> Self {
        Self {
            labor_markup_pct,
            material_markup_pct,
        }
    }

    /// The labor markup percentage this model applies
    pub fn labor_markup_pct(&self) -> f64 {
        self.labor_markup_pct
    }

    /// The material markup percentage this model applies
    pub fn material_markup_pct(&self) -> f64 {
        self.material_markup_pct
    }

    /// Derive the cost breakdown for one area/price pair.
    ///
    /// Fails with `InvalidInput` when area or unit price is not positive, or
    /// when the markups drive the final cost to zero or below (efficiency
    /// would be undefined). Negative markups themselves are accepted.
    pub fn compute(
        area_m2: f64,
        unit_price: f64,
        labor_markup_pct: f64,
        material_markup_pct: f64,
    ) -> BudgetResult<CostBreakdown> {
        if !(area_m2 > 0.0) {
            return Err(BudgetError::invalid_input(format!(
                "area must be positive, got {}",
                area_m2
            )));
        }
        if !(unit_price > 0.0) {
            return Err(BudgetError::invalid_input(format!(
                "unit price must be positive, got {}",
                unit_price
            )));
        }

        let total = area_m2 * unit_price;
        let after_labor = total * (1.0 + labor_markup_pct / 100.0);
        let final_cost = after_labor * (1.0 + material_markup_pct / 100.0);

        if !(final_cost > 0.0) {
            return Err(BudgetError::invalid_input(format!(
                "markups produce a non-positive final cost ({})",
                final_cost
            )));
        }

        Ok(CostBreakdown {
            total,
            after_labor,
            final_cost,
            efficiency: EFFICIENCY_SCALE / final_cost,
        })
    }

    /// Derive the breakdown for one unit using this model's markups
    pub fn compute_unit(&self, unit: &Unit) -> BudgetResult<CostBreakdown> {
        Self::compute(
            unit.area_m2,
            unit.unit_price,
            self.labor_markup_pct,
            self.material_markup_pct,
        )
    }

    /// Cost an entire batch and flag the best-value unit(s).
    ///
    /// Every unit whose efficiency equals the batch maximum is flagged; ties
    /// are all flagged. Input order is preserved.
    pub fn cost_batch(&self, units: &[Unit]) -> BudgetResult<Vec<CostedUnit>> {
        let mut costed = Vec::with_capacity(units.len());
        for unit in units {
            let costs = self.compute_unit(unit)?;
            costed.push(CostedUnit {
                unit: unit.clone(),
                costs,
                best_value: false,
            });
        }

        let max_efficiency = costed
            .iter()
            .map(|c| c.costs.efficiency)
            .fold(f64::NEG_INFINITY, f64::max);
        for item in &mut costed {
            item.best_value = item.costs.efficiency == max_efficiency;
        }

        Ok(costed)
    }
}
