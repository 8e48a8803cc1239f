//! Phase allocation service
//!
//! Splits a total cost into the five fixed construction phases by their fixed
//! proportions. Stateless: allocating the same total twice yields identical
//! results.

use crate::models::{Money, PhaseCost, PHASE_PLAN};

/// Service splitting a total cost across the standard phase plan
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseAllocator;

impl PhaseAllocator {
    /// Allocate a total cost across the five phases, in plan order.
    ///
    /// Each estimate is `total_cost * proportion` rounded to centavos, so the
    /// five estimates recompose the total within rounding tolerance (at most
    /// half a centavo per phase).
    pub fn allocate(total_cost: f64) -> Vec<PhaseCost> {
        debug_assert!(crate::models::phase::plan_proportions_are_complete());

        PHASE_PLAN
            .iter()
            .map(|spec| PhaseCost {
                name: spec.name.to_string(),
                proportion: spec.proportion,
                estimated_cost: Money::from_float(total_cost * spec.proportion),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_order_and_proportions() {
        let phases = PhaseAllocator::allocate(100_000.0);
        assert_eq!(phases.len(), 5);

        let proportions: Vec<f64> = phases.iter().map(|p| p.proportion).collect();
        assert_eq!(proportions, vec![0.25, 0.25, 0.20, 0.20, 0.10]);

        assert_eq!(phases[0].name, "Mobilization");
        assert_eq!(phases[4].name, "Internal Cladding/Ceiling");
    }

    #[test]
    fn test_round_total_splits_exactly() {
        let phases = PhaseAllocator::allocate(100_000.0);
        let costs: Vec<i64> = phases.iter().map(|p| p.estimated_cost.cents()).collect();
        assert_eq!(
            costs,
            vec![2_500_000, 2_500_000, 2_000_000, 2_000_000, 1_000_000]
        );
    }

    #[test]
    fn test_estimates_recompose_total_within_tolerance() {
        for total in [117_457.1174, 836.47, 0.01, 999_999.99, 123_456.789] {
            let phases = PhaseAllocator::allocate(total);
            let sum: Money = phases.iter().map(|p| p.estimated_cost).sum();
            let drift = (sum.to_float() - total).abs();
            assert!(drift <= 0.05, "total {} drifted by {}", total, drift);
        }
    }

    #[test]
    fn test_allocation_is_idempotent() {
        let first = PhaseAllocator::allocate(117_457.12);
        let second = PhaseAllocator::allocate(117_457.12);
        assert_eq!(first, second);
    }
}
