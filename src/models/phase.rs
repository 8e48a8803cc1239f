//! Construction phase plan
//!
//! The five construction phases with their fixed cost proportions and
//! durations. The plan is one ordered table of configuration data; phase
//! order is significant (it drives sequential scheduling) and the five
//! proportions sum to 1.0.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Number of phases in the standard plan
pub const PHASE_COUNT: usize = 5;

/// One entry of the fixed phase plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpec {
    /// Phase label
    pub name: &'static str,
    /// Share of the total cost assigned to this phase
    pub proportion: f64,
    /// Duration in calendar days
    pub duration_days: i64,
}

/// The standard phase plan, in execution order
pub const PHASE_PLAN: [PhaseSpec; PHASE_COUNT] = [
    PhaseSpec { name: "Mobilization", proportion: 0.25, duration_days: 20 },
    PhaseSpec { name: "Panels", proportion: 0.25, duration_days: 20 },
    PhaseSpec { name: "Roofing", proportion: 0.20, duration_days: 15 },
    PhaseSpec { name: "External Cladding", proportion: 0.20, duration_days: 15 },
    PhaseSpec { name: "Internal Cladding/Ceiling", proportion: 0.10, duration_days: 10 },
];

/// Check that the plan proportions sum to 1.0 within floating tolerance
pub fn plan_proportions_are_complete() -> bool {
    let sum: f64 = PHASE_PLAN.iter().map(|p| p.proportion).sum();
    (sum - 1.0).abs() < 1e-9
}

/// A phase with its allocated share of a total cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCost {
    /// Phase label
    pub name: String,

    /// Share of the total cost
    pub proportion: f64,

    /// Allocated cost, rounded to centavos
    pub estimated_cost: Money,
}

/// A phase cost laid onto the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPhase {
    /// Phase label
    pub name: String,

    /// Share of the total cost
    pub proportion: f64,

    /// Allocated cost, rounded to centavos
    pub estimated_cost: Money,

    /// Duration in calendar days
    pub duration_days: i64,

    /// First day of the phase (always a business day)
    pub start: NaiveDate,

    /// Last day of the phase: start + duration in calendar days
    pub end: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_order_and_values() {
        let names: Vec<&str> = PHASE_PLAN.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Mobilization",
                "Panels",
                "Roofing",
                "External Cladding",
                "Internal Cladding/Ceiling"
            ]
        );

        let proportions: Vec<f64> = PHASE_PLAN.iter().map(|p| p.proportion).collect();
        assert_eq!(proportions, vec![0.25, 0.25, 0.20, 0.20, 0.10]);

        let durations: Vec<i64> = PHASE_PLAN.iter().map(|p| p.duration_days).collect();
        assert_eq!(durations, vec![20, 20, 15, 15, 10]);
    }

    #[test]
    fn test_plan_proportions_sum_to_one() {
        assert!(plan_proportions_are_complete());
    }
}
