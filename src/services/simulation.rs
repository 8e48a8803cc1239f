//! Simulation store service
//!
//! Session-lifetime collection of what-if simulations. Append-only except
//! for an explicit `clear`; insertion order is the display and comparison
//! order. The store belongs to one session and is discarded with it.

use chrono::Utc;
use uuid::Uuid;

use crate::error::BudgetResult;
use crate::models::Simulation;
use crate::services::cost::CostModel;

/// Ordered, append-only collection of what-if simulations
#[derive(Debug, Clone, Default)]
pub struct SimulationStore {
    simulations: Vec<Simulation>,
}

impl SimulationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the cost model over a what-if budget and store the result.
    ///
    /// When `name` is `None` the record gets the label
    /// `"Simulation {n}"` where `n` is the store size + 1 at call time, so
    /// the counter restarts after `clear`.
    pub fn add(
        &mut self,
        name: Option<String>,
        area_m2: f64,
        unit_price: f64,
        labor_markup_pct: f64,
        material_markup_pct: f64,
    ) -> BudgetResult<Simulation> {
        let costs = CostModel::compute(area_m2, unit_price, labor_markup_pct, material_markup_pct)?;

        let simulation = Simulation {
            id: Uuid::new_v4(),
            name: name.unwrap_or_else(|| format!("Simulation {}", self.simulations.len() + 1)),
            area_m2,
            unit_price,
            labor_markup_pct,
            material_markup_pct,
            costs,
            created_at: Utc::now(),
        };

        self.simulations.push(simulation.clone());
        Ok(simulation)
    }

    /// All stored simulations, in insertion order
    pub fn list(&self) -> &[Simulation] {
        &self.simulations
    }

    /// Remove every stored simulation
    pub fn clear(&mut self) {
        self.simulations.clear();
    }

    /// Number of stored simulations
    pub fn len(&self) -> usize {
        self.simulations.len()
    }

    /// Whether the store holds no simulations
    pub fn is_empty(&self) -> bool {
        self.simulations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_list_ends_with_added_record() {
        let mut store = SimulationStore::new();
        store.add(None, 150.0, 836.47, 2.5, 1.3).unwrap();
        let added = store.add(Some("Bigger lot".into()), 180.0, 836.47, 2.5, 1.3).unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.last().unwrap(), &added);
    }

    #[test]
    fn test_default_names_auto_increment() {
        let mut store = SimulationStore::new();
        let first = store.add(None, 150.0, 836.47, 2.5, 1.3).unwrap();
        let second = store.add(None, 160.0, 836.47, 2.5, 1.3).unwrap();
        assert_eq!(first.name, "Simulation 1");
        assert_eq!(second.name, "Simulation 2");
    }

    #[test]
    fn test_named_add_does_not_consume_counter() {
        // The default label tracks the store size, not a separate counter.
        let mut store = SimulationStore::new();
        store.add(Some("Custom".into()), 150.0, 836.47, 2.5, 1.3).unwrap();
        let next = store.add(None, 160.0, 836.47, 2.5, 1.3).unwrap();
        assert_eq!(next.name, "Simulation 2");
    }

    #[test]
    fn test_clear_empties_and_resets_counter() {
        let mut store = SimulationStore::new();
        store.add(None, 150.0, 836.47, 2.5, 1.3).unwrap();
        store.add(None, 160.0, 836.47, 2.5, 1.3).unwrap();

        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());

        let restarted = store.add(None, 170.0, 836.47, 2.5, 1.3).unwrap();
        assert_eq!(restarted.name, "Simulation 1");
    }

    #[test]
    fn test_invalid_input_is_not_stored() {
        let mut store = SimulationStore::new();
        let err = store.add(None, -1.0, 836.47, 2.5, 1.3).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(store.is_empty());
    }

    #[test]
    fn test_stored_costs_match_cost_model() {
        let mut store = SimulationStore::new();
        let sim = store.add(None, 140.42, 836.47, 2.5, 1.3).unwrap();
        let expected = CostModel::compute(140.42, 836.47, 2.5, 1.3).unwrap();
        assert_eq!(sim.costs, expected);
    }
}
