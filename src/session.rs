//! Per-session context
//!
//! All interaction-scoped state lives on one explicit `Session` object: the
//! costed unit batch and the simulation store. A session is created per
//! process run and discarded at exit; there are no process-wide singletons,
//! so a server embedding this crate gets isolation by holding one `Session`
//! per connection.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{CostedUnit, Unit};
use crate::services::{ComparisonBuilder, ComparisonRow, CostModel, SimulationStore};

/// Session-scoped state: the current unit batch and what-if simulations
#[derive(Debug, Clone)]
pub struct Session {
    cost_model: CostModel,
    units: Vec<CostedUnit>,
    simulations: SimulationStore,
}

impl Session {
    /// Open a session over a unit batch, costing it with the given model
    pub fn open(cost_model: CostModel, batch: Vec<Unit>) -> BudgetResult<Self> {
        let units = cost_model.cost_batch(&batch)?;
        Ok(Self {
            cost_model,
            units,
            simulations: SimulationStore::new(),
        })
    }

    /// The costed unit batch, in input order
    pub fn units(&self) -> &[CostedUnit] {
        &self.units
    }

    /// Look up one costed unit by name
    pub fn unit(&self, name: &str) -> BudgetResult<&CostedUnit> {
        self.units
            .iter()
            .find(|u| u.name() == name)
            .ok_or_else(|| BudgetError::invalid_input(format!("unknown unit '{}'", name)))
    }

    /// The cost model this session costs batches with
    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// The simulation store (read access)
    pub fn simulations(&self) -> &SimulationStore {
        &self.simulations
    }

    /// The simulation store (mutable access for add/clear)
    pub fn simulations_mut(&mut self) -> &mut SimulationStore {
        &mut self.simulations
    }

    /// Replace the unit batch wholesale, re-costing it. Simulations are
    /// untouched: they belong to the session, not the batch.
    pub fn replace_batch(&mut self, batch: Vec<Unit>) -> BudgetResult<()> {
        self.units = self.cost_model.cost_batch(&batch)?;
        Ok(())
    }

    /// Build the comparison series over the current batch and simulations
    pub fn comparison(&self) -> Vec<ComparisonRow> {
        ComparisonBuilder::build(&self.units, self.simulations.list())
    }
}
