//! What-if simulation and comparison commands
//!
//! A what-if spec has the form `[name=]area:price[:labor[:material]]`.
//! Omitted markups fall back to the session defaults. Each spec is appended
//! to the session's simulation store, then the batch and the simulations are
//! compared side by side.

use crate::config::Settings;
use crate::display::{comparison_chart, simulation_table};
use crate::error::{BudgetError, BudgetResult};
use crate::session::Session;

const CHART_WIDTH: usize = 40;

/// A parsed what-if spec
#[derive(Debug, Clone, PartialEq)]
pub struct WhatIf {
    pub name: Option<String>,
    pub area_m2: f64,
    pub unit_price: f64,
    pub labor_markup_pct: Option<f64>,
    pub material_markup_pct: Option<f64>,
}

/// Parse a what-if spec of the form `[name=]area:price[:labor[:material]]`
pub fn parse_what_if(spec: &str) -> BudgetResult<WhatIf> {
    let (name, numbers) = match spec.split_once('=') {
        Some((name, rest)) => (Some(name.trim().to_string()), rest),
        None => (None, spec),
    };

    let parts: Vec<&str> = numbers.split(':').collect();
    if parts.len() < 2 || parts.len() > 4 {
        return Err(BudgetError::invalid_input(format!(
            "what-if spec '{}' must be [name=]area:price[:labor[:material]]",
            spec
        )));
    }

    let parse = |value: &str, field: &str| -> BudgetResult<f64> {
        value.trim().parse::<f64>().map_err(|_| {
            BudgetError::invalid_input(format!("what-if spec '{}': bad {} '{}'", spec, field, value))
        })
    };

    Ok(WhatIf {
        name,
        area_m2: parse(parts[0], "area")?,
        unit_price: parse(parts[1], "price")?,
        labor_markup_pct: parts.get(2).map(|v| parse(v, "labor markup")).transpose()?,
        material_markup_pct: parts.get(3).map(|v| parse(v, "material markup")).transpose()?,
    })
}

/// Append parsed specs to the session store
pub fn add_what_ifs(session: &mut Session, specs: &[String]) -> BudgetResult<()> {
    for spec in specs {
        let what_if = parse_what_if(spec)?;
        let labor = what_if
            .labor_markup_pct
            .unwrap_or_else(|| session.cost_model().labor_markup_pct());
        let material = what_if
            .material_markup_pct
            .unwrap_or_else(|| session.cost_model().material_markup_pct());
        session.simulations_mut().add(
            what_if.name,
            what_if.area_m2,
            what_if.unit_price,
            labor,
            material,
        )?;
    }
    Ok(())
}

/// Run what-if simulations and print their table plus the comparison chart
pub fn handle_simulate(
    session: &mut Session,
    settings: &Settings,
    specs: &[String],
) -> BudgetResult<()> {
    add_what_ifs(session, specs)?;

    if session.simulations().is_empty() {
        println!("No simulations in this session.");
        return Ok(());
    }

    println!(
        "{}",
        simulation_table(session.simulations().list(), &settings.currency_symbol)
    );
    println!("Comparison (final cost)");
    print!(
        "{}",
        comparison_chart(&session.comparison(), &settings.currency_symbol, CHART_WIDTH)
    );
    Ok(())
}

/// Print the comparison chart for the batch plus any what-if specs
pub fn handle_compare(
    session: &mut Session,
    settings: &Settings,
    specs: &[String],
) -> BudgetResult<()> {
    add_what_ifs(session, specs)?;
    print!(
        "{}",
        comparison_chart(&session.comparison(), &settings.currency_symbol, CHART_WIDTH)
    );
    Ok(())
}
