//! Terminal tables for units, phases and simulations
//!
//! Row structs hold pre-formatted strings so one table builder covers every
//! numeric style (money with thousands grouping, percentages, dates).

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CostedUnit, Money, ScheduledPhase, Simulation};

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "Unit")]
    name: String,
    #[tabled(rename = "Area (m²)")]
    area: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Total Cost")]
    total: String,
    #[tabled(rename = "Final Cost")]
    final_cost: String,
    #[tabled(rename = "Efficiency")]
    efficiency: String,
    #[tabled(rename = "Best Value")]
    best_value: String,
}

#[derive(Tabled)]
struct PhaseRow {
    #[tabled(rename = "Phase")]
    name: String,
    #[tabled(rename = "Proportion")]
    proportion: String,
    #[tabled(rename = "Estimated Cost")]
    estimated_cost: String,
    #[tabled(rename = "Duration (days)")]
    duration: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
}

#[derive(Tabled)]
struct SimulationRow {
    #[tabled(rename = "Simulation")]
    name: String,
    #[tabled(rename = "Area (m²)")]
    area: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Labor %")]
    labor: String,
    #[tabled(rename = "Material %")]
    material: String,
    #[tabled(rename = "Final Cost")]
    final_cost: String,
    #[tabled(rename = "Efficiency")]
    efficiency: String,
}

fn money(value: f64, symbol: &str) -> String {
    Money::from_float(value).format_with_symbol(symbol)
}

/// Render the costed unit batch as a table
pub fn unit_table(units: &[CostedUnit], symbol: &str) -> String {
    let rows: Vec<UnitRow> = units
        .iter()
        .map(|u| UnitRow {
            name: u.unit.name.clone(),
            area: format!("{:.2}", u.unit.area_m2),
            unit_price: money(u.unit.unit_price, symbol),
            total: money(u.costs.total, symbol),
            final_cost: money(u.costs.final_cost, symbol),
            efficiency: format!("{:.4}", u.costs.efficiency),
            best_value: if u.best_value { "★".to_string() } else { String::new() },
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render a scheduled phase breakdown as a table
pub fn phase_table(phases: &[ScheduledPhase], symbol: &str) -> String {
    let rows: Vec<PhaseRow> = phases
        .iter()
        .map(|p| PhaseRow {
            name: p.name.clone(),
            proportion: format!("{:.0}%", p.proportion * 100.0),
            estimated_cost: p.estimated_cost.format_with_symbol(symbol),
            duration: p.duration_days.to_string(),
            start: p.start.format("%Y-%m-%d").to_string(),
            end: p.end.format("%Y-%m-%d").to_string(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render the stored simulations as a table
pub fn simulation_table(simulations: &[Simulation], symbol: &str) -> String {
    let rows: Vec<SimulationRow> = simulations
        .iter()
        .map(|s| SimulationRow {
            name: s.name.clone(),
            area: format!("{:.2}", s.area_m2),
            unit_price: money(s.unit_price, symbol),
            labor: format!("{:.1}", s.labor_markup_pct),
            material: format!("{:.1}", s.material_markup_pct),
            final_cost: money(s.costs.final_cost, symbol),
            efficiency: format!("{:.4}", s.costs.efficiency),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
