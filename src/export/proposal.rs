//! Commercial proposal rendering
//!
//! Produces the textual proposal document for one simulation and its
//! scheduled phase table, ready to paste into a client-facing document.

use crate::display::report::{format_money, format_percentage};
use crate::models::{ScheduledPhase, Simulation};

/// Render a commercial proposal from a simulation and its phase schedule
pub fn render_proposal(
    simulation: &Simulation,
    phases: &[ScheduledPhase],
    symbol: &str,
) -> String {
    let mut out = String::new();

    out.push_str("COMMERCIAL PROPOSAL\n");
    out.push_str("===================\n\n");
    out.push_str(&format!("Reference: {}\n", simulation.name));
    out.push_str(&format!(
        "Date: {}\n\n",
        simulation.created_at.format("%Y-%m-%d")
    ));

    out.push_str("Scope\n-----\n");
    out.push_str(&format!(
        "Construction of a {:.2} m² housing unit at {} per m².\n\n",
        simulation.area_m2,
        format_money(simulation.unit_price, symbol)
    ));

    out.push_str("Budget\n------\n");
    out.push_str(&format!(
        "Base cost:            {}\n",
        format_money(simulation.costs.total, symbol)
    ));
    out.push_str(&format!(
        "After labor markup:   {} ({})\n",
        format_money(simulation.costs.after_labor, symbol),
        format_percentage(simulation.labor_markup_pct)
    ));
    out.push_str(&format!(
        "Final price:          {} (material {})\n\n",
        format_money(simulation.costs.final_cost, symbol),
        format_percentage(simulation.material_markup_pct)
    ));

    out.push_str("Execution schedule\n------------------\n");
    for phase in phases {
        out.push_str(&format!(
            "{:<26} {}  {} to {}  ({} days)\n",
            phase.name,
            phase.estimated_cost.format_with_symbol(symbol),
            phase.start.format("%Y-%m-%d"),
            phase.end.format("%Y-%m-%d"),
            phase.duration_days
        ));
    }

    out.push_str("\nValues estimated from the current cost model; ");
    out.push_str("valid for 30 days from the date above.\n");
    out
}
