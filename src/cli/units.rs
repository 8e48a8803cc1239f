//! Unit listing command
//!
//! Prints the costed batch table and points out the best-value unit(s).

use crate::config::Settings;
use crate::display::unit_table;
use crate::error::BudgetResult;
use crate::session::Session;

/// Print the costed unit batch
pub fn handle_units(session: &Session, settings: &Settings) -> BudgetResult<()> {
    if session.units().is_empty() {
        println!("The batch is empty.");
        return Ok(());
    }

    println!("{}", unit_table(session.units(), &settings.currency_symbol));

    let best: Vec<&str> = session
        .units()
        .iter()
        .filter(|u| u.best_value)
        .map(|u| u.name())
        .collect();
    println!("Best value: {}", best.join(", "));
    Ok(())
}
