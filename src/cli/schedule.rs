//! Phase allocation and schedule commands
//!
//! `phases` splits a unit's base cost across the five construction phases;
//! `schedule` also lays them onto the business-day calendar.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::phase_table;
use crate::error::BudgetResult;
use crate::models::{CostedUnit, ScheduledPhase};
use crate::services::{PhaseAllocator, ScheduleBuilder};
use crate::session::Session;

/// Resolve the unit to analyze: an explicit name, or the first in the batch
pub fn select_unit<'a>(session: &'a Session, name: Option<&str>) -> BudgetResult<&'a CostedUnit> {
    match name {
        Some(name) => session.unit(name),
        None => session.units().first().ok_or_else(|| {
            crate::error::BudgetError::invalid_input("the batch is empty; nothing to analyze")
        }),
    }
}

/// Resolve the schedule anchor: an explicit date string, or the settings default
pub fn resolve_anchor(settings: &Settings, start: Option<&str>) -> BudgetResult<NaiveDate> {
    match start {
        Some(s) => ScheduleBuilder::parse_anchor(s),
        None => Ok(settings.anchor_date),
    }
}

/// Allocate and schedule one unit's phases
pub fn scheduled_phases_for(
    unit: &CostedUnit,
    anchor: NaiveDate,
) -> BudgetResult<Vec<ScheduledPhase>> {
    let phases = PhaseAllocator::allocate(unit.costs.total);
    ScheduleBuilder::new().schedule(&phases, anchor)
}

/// Print the phase allocation and schedule for a unit
pub fn handle_schedule(
    session: &Session,
    settings: &Settings,
    unit_name: Option<&str>,
    start: Option<&str>,
) -> BudgetResult<()> {
    let unit = select_unit(session, unit_name)?;
    let anchor = resolve_anchor(settings, start)?;
    let scheduled = scheduled_phases_for(unit, anchor)?;

    println!("Construction phases for {} (anchor {})", unit.name(), anchor);
    println!("{}", phase_table(&scheduled, &settings.currency_symbol));
    Ok(())
}
