//! Export and proposal commands
//!
//! `export` writes the CSV workbook (summary + phases, plus simulations when
//! any exist) and a JSON session snapshot; `proposal` renders the textual
//! commercial proposal for one what-if simulation.

use std::path::Path;

use crate::cli::schedule::{resolve_anchor, scheduled_phases_for, select_unit};
use crate::cli::simulate::add_what_ifs;
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_session_json, export_workbook, render_proposal};
use crate::services::{PhaseAllocator, ScheduleBuilder};
use crate::session::Session;

/// Write the workbook and JSON snapshot into a directory
pub fn handle_export(
    session: &mut Session,
    settings: &Settings,
    out_dir: &Path,
    unit_name: Option<&str>,
    start: Option<&str>,
    specs: &[String],
) -> BudgetResult<()> {
    add_what_ifs(session, specs)?;

    let unit = select_unit(session, unit_name)?.clone();
    let anchor = resolve_anchor(settings, start)?;
    let phases = scheduled_phases_for(&unit, anchor)?;

    let written = export_workbook(
        out_dir,
        session.units(),
        &phases,
        session.simulations().list(),
    )?;

    let snapshot = export_session_json(
        session.units(),
        session.simulations().list(),
        &session.comparison(),
    )?;
    let snapshot_path = out_dir.join("session.json");
    std::fs::write(&snapshot_path, snapshot)?;

    for path in written.iter().chain(std::iter::once(&snapshot_path)) {
        println!("Wrote {}", path.display());
    }
    if session.simulations().is_empty() {
        println!("No simulations in this session; simulations.csv was not produced.");
    }
    Ok(())
}

/// Render the commercial proposal for one what-if spec
pub fn handle_proposal(
    session: &mut Session,
    settings: &Settings,
    spec: &str,
    start: Option<&str>,
) -> BudgetResult<()> {
    add_what_ifs(session, std::slice::from_ref(&spec.to_string()))?;
    let simulation = session
        .simulations()
        .list()
        .last()
        .cloned()
        .ok_or_else(|| BudgetError::invalid_input("no simulation to render"))?;

    let anchor = resolve_anchor(settings, start)?;
    let phases = PhaseAllocator::allocate(simulation.costs.total);
    let scheduled = ScheduleBuilder::new().schedule(&phases, anchor)?;

    print!(
        "{}",
        render_proposal(&simulation, &scheduled, &settings.currency_symbol)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{import::default_fixture, CostModel};

    fn session() -> Session {
        Session::open(CostModel::default(), default_fixture()).unwrap()
    }

    #[test]
    fn test_export_writes_workbook_and_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session();
        handle_export(
            &mut s,
            &Settings::default(),
            dir.path(),
            None,
            None,
            &["150:836.47".to_string()],
        )
        .unwrap();

        assert!(dir.path().join("summary.csv").exists());
        assert!(dir.path().join("phases.csv").exists());
        assert!(dir.path().join("simulations.csv").exists());
        assert!(dir.path().join("session.json").exists());
    }

    #[test]
    fn test_export_without_simulations_skips_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session();
        handle_export(&mut s, &Settings::default(), dir.path(), None, None, &[]).unwrap();
        assert!(!dir.path().join("simulations.csv").exists());
        assert!(dir.path().join("session.json").exists());
    }

    #[test]
    fn test_export_unknown_unit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session();
        let err = handle_export(
            &mut s,
            &Settings::default(),
            dir.path(),
            Some("House 99"),
            None,
            &[],
        )
        .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
