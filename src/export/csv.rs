//! CSV export
//!
//! The spreadsheet workbook of the original dashboard becomes one CSV file
//! per sheet: a unit summary sheet and a phase schedule sheet, plus a
//! simulations sheet when the store is non-empty.

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::error::BudgetResult;
use crate::models::{CostedUnit, ScheduledPhase, Simulation};

/// Write the unit summary sheet
pub fn write_summary_csv<W: Write>(units: &[CostedUnit], out: W) -> BudgetResult<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "Unit",
        "Area (m2)",
        "Unit Price",
        "Total Cost",
        "Cost + Labor",
        "Final Cost",
        "Efficiency",
        "Best Value",
    ])?;

    for u in units {
        writer.write_record([
            u.unit.name.clone(),
            format!("{:.2}", u.unit.area_m2),
            format!("{:.2}", u.unit.unit_price),
            format!("{:.2}", u.costs.total),
            format!("{:.2}", u.costs.after_labor),
            format!("{:.2}", u.costs.final_cost),
            format!("{:.6}", u.costs.efficiency),
            u.best_value.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the phase schedule sheet
pub fn write_phases_csv<W: Write>(phases: &[ScheduledPhase], out: W) -> BudgetResult<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "Phase",
        "Proportion",
        "Estimated Cost",
        "Duration (days)",
        "Start",
        "End",
    ])?;

    for p in phases {
        writer.write_record([
            p.name.clone(),
            format!("{:.2}", p.proportion),
            format!("{:.2}", p.estimated_cost.to_float()),
            p.duration_days.to_string(),
            p.start.format("%Y-%m-%d").to_string(),
            p.end.format("%Y-%m-%d").to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the simulations sheet
pub fn write_simulations_csv<W: Write>(simulations: &[Simulation], out: W) -> BudgetResult<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "Simulation",
        "Area (m2)",
        "Unit Price",
        "Labor Markup %",
        "Material Markup %",
        "Total Cost",
        "Final Cost",
        "Efficiency",
    ])?;

    for s in simulations {
        writer.write_record([
            s.name.clone(),
            format!("{:.2}", s.area_m2),
            format!("{:.2}", s.unit_price),
            format!("{:.2}", s.labor_markup_pct),
            format!("{:.2}", s.material_markup_pct),
            format!("{:.2}", s.costs.total),
            format!("{:.2}", s.costs.final_cost),
            format!("{:.6}", s.costs.efficiency),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the workbook into a directory: `summary.csv`, `phases.csv` and,
/// when any simulations exist, `simulations.csv`. Returns the paths written.
pub fn export_workbook(
    dir: &Path,
    units: &[CostedUnit],
    phases: &[ScheduledPhase],
    simulations: &[Simulation],
) -> BudgetResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let summary_path = dir.join("summary.csv");
    write_summary_csv(units, std::fs::File::create(&summary_path)?)?;
    written.push(summary_path);

    let phases_path = dir.join("phases.csv");
    write_phases_csv(phases, std::fs::File::create(&phases_path)?)?;
    written.push(phases_path);

    // No simulations yet is a defined empty state, not an error; the sheet
    // is simply not produced.
    if !simulations.is_empty() {
        let simulations_path = dir.join("simulations.csv");
        write_simulations_csv(simulations, std::fs::File::create(&simulations_path)?)?;
        written.push(simulations_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use crate::services::{CostModel, PhaseAllocator, ScheduleBuilder, SimulationStore};
    use chrono::NaiveDate;

    fn costed_units() -> Vec<CostedUnit> {
        let units = vec![
            Unit::new("House 1", 140.42, 836.47),
            Unit::new("House 2", 134.12, 836.47),
        ];
        CostModel::default().cost_batch(&units).unwrap()
    }

    fn scheduled_phases() -> Vec<ScheduledPhase> {
        let phases = PhaseAllocator::allocate(100_000.0);
        ScheduleBuilder::new()
            .schedule(&phases, NaiveDate::from_ymd_opt(2025, 7, 15).unwrap())
            .unwrap()
    }

    #[test]
    fn test_summary_csv_shape() {
        let mut buf = Vec::new();
        write_summary_csv(&costed_units(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Unit,Area (m2)"));
        assert!(lines[1].starts_with("House 1,140.42,836.47"));
        assert!(lines[2].ends_with("true")); // House 2 is best value
    }

    #[test]
    fn test_phases_csv_shape() {
        let mut buf = Vec::new();
        write_phases_csv(&scheduled_phases(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("Mobilization,0.25,25000.00,20,2025-07-15,2025-08-04"));
    }

    #[test]
    fn test_workbook_skips_simulations_sheet_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let written =
            export_workbook(dir.path(), &costed_units(), &scheduled_phases(), &[]).unwrap();
        assert_eq!(written.len(), 2);
        assert!(dir.path().join("summary.csv").exists());
        assert!(dir.path().join("phases.csv").exists());
        assert!(!dir.path().join("simulations.csv").exists());
    }

    #[test]
    fn test_workbook_with_simulations() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SimulationStore::new();
        store.add(None, 150.0, 836.47, 2.5, 1.3).unwrap();

        let written = export_workbook(
            dir.path(),
            &costed_units(),
            &scheduled_phases(),
            store.list(),
        )
        .unwrap();
        assert_eq!(written.len(), 3);

        let text = std::fs::read_to_string(dir.path().join("simulations.csv")).unwrap();
        assert!(text.contains("Simulation 1,150.00,836.47,2.50,1.30"));
    }
}
