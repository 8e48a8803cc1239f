//! CSV batch ingestion
//!
//! Loads a batch of housing units from a CSV file with a `name,area,unit_price`
//! header, validating each row. When no file is supplied the default fixture
//! batch is used instead.

use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Unit;

/// Unit price shared by every fixture unit
const FIXTURE_UNIT_PRICE: f64 = 836.47;

/// Built areas of the six fixture units
const FIXTURE_AREAS: [f64; 6] = [140.42, 140.39, 134.12, 141.43, 141.30, 139.13];

#[derive(Debug, Deserialize)]
struct UnitRecord {
    name: String,
    area: f64,
    unit_price: f64,
}

/// The default six-unit batch used when no spreadsheet is uploaded
pub fn default_fixture() -> Vec<Unit> {
    FIXTURE_AREAS
        .iter()
        .enumerate()
        .map(|(i, area)| Unit::new(format!("House {}", i + 1), *area, FIXTURE_UNIT_PRICE))
        .collect()
}

/// Read a unit batch from any CSV source.
///
/// Expects a header row with `name`, `area` and `unit_price` columns. Rows
/// with non-positive area or price fail with `InvalidInput` naming the row.
pub fn read_units<R: Read>(reader: R) -> BudgetResult<Vec<Unit>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut units = Vec::new();

    for (row, result) in csv_reader.deserialize::<UnitRecord>().enumerate() {
        let record = result?;
        if !(record.area > 0.0) {
            return Err(BudgetError::invalid_input(format!(
                "row {}: area must be positive, got {}",
                row + 1,
                record.area
            )));
        }
        if !(record.unit_price > 0.0) {
            return Err(BudgetError::invalid_input(format!(
                "row {}: unit price must be positive, got {}",
                row + 1,
                record.unit_price
            )));
        }
        units.push(Unit::new(record.name, record.area, record.unit_price));
    }

    Ok(units)
}

/// Read a unit batch from a CSV file on disk
pub fn load_units_file(path: &Path) -> BudgetResult<Vec<Unit>> {
    let file = std::fs::File::open(path)?;
    read_units(file)
}
