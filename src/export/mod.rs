//! Export surfaces
//!
//! CSV workbook sheets, JSON session snapshots and the textual commercial
//! proposal. All exports read computed records; none of them mutate session
//! state.

pub mod csv;
pub mod json;
pub mod proposal;

pub use csv::{export_workbook, write_phases_csv, write_simulations_csv, write_summary_csv};
pub use json::export_session_json;
pub use proposal::render_proposal;
