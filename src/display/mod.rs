//! Terminal output formatting
//!
//! Tables for the batch/phase/simulation views and text reports for the
//! comparison chart.

pub mod report;
pub mod table;

pub use report::{comparison_chart, format_bar, format_money, format_percentage};
pub use table::{phase_table, simulation_table, unit_table};
