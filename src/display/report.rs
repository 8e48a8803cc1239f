//! Report formatting utilities for terminal output
//!
//! Formatting helpers shared by the comparison chart and the proposal text.

use crate::models::Money;
use crate::services::ComparisonRow;

/// Format a money value with the configured currency symbol
pub fn format_money(value: f64, symbol: &str) -> String {
    Money::from_float(value).format_with_symbol(symbol)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the comparison series as a horizontal bar chart, one line per row
pub fn comparison_chart(rows: &[ComparisonRow], symbol: &str, width: usize) -> String {
    if rows.is_empty() {
        return "Nothing to compare.".to_string();
    }

    let max_cost = rows.iter().map(|r| r.final_cost).fold(0.0_f64, f64::max);
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for row in rows {
        output.push_str(&format!(
            "{:<name_width$}  {}  {}\n",
            row.name,
            format_bar(row.final_cost, max_cost, width),
            format_money(row.final_cost, symbol),
            name_width = name_width
        ));
    }
    output
}
