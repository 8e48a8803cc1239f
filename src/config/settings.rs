//! User settings for obra-cli
//!
//! Default markups, the schedule anchor date, display currency and optional
//! access credentials, loadable from a JSON file. Every field has a default
//! so a partial settings file works.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::services::{DEFAULT_ANCHOR, DEFAULT_LABOR_MARKUP_PCT, DEFAULT_MATERIAL_MARKUP_PCT};

fn default_labor_markup() -> f64 {
    DEFAULT_LABOR_MARKUP_PCT
}

fn default_material_markup() -> f64 {
    DEFAULT_MATERIAL_MARKUP_PCT
}

fn default_anchor_date() -> NaiveDate {
    DEFAULT_ANCHOR.parse().expect("valid constant date")
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Labor markup percentage applied to the baseline batch
    #[serde(default = "default_labor_markup")]
    pub labor_markup_pct: f64,

    /// Material markup percentage applied to the baseline batch
    #[serde(default = "default_material_markup")]
    pub material_markup_pct: f64,

    /// Default schedule anchor date
    #[serde(default = "default_anchor_date")]
    pub anchor_date: NaiveDate,

    /// Currency symbol used in tables and exports
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Optional username -> password map; when non-empty the CLI requires
    /// credentials
    #[serde(default)]
    pub credentials: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            labor_markup_pct: default_labor_markup(),
            material_markup_pct: default_material_markup(),
            anchor_date: default_anchor_date(),
            currency_symbol: default_currency_symbol(),
            credentials: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> BudgetResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BudgetError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("{}: {}", path.display(), e)))
    }
}
