//! obra - construction budget and schedule calculator
//!
//! This library computes construction-project budgets for a batch of housing
//! units: cost derivation through labor/material markups, a five-phase cost
//! allocation, a business-day execution schedule, and what-if simulations
//! compared against the baseline batch.
//!
//! # Architecture
//!
//! - `config`: user settings (markups, anchor date, currency, credentials)
//! - `error`: custom error types
//! - `models`: core data models (units, money, phases, simulations)
//! - `calendar`: business-day date arithmetic
//! - `services`: the calculation engine and CSV batch ingestion
//! - `session`: explicit per-session state (batch + simulation store)
//! - `auth`: pluggable credential verification
//! - `display`: terminal tables and the comparison chart
//! - `export`: CSV workbook, JSON snapshot, commercial proposal
//! - `cli`: command handlers for the `obra` binary
//!
//! # Example
//!
//! ```rust
//! use obra::services::{import::default_fixture, CostModel};
//! use obra::session::Session;
//!
//! let session = Session::open(CostModel::default(), default_fixture()).unwrap();
//! assert_eq!(session.units().len(), 6);
//! ```

pub mod auth;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod session;

pub use error::{BudgetError, BudgetResult};
