//! Configuration for obra-cli

pub mod settings;

pub use settings::Settings;
