use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use obra::auth::{Authenticator, StaticCredentials};
use obra::cli::{
    handle_compare, handle_export, handle_proposal, handle_schedule, handle_simulate, handle_units,
};
use obra::config::Settings;
use obra::error::BudgetError;
use obra::services::{import, CostModel};
use obra::session::Session;

#[derive(Parser)]
#[command(
    name = "obra",
    version,
    about = "Construction budget and schedule calculator",
    long_about = "Computes housing-unit construction budgets through labor and \
                  material markups, allocates costs across the five standard \
                  construction phases, lays them onto a business-day schedule, \
                  and compares what-if simulations against the baseline batch."
)]
struct Cli {
    /// CSV batch of units (name,area,unit_price); defaults to the built-in fixture
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(short, long, global = true, env = "OBRA_CONFIG")]
    config: Option<PathBuf>,

    /// Username, required when the settings file carries credentials
    #[arg(long, global = true, env = "OBRA_USER")]
    user: Option<String>,

    /// Password, required when the settings file carries credentials
    #[arg(long, global = true, env = "OBRA_PASSWORD")]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the costed unit batch
    #[command(alias = "ls")]
    Units,

    /// Show phase allocation and schedule for one unit
    Schedule {
        /// Unit name (defaults to the first unit in the batch)
        unit: Option<String>,
        /// Schedule anchor date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Run what-if simulations and compare them with the batch
    Simulate {
        /// What-if specs: [name=]area:price[:labor[:material]]
        #[arg(required = true)]
        specs: Vec<String>,
    },

    /// Show the comparison chart, optionally with extra what-if specs
    Compare {
        /// What-if specs: [name=]area:price[:labor[:material]]
        specs: Vec<String>,
    },

    /// Write the CSV workbook and JSON snapshot into a directory
    Export {
        /// Output directory
        #[arg(short, long, default_value = "export")]
        out: PathBuf,
        /// Unit whose phases are exported (defaults to the first unit)
        #[arg(short, long)]
        unit: Option<String>,
        /// Schedule anchor date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,
        /// What-if specs to include in the simulations sheet
        specs: Vec<String>,
    },

    /// Render a commercial proposal for one what-if spec
    Proposal {
        /// What-if spec: [name=]area:price[:labor[:material]]
        spec: String,
        /// Schedule anchor date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    // Access control is enforced only when credentials are configured.
    let credentials = StaticCredentials::new(settings.credentials.clone());
    if !credentials.is_empty() {
        let user = cli.user.as_deref().unwrap_or_default();
        let password = cli.password.as_deref().unwrap_or_default();
        if !credentials.verify(user, password) {
            return Err(BudgetError::Auth("invalid username or password".into()).into());
        }
    }

    let batch = match &cli.file {
        Some(path) => import::load_units_file(path)?,
        None => import::default_fixture(),
    };

    let cost_model = CostModel::new(settings.labor_markup_pct, settings.material_markup_pct);
    let mut session = Session::open(cost_model, batch)?;

    match cli.command {
        Commands::Units => handle_units(&session, &settings)?,
        Commands::Schedule { unit, start } => {
            handle_schedule(&session, &settings, unit.as_deref(), start.as_deref())?
        }
        Commands::Simulate { specs } => handle_simulate(&mut session, &settings, &specs)?,
        Commands::Compare { specs } => handle_compare(&mut session, &settings, &specs)?,
        Commands::Export {
            out,
            unit,
            start,
            specs,
        } => handle_export(
            &mut session,
            &settings,
            &out,
            unit.as_deref(),
            start.as_deref(),
            &specs,
        )?,
        Commands::Proposal { spec, start } => {
            handle_proposal(&mut session, &settings, &spec, start.as_deref())?
        }
    }

    Ok(())
}
