pub mod loader;
pub mod output;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use rust_decimal::Decimal;

use crate::errors::ForecastError;
use crate::simulation::{simulate, SimulationConfig};

/// Projects an account balance forward from a CSV of recurring rules.
#[derive(Parser, Debug)]
#[command(name = "forecast_core_cli")]
#[command(about = "Forecast an account balance from recurring income and expense rules")]
pub struct Cli {
    /// Path to the input CSV file.
    #[arg(long, short)]
    input: PathBuf,

    /// Number of days to forecast.
    #[arg(long, short, default_value_t = 30)]
    days: u32,

    /// Starting balance.
    #[arg(long, short = 'b', default_value = "0.00")]
    start_balance: Decimal,

    /// First simulated day (ISO date, defaults to today).
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Optional path to export the forecast as CSV.
    #[arg(long, short)]
    export: Option<PathBuf>,
}

pub fn run_cli() -> Result<(), ForecastError> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<(), ForecastError> {
    if cli.days == 0 {
        return Err(ForecastError::InvalidHorizon);
    }
    if !cli.input.is_file() {
        return Err(ForecastError::InputNotFound(
            cli.input.display().to_string(),
        ));
    }

    let rules = loader::load_rules(&cli.input)?;
    let start_date = cli
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    let config = SimulationConfig {
        start_balance: cli.start_balance.round_dp(2),
        start_date,
        horizon_days: cli.days,
        rules,
    };

    tracing::info!(
        days = config.horizon_days,
        rules = config.rules.len(),
        %start_date,
        "running forecast"
    );

    let entries = simulate(&config);
    output::print_forecast(&config, &entries);
    if let Some(path) = cli.export.as_ref() {
        output::export_csv(path, &entries)?;
    }
    Ok(())
}
