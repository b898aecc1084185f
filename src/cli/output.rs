use std::path::Path;

use rust_decimal::Decimal;

use crate::errors::ForecastError;
use crate::ledger::LedgerEntry;
use crate::simulation::SimulationConfig;

const DATE_COLUMN_SIZE: usize = 10;
const DEFAULT_COLUMN_SIZE: usize = 12;
const COLUMN_BUFFER: usize = 4;

/// Renders the forecast as an aligned terminal table, preceded by the
/// starting balance. Column widths follow the widest cell per column.
pub fn print_forecast(config: &SimulationConfig, entries: &[LedgerEntry]) {
    println!("Starting balance: {}", format_money(config.start_balance));

    let date_width = DATE_COLUMN_SIZE + COLUMN_BUFFER;
    let delta_width = column_width(entries.iter().map(|e| format_signed(e.delta).len()));
    let balance_width = column_width(entries.iter().map(|e| format_money(e.balance).len()));

    let header = format!(
        "{:<date_width$}{:>delta_width$}{:>balance_width$}",
        "Date", "Delta", "Balance"
    );
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for entry in entries {
        println!(
            "{:<date_width$}{:>delta_width$}{:>balance_width$}",
            entry.date.format("%Y-%m-%d").to_string(),
            format_signed(entry.delta),
            format_money(entry.balance),
        );
    }
}

/// Writes one `date,delta,balance` record per simulated day.
pub fn export_csv(path: &Path, entries: &[LedgerEntry]) -> Result<(), ForecastError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "delta", "balance"])?;
    for entry in entries {
        writer.write_record([
            entry.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", entry.delta),
            format!("{:.2}", entry.balance),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn column_width(lengths: impl Iterator<Item = usize>) -> usize {
    lengths.max().unwrap_or(DEFAULT_COLUMN_SIZE) + COLUMN_BUFFER
}

fn format_money(value: Decimal) -> String {
    if value.is_sign_negative() {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

fn format_signed(value: Decimal) -> String {
    if value.is_sign_negative() {
        format!("-${:.2}", -value)
    } else {
        format!("+${:.2}", value)
    }
}
