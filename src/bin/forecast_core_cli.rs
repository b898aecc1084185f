use colored::Colorize;
use forecast_core::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        eprintln!("{} {err}", "Error:".red().bold());
        std::process::exit(1);
    }
}
