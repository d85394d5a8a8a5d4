use clap::Parser;
use std::io::IsTerminal;

mod cli;
mod commands;
mod domain;
mod services;

pub use chrono::NaiveDate;
pub use cli::{Cli, Commands};
pub use domain::models::{FormReport, LeaseConfig, SavedReport, StatusReport, TrackReport};
pub use services::controller::{LeaseError, Session};
pub use services::output::{display_metrics, group_thousands, print_err, print_one, render_metrics};
pub use services::storage::{format_date, lease_path};

fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<LeaseError>()
        .map(LeaseError::code)
        .unwrap_or("INTERNAL")
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    log::debug!("evaluating as of {}", today);

    if let Err(e) = commands::handle_lease_commands(&cli, today) {
        print_err(cli.json, error_code(&e), &format!("{:#}", e));
        std::process::exit(1);
    }
}
