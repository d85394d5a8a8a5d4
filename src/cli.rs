use chrono::NaiveDate;
use clap::{Parser, Subcommand};

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, crate::domain::constants::DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[derive(Parser, Debug)]
#[command(name = "milepace", version, about = "Lease mileage pace tracker")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(
        long,
        global = true,
        env = "MILEPACE_TODAY",
        value_parser = parse_date,
        help = "Evaluate as of this date (YYYY-MM-DD) instead of the local clock"
    )]
    pub today: Option<NaiveDate>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the active screen and the saved lease terms
    Status,
    /// Save lease terms and switch to tracking; omitted fields keep their pre-filled value
    Configure {
        #[arg(long)]
        annual_miles: Option<u64>,
        #[arg(long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        start_odometer: Option<u64>,
    },
    /// Return to the configuration screen with the current terms pre-filled
    Edit,
    /// Record the current odometer and show pace metrics
    Track { odometer: Option<u64> },
}
