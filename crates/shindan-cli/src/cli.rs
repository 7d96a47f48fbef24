//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use shindan_types::OutputFormat;

#[derive(Parser)]
#[command(name = "shindan-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Car diagnostics - charging voltage checks and oil change scheduling")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single charging-system voltage measurement
    Charging {
        /// Measured voltage at the battery terminals
        #[arg(long)]
        voltage: Option<f64>,

        /// Headlights were on during measurement
        #[arg(long)]
        headlights: bool,

        /// Heater blower was on during measurement
        #[arg(long)]
        blower: bool,

        /// Rear defroster was on during measurement
        #[arg(long)]
        defroster: bool,

        /// Optional notes stored with the evaluation
        #[arg(long, short = 'n')]
        notes: Option<String>,

        /// Do not record the evaluation in the history store
        #[arg(long)]
        no_record: bool,
    },

    /// One-hop measurement exception eligibility
    Exception {
        /// Measurement strength (strong, moderate, weak)
        strength: String,
    },

    /// Oil-change outlook from mileage and maintenance logs
    Schedule {
        /// Path to mileage log CSV (date, odometer_miles)
        #[arg(long)]
        mileage_log: PathBuf,

        /// Path to maintenance log CSV (date, event_type, odometer_miles)
        #[arg(long)]
        maintenance_log: PathBuf,

        /// Current odometer reading in miles
        #[arg(long, short = 'c')]
        current: f64,

        /// Oil change interval override in miles. Uses profile/config if not specified.
        #[arg(long, short = 'i')]
        interval: Option<f64>,

        /// Path to vehicle profile TOML
        #[arg(long, short = 'p')]
        profile: Option<PathBuf>,
    },

    /// Classify every measurement in a CSV batch
    BatchCharging {
        /// Path to measurements CSV (voltage, headlights, blower, defroster)
        csv: PathBuf,
    },

    /// Show evaluation history
    History {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Export evaluation history to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default oil change interval in miles
        #[arg(long)]
        set_interval: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
