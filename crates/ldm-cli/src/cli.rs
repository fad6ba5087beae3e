//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ldm_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ldm-checker")]
#[command(version)]
#[command(about = "Loading-meter and vehicle fit checks for transport orders")]
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
    /// Analyze an extracted transport order (JSON)
    Analyze {
        /// Path to order JSON file
        order: PathBuf,

        /// Override the requested vehicle (bus, solówka, naczepa)
        #[arg(long)]
        vehicle: Option<String>,

        /// Reference date for relative dates (YYYY-MM-DD). Defaults to today.
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,
    },

    /// Check a cargo list (CSV) against a vehicle
    Check {
        /// Path to CSV file with length, width, height, quantity, weight columns
        #[arg(long)]
        cargo: PathBuf,

        /// Vehicle to check (bus, solówka, naczepa). Uses config value if not specified.
        #[arg(long)]
        vehicle: Option<String>,

        /// Check against every vehicle
        #[arg(long)]
        all: bool,
    },

    /// Suggest the smallest vehicle that fits a cargo list (CSV)
    Suggest {
        /// Path to CSV file with length, width, height, quantity, weight columns
        #[arg(long)]
        cargo: PathBuf,
    },

    /// Resolve a Polish relative date expression (e.g. "jutro", "za 3 dni")
    ResolveDate {
        /// Date expression
        text: String,

        /// Reference date (YYYY-MM-DD). Defaults to today.
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,
    },

    /// Show the vehicle catalog
    Vehicles,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default vehicle (bus, solówka, naczepa)
        #[arg(long)]
        set_default_vehicle: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable telemetry logging
        #[arg(long)]
        set_telemetry: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
