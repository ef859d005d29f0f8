use crate::models::City;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for bikeshare
/// Descriptive statistics over US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: popular times, stations, trips and user demographics",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Without a subcommand the interactive session is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Interactive,

    /// Compute all statistics for a city in one shot
    Stats {
        #[arg(long, value_enum, help = "City to analyse")]
        city: City,

        #[arg(long, help = "Filter by month (1 = January ... 6 = June)")]
        month: Option<u32>,

        #[arg(
            long,
            requires = "month",
            help = "Filter by day of month (1-31), requires --month"
        )]
        day: Option<u32>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(
            long,
            value_name = "N",
            help = "Also print the first N matching trips (text format only)"
        )]
        raw: Option<usize>,

        #[arg(long = "no-timing", help = "Do not print how long each statistic took")]
        no_timing: bool,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(
            long,
            short = 'f',
            requires = "init",
            help = "Overwrite an existing configuration file"
        )]
        force: bool,
    },
}
