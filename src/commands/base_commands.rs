use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::report_format::ReportFormat;
use crate::services::simulation::DEFAULT_SEED;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a single project run and report the outcome
    Simulate {
        /// Project complexity factor; accepts arithmetic expressions like "1.5 * 2"
        complexity: String,
        /// Seed for the random generator
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Phase definition YAML file; the five standard phases when omitted
        #[arg(short, long)]
        phases: Option<String>,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
        /// Timeline start date for the gantt diagram (YYYY-MM-DD)
        #[arg(short = 'd', long, default_value_t = default_start_date())]
        start_date: String,
        /// Optional output file for a Mermaid gantt diagram of the timeline
        #[arg(short, long)]
        gantt: Option<String>,
    },
    /// Run repeated simulations over derived seeds and report percentiles
    SimulateN {
        /// Project complexity factor; accepts arithmetic expressions like "1.5 * 2"
        complexity: String,
        /// Base seed; iteration i uses seed + i
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Phase definition YAML file; the five standard phases when omitted
        #[arg(short, long)]
        phases: Option<String>,
        /// Number of simulation iterations
        #[arg(short = 'n', long, default_value_t = 1000)]
        iterations: usize,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
        /// Optional output file for a PNG histogram of total durations
        #[arg(long)]
        histogram: Option<String>,
    },
    /// Write the default phase definitions to a YAML file
    ExportPhases {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
