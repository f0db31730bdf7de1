mod commands;
mod domain;
mod services;

use std::process::ExitCode;

use clap::Parser;

use crate::commands::base_commands::{CliArgs, Commands};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Simulate { .. } => commands::simulate_cmd::simulate_command(cmd),
        cmd @ Commands::SimulateN { .. } => commands::simulate_n_cmd::simulate_n_command(cmd),
        cmd @ Commands::ExportPhases { .. } => {
            commands::export_phases_cmd::export_phases_command(cmd)
        }
        cmd @ Commands::Completions { .. } => commands::completions_cmd::completions_command(cmd),
    }
}
