use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::simulate_cmd::EXIT_FAILURE;
use crate::domain::phase::default_phases;
use crate::services::phases_yaml::serialize_phases_to_yaml;

pub fn export_phases_command(cmd: Commands) -> ExitCode {
    let Commands::ExportPhases { output } = cmd else {
        return ExitCode::SUCCESS;
    };

    let mut buffer = Vec::new();
    if let Err(e) = serialize_phases_to_yaml(&mut buffer, &default_phases()) {
        eprintln!("Failed to serialize phase definitions: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }
    if let Err(e) = std::fs::write(&output, buffer) {
        eprintln!("Failed to write output file: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    println!("Default phase definitions written to {output}");
    ExitCode::SUCCESS
}
