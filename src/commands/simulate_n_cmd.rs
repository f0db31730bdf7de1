use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::render_monte_carlo_output;
use crate::commands::simulate_cmd::{EXIT_CONFIG, EXIT_FAILURE};
use crate::domain::phase::default_phases;
use crate::services::expression::evaluate_expression;
use crate::services::histogram::write_histogram_png;
use crate::services::monte_carlo::run_monte_carlo;
use crate::services::phases_yaml::load_phases_from_yaml_file;
use crate::services::simulation::ProjectSimulator;

pub fn simulate_n_command(cmd: Commands) -> ExitCode {
    let Commands::SimulateN {
        complexity,
        seed,
        phases,
        iterations,
        output,
        format,
        histogram,
    } = cmd
    else {
        return ExitCode::SUCCESS;
    };

    let complexity = match evaluate_expression(&complexity) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Invalid complexity expression: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let phase_definitions = match phases {
        Some(path) => match load_phases_from_yaml_file(&path) {
            Ok(definitions) => definitions,
            Err(e) => {
                eprintln!("Failed to load phase definitions: {e}");
                return ExitCode::from(EXIT_CONFIG);
            }
        },
        None => default_phases(),
    };

    let simulator = match ProjectSimulator::new(phase_definitions) {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Invalid phase configuration: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let mc_output = match run_monte_carlo(&simulator, complexity, seed, iterations) {
        Ok(mc_output) => mc_output,
        Err(e) => {
            eprintln!("Failed to run monte carlo simulation: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let rendered = match render_monte_carlo_output(&mc_output, format) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to render monte carlo report: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, rendered) {
                eprintln!("Failed to write monte carlo report: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
            println!(
                "Monte carlo result for {iterations} iterations written to {path}"
            );
        }
        None => println!("{rendered}"),
    }

    if let Some(histogram_path) = histogram {
        if let Err(e) = write_histogram_png(&histogram_path, &mc_output.results) {
            eprintln!("Failed to write histogram: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
        println!("Histogram written to {histogram_path}");
    }

    ExitCode::SUCCESS
}
