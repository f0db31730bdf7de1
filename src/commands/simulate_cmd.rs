use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::render_simulation_result;
use crate::domain::phase::default_phases;
use crate::services::expression::evaluate_expression;
use crate::services::gantt_diagram::generate_gantt_diagram;
use crate::services::phases_yaml::load_phases_from_yaml_file;
use crate::services::simulation::ProjectSimulator;

// Exit codes: 1 = validation/runtime failure, 2 = malformed configuration.
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;

pub fn simulate_command(cmd: Commands) -> ExitCode {
    let Commands::Simulate {
        complexity,
        seed,
        phases,
        output,
        format,
        start_date,
        gantt,
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

    let result = match simulator.simulate(complexity, seed) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to simulate project: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let rendered = match render_simulation_result(&result, format) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to render simulation result: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, rendered) {
                eprintln!("Failed to write simulation result: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
            println!("Simulation result written to {path}");
        }
        None => println!("{rendered}"),
    }

    if let Some(gantt_path) = gantt {
        let start_date = match chrono::NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                eprintln!("Invalid start date: {start_date}");
                return ExitCode::from(EXIT_FAILURE);
            }
        };
        let diagram = generate_gantt_diagram(&result, start_date);
        if let Err(e) = std::fs::write(&gantt_path, diagram) {
            eprintln!("Failed to write gantt diagram: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
        println!("Gantt diagram written to {gantt_path}");
    }

    ExitCode::SUCCESS
}
