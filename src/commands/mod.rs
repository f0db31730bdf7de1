pub mod base_commands;
pub mod completions_cmd;
pub mod export_phases_cmd;
pub mod report_format;
pub mod simulate_cmd;
pub mod simulate_n_cmd;
