use clap::ValueEnum;
use thiserror::Error;

use crate::services::simulation_types::{
    MonteCarloOutput, PercentileSummary, SimulationResult,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Yaml,
    Text,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to serialize report to json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize report to yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn render_simulation_result(
    result: &SimulationResult,
    format: ReportFormat,
) -> Result<String, RenderError> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(result)?),
        ReportFormat::Text => Ok(format_simulation_result(result)),
    }
}

pub fn render_monte_carlo_output(
    output: &MonteCarloOutput,
    format: ReportFormat,
) -> Result<String, RenderError> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(output)?),
        ReportFormat::Text => Ok(format_monte_carlo_output(output)),
    }
}

pub fn format_simulation_result(result: &SimulationResult) -> String {
    let mut lines = Vec::new();
    lines.push("Simulation Report".to_string());
    lines.push(format!("Total duration: {:.2} days", result.total_duration));
    lines.push(format!("Total budget: {:.2}", result.total_budget));
    lines.push(format!("Quality score: {:.2}", result.quality_score));
    lines.push(String::new());
    lines.push("Timeline:".to_string());
    lines.push("Phase | Start | End | Duration | Cost | Quality".to_string());
    lines.push("------|-------|-----|----------|------|--------".to_string());
    for phase in &result.timeline {
        lines.push(format!(
            "{} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2}",
            phase.name,
            phase.start,
            phase.end,
            phase.duration,
            phase.cost,
            phase.quality_contribution
        ));
    }

    lines.join("\n")
}

pub fn format_monte_carlo_output(output: &MonteCarloOutput) -> String {
    let report = &output.report;
    let mut lines = Vec::new();
    lines.push("Monte Carlo Report".to_string());
    lines.push(format!("Complexity: {:.2}", report.complexity));
    lines.push(format!("Base seed: {}", report.base_seed));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(String::new());
    lines.push("Percentiles:".to_string());
    lines.push("Metric | P0 | P50 | P85 | P100".to_string());
    lines.push("-------|----|-----|-----|-----".to_string());
    lines.push(format_percentile_row("Duration", &report.duration));
    lines.push(format_percentile_row("Budget", &report.budget));
    lines.push(format_percentile_row("Quality", &report.quality));

    lines.join("\n")
}

fn format_percentile_row(label: &str, summary: &PercentileSummary) -> String {
    format!(
        "{label} | {:.2} | {:.2} | {:.2} | {:.2}",
        summary.p0, summary.p50, summary.p85, summary.p100
    )
}
