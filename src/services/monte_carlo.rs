use thiserror::Error;

use crate::services::simulation::{ProjectSimulator, ValidationError};
use crate::services::simulation_types::{MonteCarloOutput, MonteCarloReport, PercentileSummary};

#[derive(Error, Debug)]
pub enum MonteCarloError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Runs the simulator over `iterations` derived seeds (base seed plus the
/// iteration index) and summarizes total duration, total budget, and quality
/// score as p0/p50/p85/p100 percentiles.
pub fn run_monte_carlo(
    simulator: &ProjectSimulator,
    complexity: f64,
    base_seed: u64,
    iterations: usize,
) -> Result<MonteCarloOutput, MonteCarloError> {
    if iterations == 0 {
        return Err(MonteCarloError::InvalidIterations);
    }

    let mut durations = Vec::with_capacity(iterations);
    let mut budgets = Vec::with_capacity(iterations);
    let mut qualities = Vec::with_capacity(iterations);

    for index in 0..iterations {
        let result = simulator.simulate(complexity, base_seed.wrapping_add(index as u64))?;
        durations.push(result.total_duration);
        budgets.push(result.total_budget);
        qualities.push(result.quality_score);
    }

    sort_ascending(&mut durations);
    sort_ascending(&mut budgets);
    sort_ascending(&mut qualities);

    let report = MonteCarloReport {
        complexity,
        base_seed,
        iterations,
        duration: summarize_sorted(&durations),
        budget: summarize_sorted(&budgets),
        quality: summarize_sorted(&qualities),
    };

    Ok(MonteCarloOutput {
        report,
        results: durations,
    })
}

fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

fn summarize_sorted(values: &[f64]) -> PercentileSummary {
    PercentileSummary {
        p0: percentile_sorted(values, 0.0),
        p50: percentile_sorted(values, 50.0),
        p85: percentile_sorted(values, 85.0),
        p100: percentile_sorted(values, 100.0),
    }
}

/// Percentile of an ascending-sorted slice, interpolating linearly between
/// the two nearest ranks. Empty input yields 0.0.
fn percentile_sorted(sorted_values: &[f64], percentile: f64) -> f64 {
    match sorted_values {
        [] => 0.0,
        [only] => *only,
        values => {
            let position = percentile.clamp(0.0, 100.0) / 100.0 * (values.len() - 1) as f64;
            let lower = position.floor() as usize;
            let upper = position.ceil() as usize;
            let weight = position - lower as f64;
            values[lower] * (1.0 - weight) + values[upper] * weight
        }
    }
}
