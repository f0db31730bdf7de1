use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::domain::phase::{PhaseDefinition, default_phases};
use crate::services::simulation_types::{PhaseResult, SimulationResult};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("phase list must not be empty")]
    EmptyPhases,
    #[error("phase name must not be empty")]
    EmptyPhaseName,
    #[error("duplicate phase name: {0}")]
    DuplicatePhaseName(String),
    #[error("phase {0}: base_duration must be a positive finite number")]
    NonPositiveDuration(String),
    #[error("phase {0}: base_cost must be a positive finite number")]
    NonPositiveCost(String),
    #[error("phase {0}: base_quality_weight must be within [0, 1]")]
    QualityWeightOutOfRange(String),
    #[error("phase {0}: variability must be within [0, 1]")]
    VariabilityOutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("complexity must be positive, got {0}")]
    NonPositiveComplexity(f64),
    #[error("complexity must be a finite number")]
    NonFiniteComplexity,
}

/// Turns a complexity factor and a seed into a deterministic project report.
///
/// The phase sequence is validated once at construction and never mutated;
/// each `simulate` call seeds its own generator, so simultaneous calls from
/// independent call sites cannot interfere.
#[derive(Debug, Clone)]
pub struct ProjectSimulator {
    phases: Vec<PhaseDefinition>,
}

impl ProjectSimulator {
    pub fn new(phases: Vec<PhaseDefinition>) -> Result<Self, ConfigurationError> {
        validate_phases(&phases)?;
        Ok(Self { phases })
    }

    /// Simulator over the five standard lifecycle phases.
    pub fn with_default_phases() -> Self {
        Self {
            phases: default_phases(),
        }
    }

    pub fn phases(&self) -> &[PhaseDefinition] {
        &self.phases
    }

    /// Runs the simulation for the provided complexity level.
    ///
    /// The draw order is the compatibility contract for reproducibility: per
    /// phase in sequence order, one duration factor then one cost factor,
    /// each uniform in [1 - variability, 1 + variability]. Both factors are
    /// drawn even when variability is zero, so the stream position never
    /// depends on phase parameters.
    pub fn simulate(&self, complexity: f64, seed: u64) -> Result<SimulationResult, ValidationError> {
        if !complexity.is_finite() {
            return Err(ValidationError::NonFiniteComplexity);
        }
        if complexity <= 0.0 {
            return Err(ValidationError::NonPositiveComplexity(complexity));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut timeline = Vec::with_capacity(self.phases.len());
        let mut elapsed = 0.0_f64;
        let mut total_budget = 0.0_f64;
        let mut quality_sum = 0.0_f64;

        for phase in &self.phases {
            let duration_factor =
                rng.gen_range(1.0 - phase.variability..=1.0 + phase.variability);
            let cost_factor = rng.gen_range(1.0 - phase.variability..=1.0 + phase.variability);

            let duration = phase.base_duration * complexity * duration_factor;
            let cost = phase.base_cost * complexity * cost_factor;
            let slippage = (duration_factor - 1.0).abs() + (cost_factor - 1.0).abs();
            let quality_contribution = (phase.base_quality_weight * (1.0 - slippage))
                .clamp(0.0, phase.base_quality_weight);

            let start = elapsed;
            let end = start + duration;
            timeline.push(PhaseResult {
                name: phase.name.clone(),
                duration,
                cost,
                quality_contribution,
                start,
                end,
            });

            elapsed = end;
            total_budget += cost;
            quality_sum += quality_contribution;
        }

        let weight_total: f64 = self.phases.iter().map(|p| p.base_quality_weight).sum();
        let quality_score = if weight_total > 0.0 {
            (quality_sum / weight_total).clamp(0.0, 1.0)
        } else {
            1.0
        };

        Ok(SimulationResult {
            total_duration: elapsed,
            total_budget,
            quality_score,
            timeline,
        })
    }
}

impl Default for ProjectSimulator {
    fn default() -> Self {
        Self::with_default_phases()
    }
}

fn validate_phases(phases: &[PhaseDefinition]) -> Result<(), ConfigurationError> {
    if phases.is_empty() {
        return Err(ConfigurationError::EmptyPhases);
    }

    let mut seen = std::collections::HashSet::new();
    for phase in phases {
        if phase.name.trim().is_empty() {
            return Err(ConfigurationError::EmptyPhaseName);
        }
        if !seen.insert(phase.name.clone()) {
            return Err(ConfigurationError::DuplicatePhaseName(phase.name.clone()));
        }
        if !(phase.base_duration.is_finite() && phase.base_duration > 0.0) {
            return Err(ConfigurationError::NonPositiveDuration(phase.name.clone()));
        }
        if !(phase.base_cost.is_finite() && phase.base_cost > 0.0) {
            return Err(ConfigurationError::NonPositiveCost(phase.name.clone()));
        }
        if !(0.0..=1.0).contains(&phase.base_quality_weight) {
            return Err(ConfigurationError::QualityWeightOutOfRange(
                phase.name.clone(),
            ));
        }
        if !(0.0..=1.0).contains(&phase.variability) {
            return Err(ConfigurationError::VariabilityOutOfRange(phase.name.clone()));
        }
    }
    Ok(())
}
