/// A stage of the software project lifecycle.
///
/// `base_duration` and `base_cost` describe the phase for a project with
/// complexity 1.0. `variability` is the fraction of the base values that may
/// deviate under random perturbation, and `base_quality_weight` is the phase's
/// share of the overall quality score.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseDefinition {
    pub name: String,
    pub base_duration: f64,
    pub base_cost: f64,
    pub base_quality_weight: f64,
    pub variability: f64,
}

impl PhaseDefinition {
    pub fn new(
        name: &str,
        base_duration: f64,
        base_cost: f64,
        base_quality_weight: f64,
        variability: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            base_duration,
            base_cost,
            base_quality_weight,
            variability,
        }
    }
}

/// The five standard lifecycle phases used when the caller supplies none.
/// Costs assume a nominal 800 per person-day.
pub fn default_phases() -> Vec<PhaseDefinition> {
    vec![
        PhaseDefinition::new("requirements", 10.0, 8000.0, 0.15, 0.10),
        PhaseDefinition::new("design", 12.0, 9600.0, 0.20, 0.15),
        PhaseDefinition::new("implementation", 30.0, 24000.0, 0.35, 0.20),
        PhaseDefinition::new("verification", 14.0, 11200.0, 0.20, 0.10),
        PhaseDefinition::new("deployment", 5.0, 4000.0, 0.10, 0.05),
    ]
}
