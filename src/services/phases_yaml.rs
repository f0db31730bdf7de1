use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::phase::PhaseDefinition;

#[derive(Error, Debug)]
pub enum PhaseYamlError {
    #[error("failed to read phase yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse phase yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Serialize, Deserialize)]
struct PhaseRecord {
    name: String,
    base_duration: f64,
    base_cost: f64,
    base_quality_weight: f64,
    variability: f64,
}

pub fn load_phases_from_yaml_file(path: &str) -> Result<Vec<PhaseDefinition>, PhaseYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_phases_from_yaml_str(&contents)
}

/// Value validation (positive bases, in-range weight and variability) is the
/// simulator's job at construction; this layer only maps records.
pub fn deserialize_phases_from_yaml_str(
    input: &str,
) -> Result<Vec<PhaseDefinition>, PhaseYamlError> {
    let records: Vec<PhaseRecord> = serde_yaml::from_str(input)?;
    Ok(records
        .into_iter()
        .map(|record| PhaseDefinition {
            name: record.name,
            base_duration: record.base_duration,
            base_cost: record.base_cost,
            base_quality_weight: record.base_quality_weight,
            variability: record.variability,
        })
        .collect())
}

pub fn serialize_phases_to_yaml<W: Write>(
    writer: &mut W,
    phases: &[PhaseDefinition],
) -> io::Result<()> {
    let records: Vec<PhaseRecord> = phases
        .iter()
        .map(|phase| PhaseRecord {
            name: phase.name.clone(),
            base_duration: phase.base_duration,
            base_cost: phase.base_cost,
            base_quality_weight: phase.base_quality_weight,
            variability: phase.variability,
        })
        .collect();

    let yaml =
        serde_yaml::to_string(&records).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::phase::default_phases;

    #[test]
    fn deserialize_phases_from_yaml_str_maps_all_fields() {
        let yaml = "\
- name: discovery
  base_duration: 4.5
  base_cost: 3600
  base_quality_weight: 0.4
  variability: 0.25
- name: delivery
  base_duration: 9
  base_cost: 7200
  base_quality_weight: 0.6
  variability: 0.1
";
        let phases = deserialize_phases_from_yaml_str(yaml).unwrap();

        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].name, "discovery");
        assert_eq!(phases[0].base_duration, 4.5);
        assert_eq!(phases[0].base_cost, 3600.0);
        assert_eq!(phases[0].base_quality_weight, 0.4);
        assert_eq!(phases[0].variability, 0.25);
        assert_eq!(phases[1].name, "delivery");
    }

    #[test]
    fn deserialize_phases_rejects_missing_fields() {
        let yaml = "- name: incomplete\n  base_duration: 4\n";
        let error = deserialize_phases_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(error, PhaseYamlError::Parse(_)));
    }

    #[test]
    fn serialize_phases_to_yaml_round_trips_the_defaults() {
        let mut buffer = Vec::new();
        serialize_phases_to_yaml(&mut buffer, &default_phases()).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.contains("name: requirements"));
        assert!(yaml.contains("name: deployment"));

        let phases = deserialize_phases_from_yaml_str(&yaml).unwrap();
        assert_eq!(phases, default_phases());
    }
}
