use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn simulate_prints_json_report_to_stdout() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
    cmd.args(["simulate", "1.0", "-s", "42"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_duration\""))
        .stdout(predicate::str::contains("\"total_budget\""))
        .stdout(predicate::str::contains("\"quality_score\""))
        .stdout(predicate::str::contains("requirements"))
        .stdout(predicate::str::contains("deployment"));
}

#[test]
fn simulate_is_reproducible_across_runs() {
    let run = || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
        cmd.args(["simulate", "1.3", "-s", "7"]);
        cmd.output().unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn simulate_accepts_an_arithmetic_complexity_expression() {
    let run = |complexity: &str| {
        let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
        cmd.args(["simulate", complexity, "-s", "42"]);
        cmd.output().unwrap()
    };

    let literal = run("1.5");
    let expression = run("2 * 0.75");
    assert!(literal.status.success());
    assert_eq!(literal.stdout, expression.stdout);
}

#[test]
fn simulate_writes_output_and_gantt_diagram() {
    let output_file = assert_fs::NamedTempFile::new("simulation.yaml").unwrap();
    let gantt_file = assert_fs::NamedTempFile::new("timeline.gantt.md").unwrap();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    let gantt_arg = gantt_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
    cmd.args([
        "simulate",
        "1.2",
        "-s",
        "42",
        "-f",
        "yaml",
        "-o",
        &output_arg,
        "-d",
        "2026-02-01",
        "-g",
        &gantt_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Simulation result written to"))
        .stdout(predicate::str::contains("Gantt diagram written to"));

    let report = fs::read_to_string(output_file.path()).unwrap();
    assert!(report.contains("total_duration:"));
    assert!(report.contains("timeline:"));

    let diagram = fs::read_to_string(gantt_file.path()).unwrap();
    assert!(diagram.contains("```mermaid"));
    assert!(diagram.contains("gantt"));
    assert!(diagram.contains("requirements"));
}

#[test]
fn simulate_uses_custom_phase_definitions() {
    let phases_yaml = "\
- name: prototype
  base_duration: 5
  base_cost: 4000
  base_quality_weight: 0.5
  variability: 0.1
- name: hardening
  base_duration: 3
  base_cost: 2400
  base_quality_weight: 0.5
  variability: 0.0
";
    let phases_file = assert_fs::NamedTempFile::new("phases.yaml").unwrap();
    phases_file.write_str(phases_yaml).unwrap();
    let phases_arg = phases_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
    cmd.args(["simulate", "1.0", "-p", &phases_arg, "-f", "text"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("prototype"))
        .stdout(predicate::str::contains("hardening"))
        .stdout(predicate::str::contains("Simulation Report"));
}

#[test]
fn simulate_rejects_non_positive_complexity() {
    for complexity in ["0", "-2"] {
        let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
        cmd.args(["simulate", "--", complexity]);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("complexity must be positive"));
    }
}

#[test]
fn simulate_rejects_invalid_complexity_expression() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
    cmd.args(["simulate", "1 / 0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid complexity expression"));
}

#[test]
fn simulate_rejects_malformed_phase_file_with_config_status() {
    let phases_file = assert_fs::NamedTempFile::new("phases.yaml").unwrap();
    phases_file.write_str("not_a_phase_list: true\n").unwrap();
    let phases_arg = phases_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
    cmd.args(["simulate", "1.0", "-p", &phases_arg]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to load phase definitions"));
}

#[test]
fn simulate_rejects_invalid_phase_values_with_config_status() {
    let phases_yaml = "\
- name: broken
  base_duration: 0
  base_cost: 100
  base_quality_weight: 0.5
  variability: 0.1
";
    let phases_file = assert_fs::NamedTempFile::new("phases.yaml").unwrap();
    phases_file.write_str(phases_yaml).unwrap();
    let phases_arg = phases_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projsim");
    cmd.args(["simulate", "1.0", "-p", &phases_arg]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("base_duration"));
}
