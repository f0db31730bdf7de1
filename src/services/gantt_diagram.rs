use chrono::NaiveDate;

use crate::services::simulation_types::SimulationResult;

/// Renders the simulated timeline as a Mermaid gantt diagram, mapping phase
/// offsets onto calendar days from `start_date`. Fractional offsets are
/// rounded up to whole days.
pub fn generate_gantt_diagram(result: &SimulationResult, start_date: NaiveDate) -> String {
    let mut lines = Vec::new();
    lines.push("".to_string());
    lines.push("# Project Timeline".to_string());
    lines.push("```mermaid".to_string());
    lines.push("gantt".to_string());
    lines.push("    dateFormat  DD-MM-YYYY".to_string());

    for phase in &result.timeline {
        let phase_start = add_days(start_date, phase.start);
        let phase_end = add_days(start_date, phase.end);
        lines.push(format!(
            "    {name} :{name}, {start}, {end}",
            name = phase.name,
            start = phase_start.format("%d-%m-%Y"),
            end = phase_end.format("%d-%m-%Y")
        ));
    }
    lines.push("```".to_string());

    lines.join("\n")
}

fn add_days(start_date: NaiveDate, days: f64) -> NaiveDate {
    let days = days.ceil().max(0.0) as i64;
    start_date + chrono::Duration::days(days)
}
