use std::collections::BTreeMap;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Writes a PNG histogram of total-duration samples. Empty input writes
/// nothing. Bin count follows the square-root rule the sample sizes here
/// warrant.
pub fn write_histogram_png(output_path: &str, results: &[f64]) -> Result<(), HistogramError> {
    if results.is_empty() {
        return Ok(());
    }

    let min_value = results.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = results.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;

    // Degenerate spread (e.g. zero-variability phases) collapses to one bin.
    let bin_width = if range < f64::EPSILON {
        1.0
    } else {
        range / (results.len() as f64).sqrt()
    };

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for value in results {
        let bucket = ((value - min_value) / bin_width).floor() as i64;
        *counts.entry(bucket).or_insert(0) += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(1);
    let last_bucket = counts.keys().next_back().copied().unwrap_or(0);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Simulated Total Durations", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..(last_bucket + 1), 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Total duration in person-days")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|bucket| format!("{:.2}", min_value + *bucket as f64 * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(
            counts
                .iter()
                .map(|(bucket, count)| Rectangle::new([(*bucket, 0), (*bucket + 1, *count)], bar_style)),
        )
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
