//! Line-chart rendering for keyword series
//!
//! Draws one line per requested keyword against the date axis and writes
//! the chart as an SVG file. Unrecognized keywords are skipped with a
//! warning; if nothing remains to draw, no file is produced.

use std::path::PathBuf;

use plotters::prelude::*;
use thiserror::Error;

use crate::config::PlotConfig;
use crate::dataset::Dataset;

/// Errors that can occur while rendering a chart
#[derive(Debug, Error)]
pub enum PlotError {
    /// Backend or chart construction failure
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Result type for plot operations
pub type PlotResult<T> = Result<T, PlotError>;

/// Render the requested keyword series as an SVG line chart.
///
/// # Arguments
/// * `dataset` - Source of dates and series values
/// * `requested` - Keyword subset to draw; unknown names are skipped
/// * `config` - Output path, dimensions and axis labels
///
/// # Returns
/// `Some(path)` of the written SVG, or `None` when no requested keyword
/// exists in the dataset (or the dataset has no rows).
pub fn render_lines(
    dataset: &Dataset,
    requested: &[String],
    config: &PlotConfig,
) -> PlotResult<Option<PathBuf>> {
    let mut series: Vec<(&str, &[f64])> = Vec::new();

    for keyword in requested {
        match dataset.series(keyword) {
            Some(values) => series.push((keyword.as_str(), values)),
            None => {
                tracing::warn!(keyword = %keyword, "keyword not in dataset, skipping in plot");
                println!("'{keyword}' no está en el archivo CSV y no se graficará.");
            }
        }
    }

    if series.is_empty() || dataset.is_empty() {
        return Ok(None);
    }

    let path = config.output_path.clone();
    draw_chart(dataset, &series, config).map_err(PlotError::Render)?;

    tracing::debug!(path = %path.display(), series = series.len(), "chart written");
    Ok(Some(path))
}

fn draw_chart(
    dataset: &Dataset,
    series: &[(&str, &[f64])],
    config: &PlotConfig,
) -> Result<(), String> {
    let dates = dataset.dates();
    let n = dates.len();

    let y_min = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let y_max = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);

    // Flat series still need a visible y span
    let (y_min, y_max) = if (y_max - y_min).abs() < f64::EPSILON {
        (y_min - 1.0, y_max + 1.0)
    } else {
        (y_min, y_max)
    };

    let root = SVGBackend::new(&config.output_path, (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    // Single-row datasets still need a non-degenerate x span
    let x_max = if n > 1 { (n - 1) as f64 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(config.title.as_str(), ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            dates.get(idx).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(|e| e.to_string())?;

    for (i, (keyword, values)) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();

        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(x, &y)| (x as f64, y)),
                color.clone(),
            ))
            .map_err(|e| e.to_string())?
            .label(keyword.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.clone()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}
