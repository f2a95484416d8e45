//! The analyze command: load, compute, report, compare, plot

use std::path::Path;

use crate::analytics::{compute_statistics, select_keywords};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::plot;
use crate::report::ReportRenderer;

/// Run the full analysis pipeline over an input CSV.
///
/// # Arguments
/// * `file` - Path to the input CSV (must exist)
/// * `compare` - Optional comma-separated keyword subset to compare and plot
/// * `config` - Report, plot and logging configuration
///
/// Without `compare`, every keyword is reported individually in original
/// column order and no chart is produced.
pub fn run(file: &Path, compare: Option<&str>, config: &Config) -> Result<()> {
    if !file.exists() {
        return Err(Error::MissingFile(file.to_path_buf()));
    }

    let dataset = Dataset::from_csv(file)?;
    tracing::info!(
        rows = dataset.len(),
        keywords = dataset.keywords().len(),
        "dataset loaded"
    );

    let results = compute_statistics(&dataset)?;

    let renderer = ReportRenderer::new(&config.report);
    match renderer.export(&results) {
        Ok(path) => println!("Resultados exportados a {}", path.display()),
        Err(e) => {
            // Non-fatal by policy: comparison and plot still proceed
            tracing::warn!(error = %e, "report export failed, continuing");
            println!("Error al exportar el resumen: {e}");
        }
    }

    match compare {
        Some(list) => {
            let requested = parse_keyword_list(list);
            let selections = select_keywords(&results, &requested);
            renderer.print_comparison(&selections);

            match plot::render_lines(&dataset, &requested, &config.plot)? {
                Some(path) => println!("\nGráfica guardada en {}", path.display()),
                None => tracing::warn!("no requested keyword could be plotted"),
            }
        }
        None => {
            println!("\nAnálisis individual:");
            let selections = select_keywords(&results, &[]);
            renderer.print_comparison(&selections);
        }
    }

    Ok(())
}

/// Split a comma-separated keyword list, trimming whitespace and dropping
/// empty fragments.
#[must_use]
pub fn parse_keyword_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}
