use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use tripcheck_validator::TripValidator;

use crate::{fetch, output};

pub async fn execute(
    source: Option<&str>,
    sample_size: usize,
    strict: bool,
    format: &str,
) -> Result<()> {
    let source = source.unwrap_or(fetch::DEFAULT_TRIPS_URL);
    info!("Checking dataset: {}", source);
    info!("Sample size: {}", sample_size);
    info!("Strict mode: {}", strict);

    // Retrieve the dataset
    let dataset = if source.starts_with("http://") || source.starts_with("https://") {
        fetch::fetch_csv(source)
            .await
            .with_context(|| format!("failed to fetch dataset from {}", source))?
    } else {
        fetch::read_csv_path(Path::new(source))
            .with_context(|| format!("failed to read dataset from {}", source))?
    };

    output::print_info(&format!(
        "dataset loaded: {} rows, {} columns",
        dataset.len(),
        dataset.columns().len()
    ));

    // Keep only the leading row sample before validation
    let dataset = dataset.sample(sample_size);

    let validator = TripValidator::new();
    let report = if strict {
        validator.validate_strict(&dataset)
    } else {
        validator
            .validate(&dataset)
            .context("quality checks could not run")?
    };

    output::print_gate_result(&report);
    output::print_validation_report(&report, format);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
