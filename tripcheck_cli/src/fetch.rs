//! Dataset retrieval: HTTP fetch and CSV parsing into a [`DataSet`].
//!
//! Retrieval is deliberately thin. Failures are not retried; they propagate
//! and abort the run, since the gate is a one-shot check. Cell types are
//! inferred per cell: empty cells become null, then integer, float and
//! boolean parses are attempted before falling back to string.

use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use tripcheck_core::{DataRow, DataSet, DataValue};

/// The Seattle Open Data trips export the gate was built for.
pub const DEFAULT_TRIPS_URL: &str =
    "https://data.seattle.gov/api/views/tw7j-DFaw/rows.csv?accessType=DOWNLOAD";

/// Errors that can occur while retrieving or parsing the dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file could not be read
    #[error("failed to read CSV source: {0}")]
    Io(#[from] std::io::Error),

    /// CSV document could not be parsed
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Fetches a CSV document over HTTP(S) and parses it into a dataset.
pub async fn fetch_csv(url: &str) -> Result<DataSet, FetchError> {
    info!("fetching dataset from {}", url);
    let body = reqwest::get(url).await?.error_for_status()?.text().await?;
    parse_csv(body.as_bytes())
}

/// Reads and parses a local CSV file into a dataset.
pub fn read_csv_path(path: &Path) -> Result<DataSet, FetchError> {
    info!("reading dataset from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_csv(file)
}

/// Parses CSV content with a header row into a dataset.
///
/// Short records leave their trailing columns absent from the row, which
/// the checks treat as nulls.
pub fn parse_csv<R: Read>(reader: R) -> Result<DataSet, FetchError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row: DataRow = HashMap::with_capacity(headers.len());
        for (name, cell) in headers.iter().zip(record.iter()) {
            row.insert(name.clone(), infer_value(cell));
        }
        rows.push(row);
    }

    Ok(DataSet::from_rows(headers, rows))
}

/// Infers the scalar type of a single CSV cell.
fn infer_value(cell: &str) -> DataValue {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return DataValue::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return DataValue::Int(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return DataValue::Float(f);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" => DataValue::Bool(true),
        "false" => DataValue::Bool(false),
        _ => DataValue::String(trimmed.to_string()),
    }
}
