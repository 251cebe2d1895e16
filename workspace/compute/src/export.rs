use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::loader::{Dataset, ForecastTable};

/// Writes `frame` as UTF-8 CSV with a header row.
///
/// Frames produced by the loader hold every column as text, so cells come out
/// exactly as they were read and column order follows the source file.
pub fn frame_to_csv(frame: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut frame = frame.clone();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)?;
    debug!(rows = frame.height(), bytes = buffer.len(), "Serialized frame to CSV");
    Ok(buffer)
}

/// The full, unfiltered dataset as CSV.
pub fn dataset_csv(dataset: &Dataset) -> Result<Vec<u8>> {
    frame_to_csv(dataset.frame())
}

pub fn forecast_csv(table: &ForecastTable) -> Result<Vec<u8>> {
    frame_to_csv(table.frame())
}
