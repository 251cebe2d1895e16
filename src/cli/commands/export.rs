use anyhow::{Context, Result};
use compute::export::{dataset_csv, forecast_csv};
use compute::{load_dataset, load_forecast};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Settings;

/// Writes the download files into `out`. Returns the paths written.
///
/// The forecast file is skipped with a warning when it does not exist.
pub fn export(settings: Settings, out: &Path) -> Result<Vec<PathBuf>> {
    let settings = settings.resolve_data_dir()?;
    let paths = settings.data_paths();
    fs::create_dir_all(out)
        .with_context(|| format!("Cannot create output directory {}", out.display()))?;

    let mut written = Vec::new();

    let dataset = load_dataset(&paths.dataset)?;
    let target = out.join(paths.dataset_file_name());
    fs::write(&target, dataset_csv(&dataset)?)
        .with_context(|| format!("Cannot write {}", target.display()))?;
    info!(path = %target.display(), "Dataset exported");
    written.push(target);

    match load_forecast(&paths.forecast)? {
        Some(table) => {
            let target = out.join(paths.forecast_file_name());
            fs::write(&target, forecast_csv(&table)?)
                .with_context(|| format!("Cannot write {}", target.display()))?;
            info!(path = %target.display(), "Forecast exported");
            written.push(target);
        }
        None => warn!(path = %paths.forecast.display(), "Forecast table not found; skipped"),
    }

    Ok(written)
}
