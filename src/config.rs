use anyhow::{Context, Result, bail};
use compute::charts::DEFAULT_PROGRESS_TARGET;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_DATA_DIR: &str = "data/processed";
pub const DEFAULT_DATASET_FILE: &str = "ethiopia_fi_unified_data_enriched.csv";
pub const DEFAULT_FORECAST_FILE: &str = "forecast_2025_2027.csv";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Application settings.
///
/// Sources, lowest priority first: built-in defaults, an optional
/// `dashboard.{toml,yaml,json}` file in the working directory, `DASHBOARD_*`
/// environment variables (a `.env` file is honored), then CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding the processed CSV files
    pub data_dir: PathBuf,
    /// File name of the unified dataset inside `data_dir`
    pub dataset_file: String,
    /// File name of the forecast table inside `data_dir`
    pub forecast_file: String,
    /// Address the web server binds to
    pub bind_address: String,
    /// Account ownership share (%) the progress indicator measures against
    pub progress_target: f64,
}

/// Values given on the command line, applied over every other source.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub data_dir: Option<PathBuf>,
    pub bind_address: Option<String>,
}

impl Settings {
    /// Load configuration from all sources.
    pub fn load(overrides: SettingsOverrides) -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings: Settings = Config::builder()
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("dataset_file", DEFAULT_DATASET_FILE)?
            .set_default("forecast_file", DEFAULT_FORECAST_FILE)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("progress_target", DEFAULT_PROGRESS_TARGET)?
            .add_source(File::with_name("dashboard").required(false))
            .add_source(Environment::with_prefix("DASHBOARD"))
            .set_override_option(
                "data_dir",
                overrides.data_dir.map(|dir| dir.display().to_string()),
            )?
            .set_override_option("bind_address", overrides.bind_address)?
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        settings.validate()?;
        debug!(?settings, "Configuration loaded");
        Ok(settings)
    }

    /// Settings rooted at `data_dir` with every other value at its default.
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            dataset_file: DEFAULT_DATASET_FILE.to_string(),
            forecast_file: DEFAULT_FORECAST_FILE.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            progress_target: DEFAULT_PROGRESS_TARGET,
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.progress_target.is_finite() && self.progress_target > 0.0) {
            bail!("progress_target must be a positive number, got {}", self.progress_target);
        }
        if self.dataset_file.trim().is_empty() || self.forecast_file.trim().is_empty() {
            bail!("dataset_file and forecast_file must not be empty");
        }
        Ok(())
    }

    /// Resolves the data directory against the working directory once, so
    /// every later lookup uses the same absolute location.
    pub fn resolve_data_dir(mut self) -> Result<Self> {
        if self.data_dir.is_relative() {
            let cwd = std::env::current_dir().context("Cannot determine working directory")?;
            self.data_dir = cwd.join(&self.data_dir);
        }
        info!(data_dir = %self.data_dir.display(), "Using data directory");
        Ok(self)
    }

    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            dataset: self.data_dir.join(&self.dataset_file),
            forecast: self.data_dir.join(&self.forecast_file),
        }
    }
}

/// Locations of the two input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub dataset: PathBuf,
    pub forecast: PathBuf,
}

impl DataPaths {
    /// File name offered for the dataset download.
    pub fn dataset_file_name(&self) -> String {
        file_name(&self.dataset)
    }

    /// File name offered for the forecast download.
    pub fn forecast_file_name(&self) -> String {
        file_name(&self.forecast)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
