use compute::{ComputeError, Dataset, ForecastTable, load_dataset, load_forecast};
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::config::DataPaths;

/// Read-only access to the loaded tables.
///
/// Each file is read on first use and kept for the life of the process,
/// keyed by its path. Entries are never invalidated; a changed file is only
/// picked up by a restart. A missing forecast file is not cached, so it is
/// picked up once it appears.
#[derive(Clone, Debug)]
pub struct DataStore {
    paths: DataPaths,
    datasets: Cache<PathBuf, Arc<Dataset>>,
    forecasts: Cache<PathBuf, Arc<ForecastTable>>,
}

impl DataStore {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            datasets: Cache::builder().max_capacity(4).build(),
            forecasts: Cache::builder().max_capacity(4).build(),
        }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// The unified dataset. Fails if the file is missing or unreadable.
    #[instrument(skip(self))]
    pub async fn dataset(&self) -> Result<Arc<Dataset>, Arc<ComputeError>> {
        let path = self.paths.dataset.clone();
        self.datasets
            .try_get_with(path.clone(), async move {
                debug!(path = %path.display(), "Dataset not cached, loading");
                load_dataset(&path).map(Arc::new)
            })
            .await
    }

    /// The forecast table, or `None` if the file does not exist.
    #[instrument(skip(self))]
    pub async fn forecast(&self) -> Result<Option<Arc<ForecastTable>>, Arc<ComputeError>> {
        let path = self.paths.forecast.clone();
        let loaded = self
            .forecasts
            .try_get_with(path.clone(), async move {
                debug!(path = %path.display(), "Forecast not cached, loading");
                load_forecast(&path)?
                    .map(Arc::new)
                    .ok_or_else(|| ComputeError::MissingOptionalFile(path.display().to_string()))
            })
            .await;

        match loaded {
            Ok(table) => Ok(Some(table)),
            Err(err) if matches!(*err, ComputeError::MissingOptionalFile(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{FORECAST_CSV, write_data_dir};

    #[tokio::test]
    async fn test_dataset_is_loaded_once() {
        let (dir, settings) = write_data_dir(true);
        let store = DataStore::new(settings.data_paths());

        let first = store.dataset().await.unwrap();
        // The cached table survives the file disappearing.
        std::fs::remove_file(&settings.data_paths().dataset).unwrap();
        let second = store.dataset().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        drop(dir);
    }

    #[tokio::test]
    async fn test_missing_dataset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = crate::config::Settings::for_data_dir(dir.path());
        let store = DataStore::new(settings.data_paths());

        let err = store.dataset().await.unwrap_err();
        assert!(matches!(*err, ComputeError::MissingRequiredFile(_)));
    }

    #[tokio::test]
    async fn test_missing_forecast_is_none_until_it_appears() {
        let (_dir, settings) = write_data_dir(false);
        let store = DataStore::new(settings.data_paths());

        assert!(store.forecast().await.unwrap().is_none());

        std::fs::write(&settings.data_paths().forecast, FORECAST_CSV).unwrap();
        let table = store.forecast().await.unwrap().unwrap();
        assert_eq!(table.years(), vec![2025, 2026, 2027]);
    }
}
