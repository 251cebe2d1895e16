pub mod charts;
pub mod error;
pub mod export;
pub mod filter;
pub mod kpi;
pub mod loader;
pub mod records;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ComputeError, Result};
pub use loader::{Dataset, ForecastTable, load_dataset, load_forecast};

/// Indicators preselected on the Trends tab, kept only if present in the data.
pub const DEFAULT_TREND_INDICATORS: [&str; 4] = [
    "ACC_OWNERSHIP",
    "USG_ACTIVE_RATE",
    "USG_CROSSOVER",
    "USG_TELEBIRR_USERS",
];

/// Default Trends selection for `dataset`, in `DEFAULT_TREND_INDICATORS` order.
pub fn default_trend_indicators(dataset: &Dataset) -> Vec<String> {
    let available = dataset.indicator_codes();
    DEFAULT_TREND_INDICATORS
        .iter()
        .filter(|code| available.iter().any(|a| a == *code))
        .map(|code| code.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use testing::{UNIFIED_CSV, write_fixture};

    #[test]
    fn test_default_indicators_limited_to_dataset() {
        let csv = "record_id,record_type,indicator_code,value_numeric,observation_date\n\
                   a,observation,USG_CROSSOVER,1.0,2020-01-01\n\
                   b,observation,ACC_OWNERSHIP,46.0,2021-12-31\n";
        let (_dir, path) = write_fixture("unified.csv", csv);
        let dataset = load_dataset(&path).unwrap();

        assert_eq!(
            default_trend_indicators(&dataset),
            vec!["ACC_OWNERSHIP", "USG_CROSSOVER"]
        );
    }

    #[test]
    fn test_default_indicators_for_full_fixture() {
        let (_dir, path) = write_fixture("unified.csv", UNIFIED_CSV);
        let dataset = load_dataset(&path).unwrap();

        assert_eq!(default_trend_indicators(&dataset), DEFAULT_TREND_INDICATORS.to_vec());
    }
}
