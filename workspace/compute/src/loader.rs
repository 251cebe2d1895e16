//! CSV loading for the unified dataset and the forecast table.
//!
//! Both files are read with every column as text so that the raw frame can be
//! written back out verbatim by the export service. Typed projections are
//! derived from the text columns with lenient parsing.

use chrono::NaiveDate;
use common::{ForecastRecord, Metric, Scenario};
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{ComputeError, Result};
use crate::records::{
    Event, Observation, RecordType, parse_lenient_date, parse_lenient_f64, parse_year,
};

/// Columns the unified dataset cannot be used without.
pub const REQUIRED_DATASET_COLUMNS: [&str; 2] = ["observation_date", "record_type"];

/// The unified dataset: the raw table plus its observation and event streams.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    observations: Vec<Observation>,
    events: Vec<Event>,
}

impl Dataset {
    /// Builds the typed projections of an all-text frame.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        for column in REQUIRED_DATASET_COLUMNS {
            if frame.get_column_index(column).is_none() {
                return Err(ComputeError::Schema(format!(
                    "dataset is missing required column '{}'",
                    column
                )));
            }
        }

        let record_ids = text_column(&frame, "record_id")?;
        let record_types = text_column(&frame, "record_type")?;
        let dates = text_column(&frame, "observation_date")?;
        let indicator_codes = text_column(&frame, "indicator_code")?;
        let values = text_column(&frame, "value_numeric")?;
        let indicators = text_column(&frame, "indicator")?;
        let categories = text_column(&frame, "category")?;
        let source_names = text_column(&frame, "source_name")?;
        let confidences = text_column(&frame, "confidence")?;

        let mut observations = Vec::new();
        let mut events = Vec::new();
        let mut malformed_dates = 0usize;

        for row in 0..frame.height() {
            let Some(record_type) = record_types[row]
                .as_deref()
                .and_then(|raw| raw.parse::<RecordType>().ok())
            else {
                trace!(row, "Skipping row with unrecognized record_type");
                continue;
            };

            let date = dates[row].as_deref().and_then(parse_lenient_date);
            if date.is_none() && dates[row].is_some() {
                malformed_dates += 1;
            }

            match record_type {
                RecordType::Observation => observations.push(Observation {
                    record_id: record_ids[row].clone(),
                    observation_date: date,
                    indicator_code: indicator_codes[row].clone(),
                    value_numeric: values[row].as_deref().and_then(parse_lenient_f64),
                }),
                RecordType::Event => events.push(Event {
                    record_id: record_ids[row].clone(),
                    event_date: date,
                    title: indicators[row].clone(),
                    category: categories[row].clone(),
                    source_name: source_names[row].clone(),
                    confidence: confidences[row].clone(),
                }),
            }
        }

        if malformed_dates > 0 {
            warn!(malformed_dates, "Unparsable observation dates treated as absent");
        }
        debug!(
            rows = frame.height(),
            observations = observations.len(),
            events = events.len(),
            "Split dataset by record type"
        );

        Ok(Self {
            frame,
            observations,
            events,
        })
    }

    /// The table as loaded, every column as text in file order.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Distinct observation indicator codes, sorted.
    pub fn indicator_codes(&self) -> Vec<String> {
        self.observations
            .iter()
            .filter_map(|o| o.indicator_code.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Earliest and latest observation date, ignoring absent dates.
    pub fn observation_date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.observations.iter().filter_map(|o| o.observation_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
    }
}

/// Values of one forecast metric under each scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioValues {
    pub base: Option<f64>,
    pub pessimistic: Option<f64>,
    pub optimistic: Option<f64>,
}

impl ScenarioValues {
    pub fn get(&self, scenario: Scenario) -> Option<f64> {
        match scenario {
            Scenario::Base => self.base,
            Scenario::Pessimistic => self.pessimistic,
            Scenario::Optimistic => self.optimistic,
        }
    }

    fn set(&mut self, scenario: Scenario, value: Option<f64>) {
        match scenario {
            Scenario::Base => self.base = value,
            Scenario::Pessimistic => self.pessimistic = value,
            Scenario::Optimistic => self.optimistic = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub year: i32,
    pub access: ScenarioValues,
    pub usage: ScenarioValues,
}

impl ForecastRow {
    pub fn value(&self, metric: Metric, scenario: Scenario) -> Option<f64> {
        match metric {
            Metric::Access => self.access.get(scenario),
            Metric::Usage => self.usage.get(scenario),
        }
    }

    fn values_mut(&mut self, metric: Metric) -> &mut ScenarioValues {
        match metric {
            Metric::Access => &mut self.access,
            Metric::Usage => &mut self.usage,
        }
    }
}

impl From<&ForecastRow> for ForecastRecord {
    fn from(row: &ForecastRow) -> Self {
        ForecastRecord {
            year: row.year,
            access_base: row.access.base,
            access_pessimistic: row.access.pessimistic,
            access_optimistic: row.access.optimistic,
            usage_base: row.usage.base,
            usage_pessimistic: row.usage.pessimistic,
            usage_optimistic: row.usage.optimistic,
        }
    }
}

/// The multi-scenario forecast table.
///
/// Scenario availability is fixed at load time from the file's columns: a
/// scenario is usable only if both its access and usage columns exist.
#[derive(Debug, Clone)]
pub struct ForecastTable {
    frame: DataFrame,
    rows: Vec<ForecastRow>,
    scenarios: Vec<Scenario>,
    columns: BTreeSet<&'static str>,
}

impl ForecastTable {
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        if frame.get_column_index("year").is_none() {
            return Err(ComputeError::Schema(
                "forecast table is missing required column 'year'".to_string(),
            ));
        }

        let columns: BTreeSet<&'static str> = Metric::ALL
            .iter()
            .flat_map(|metric| Scenario::ALL.iter().map(move |s| metric.column(*s)))
            .filter(|name| frame.get_column_index(name).is_some())
            .collect();

        let scenarios: Vec<Scenario> = Scenario::ALL
            .into_iter()
            .filter(|s| Metric::ALL.iter().all(|m| columns.contains(m.column(*s))))
            .collect();

        let years = text_column(&frame, "year")?;
        let mut value_columns = Vec::with_capacity(columns.len());
        for metric in Metric::ALL {
            for scenario in Scenario::ALL {
                let name = metric.column(scenario);
                if columns.contains(name) {
                    value_columns.push((metric, scenario, text_column(&frame, name)?));
                }
            }
        }

        let mut rows = Vec::with_capacity(frame.height());
        for (index, raw_year) in years.iter().enumerate() {
            let Some(year) = raw_year.as_deref().and_then(parse_year) else {
                warn!(row = index, "Skipping forecast row without a valid year");
                continue;
            };
            let mut row = ForecastRow {
                year,
                access: ScenarioValues::default(),
                usage: ScenarioValues::default(),
            };
            for (metric, scenario, values) in &value_columns {
                row.values_mut(*metric)
                    .set(*scenario, values[index].as_deref().and_then(parse_lenient_f64));
            }
            rows.push(row);
        }

        debug!(
            rows = rows.len(),
            scenarios = ?scenarios,
            "Parsed forecast table"
        );

        Ok(Self {
            frame,
            rows,
            scenarios,
            columns,
        })
    }

    /// The table as loaded, every column as text in file order.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.year).collect()
    }

    /// Scenarios with both an access and a usage column.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn supports(&self, scenario: Scenario) -> bool {
        self.scenarios.contains(&scenario)
    }

    pub fn has_column(&self, metric: Metric, scenario: Scenario) -> bool {
        self.columns.contains(metric.column(scenario))
    }

    /// Base access value for `year`, if that row exists and has a value.
    pub fn base_access(&self, year: i32) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.year == year)
            .and_then(|row| row.access.base)
    }
}

/// Loads the unified dataset. A missing file is fatal for the caller.
#[instrument]
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ComputeError::MissingRequiredFile(path.display().to_string()));
    }
    let frame = read_text_frame(path)?;
    info!(rows = frame.height(), columns = frame.width(), "Loaded dataset");
    Dataset::from_frame(frame)
}

/// Loads the forecast table, returning `Ok(None)` when the file is absent.
#[instrument]
pub fn load_forecast(path: &Path) -> Result<Option<ForecastTable>> {
    if !path.exists() {
        warn!(path = %path.display(), "Forecast file not found, forecasts disabled");
        return Ok(None);
    }
    let frame = read_text_frame(path)?;
    info!(rows = frame.height(), columns = frame.width(), "Loaded forecast table");
    ForecastTable::from_frame(frame).map(Some)
}

/// Reads a CSV file with a header row, every column typed as text.
fn read_text_frame(path: &Path) -> Result<DataFrame> {
    trace!(path = %path.display(), "Reading CSV");
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(frame)
}

/// Trimmed, non-empty cell values of a text column. A column that does not
/// exist reads as all-absent.
fn text_column(frame: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    if frame.get_column_index(name).is_none() {
        return Ok(vec![None; frame.height()]);
    }
    let values = frame
        .column(name)?
        .str()?
        .into_iter()
        .map(|cell| {
            cell.map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
        })
        .collect();
    Ok(values)
}
