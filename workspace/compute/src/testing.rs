//! Shared fixtures for the compute tests.

use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::records::{Event, Observation};

/// A small unified dataset: seven observations (one with an unparsable date,
/// one without a value), three events (one undated) and a target row that
/// belongs to neither stream.
pub const UNIFIED_CSV: &str = "\
record_id,record_type,category,indicator,indicator_code,value_numeric,observation_date,source_name,confidence,notes
REC_0001,observation,access,Account Ownership Rate,ACC_OWNERSHIP,22.0,2014-12-31,Global Findex,high,
REC_0002,observation,access,Account Ownership Rate,ACC_OWNERSHIP,35.0,2017-12-31,Global Findex,high,
REC_0003,observation,access,Account Ownership Rate,ACC_OWNERSHIP,46.0,2021-12-31,Global Findex,high,\"Findex 2021, national\"
REC_0004,observation,access,Mobile Money Account Rate,ACC_MM_ACCOUNT,4.7,2021-12-31,Global Findex,high,
REC_0005,observation,usage,Telebirr Users,USG_TELEBIRR_USERS,54.8,2024-06-30,Ethio Telecom,medium,
REC_0006,observation,usage,Active Rate,USG_ACTIVE_RATE,,2024-06-30,Operator report,low,value pending
REC_0007,observation,usage,P2P/ATM Crossover,USG_CROSSOVER,1.08,not-a-date,NBE,medium,
EVT_0001,event,product_launch,Telebirr Launch,,,2021-05-17,Ethio Telecom,high,
EVT_0002,event,market_entry,Safaricom Ethiopia Commercial Launch,,,2022-08-01,Safaricom,high,
EVT_0003,event,policy,NFIS-II Strategy Launch,,,,NBE,medium,undated
TGT_0001,target,access,NFIS Target,ACC_OWNERSHIP,70.0,2025-12-31,NFIS-II,high,
";

pub const FORECAST_CSV: &str = "\
year,access_base,access_pessimistic,access_optimistic,usage_base,usage_pessimistic,usage_optimistic
2025,49.5,47.0,52.0,12.0,10.5,14.0
2026,52.0,48.5,56.0,14.5,12.0,17.5
2027,55.0,50.0,60.5,17.0,13.5,21.0
";

/// Writes `contents` to `name` inside a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    (dir, path)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn observation(id: &str, code: &str, value: Option<f64>, date: Option<NaiveDate>) -> Observation {
    Observation {
        record_id: Some(id.to_string()),
        observation_date: date,
        indicator_code: Some(code.to_string()),
        value_numeric: value,
    }
}

pub fn event(id: &str, title: &str, category: &str, date: Option<NaiveDate>) -> Event {
    Event {
        record_id: Some(id.to_string()),
        event_date: date,
        title: Some(title.to_string()),
        category: Some(category.to_string()),
        source_name: Some("NBE".to_string()),
        confidence: Some("high".to_string()),
    }
}
