use common::DateRange;
use tracing::trace;

use crate::loader::Dataset;
use crate::records::{Dated, Event, Observation, RecordType};

/// Rows of `rows` whose date falls inside `range`, in source order.
///
/// Without a range every row is kept, including undated ones. With a range,
/// undated rows never match.
pub fn within_range<T: Dated + Clone>(rows: &[T], range: Option<&DateRange>) -> Vec<T> {
    match range {
        None => rows.to_vec(),
        Some(range) => rows
            .iter()
            .filter(|row| row.date().is_some_and(|date| range.contains(date)))
            .cloned()
            .collect(),
    }
}

/// The dataset is split by `record_type` once at load time; these select one
/// stream and apply the date filter.
impl Dataset {
    pub fn observations_in(&self, range: Option<&DateRange>) -> Vec<Observation> {
        within_range(self.observations(), range)
    }

    pub fn events_in(&self, range: Option<&DateRange>) -> Vec<Event> {
        within_range(self.events(), range)
    }

    /// Number of rows of `record_type` inside `range`.
    pub fn count(&self, record_type: RecordType, range: Option<&DateRange>) -> usize {
        let count = match record_type {
            RecordType::Observation => self.observations_in(range).len(),
            RecordType::Event => self.events_in(range).len(),
        };
        trace!(record_type = record_type.as_str(), ?range, count, "Counted filtered rows");
        count
    }
}
