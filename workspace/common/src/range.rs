use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Inclusive date interval `[start, end]`.
///
/// Construct through [`DateRange::new`] or [`DateRange::from_bounds`]; both
/// reject an interval whose start falls after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    /// First day included (YYYY-MM-DD)
    pub start: NaiveDate,
    /// Last day included (YYYY-MM-DD)
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("start date {start} is after end date {end}")]
pub struct InvalidDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start > end {
            tracing::debug!(%start, %end, "Rejecting inverted date range");
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from optional user input.
    ///
    /// Both bounds are needed for a range; a single bound is incomplete input
    /// and yields `Ok(None)`, which callers treat as "no date filter".
    pub fn from_bounds(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Option<Self>, InvalidDateRange> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end).map(Some),
            _ => Ok(None),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
