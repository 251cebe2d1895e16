use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Named forecast variant selecting which projected trajectory is displayed.
///
/// The dashboard opens on the pessimistic trajectory.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Base,
    #[default]
    Pessimistic,
    Optimistic,
}

impl Scenario {
    /// All scenarios in the order they are offered to the user.
    pub const ALL: [Scenario; 3] = [Scenario::Base, Scenario::Pessimistic, Scenario::Optimistic];

    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Base => "base",
            Scenario::Pessimistic => "pessimistic",
            Scenario::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scenario '{0}', expected one of base, pessimistic, optimistic")]
pub struct UnknownScenario(pub String);

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Scenario::Base),
            "pessimistic" => Ok(Scenario::Pessimistic),
            "optimistic" => Ok(Scenario::Optimistic),
            other => Err(UnknownScenario(other.to_string())),
        }
    }
}

/// Forecast target metric. Each metric has one forecast column per scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Access,
    Usage,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Access, Metric::Usage];

    /// Name of the forecast table column holding this metric under `scenario`.
    pub fn column(self, scenario: Scenario) -> &'static str {
        match (self, scenario) {
            (Metric::Access, Scenario::Base) => "access_base",
            (Metric::Access, Scenario::Pessimistic) => "access_pessimistic",
            (Metric::Access, Scenario::Optimistic) => "access_optimistic",
            (Metric::Usage, Scenario::Base) => "usage_base",
            (Metric::Usage, Scenario::Pessimistic) => "usage_pessimistic",
            (Metric::Usage, Scenario::Optimistic) => "usage_optimistic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_parsing_is_case_insensitive() {
        assert_eq!("Base".parse::<Scenario>().unwrap(), Scenario::Base);
        assert_eq!(" optimistic ".parse::<Scenario>().unwrap(), Scenario::Optimistic);
        assert!("neutral".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_scenario_serializes_lowercase() {
        let json = serde_json::to_string(&Scenario::Pessimistic).unwrap();
        assert_eq!(json, "\"pessimistic\"");
    }

    #[test]
    fn test_every_metric_scenario_pair_has_distinct_column() {
        let mut columns: Vec<&str> = Metric::ALL
            .iter()
            .flat_map(|metric| Scenario::ALL.iter().map(move |s| metric.column(*s)))
            .collect();
        columns.sort();
        columns.dedup();
        assert_eq!(columns.len(), 6);
    }
}
