use chrono::NaiveDate;
use common::Scenario;
use compute::{Dataset, default_trend_indicators};
use std::fmt;
use std::str::FromStr;

/// Splits a comma-separated indicator list, dropping blanks and repeats.
pub fn parse_indicator_list(raw: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|code| !code.is_empty()) {
        if !codes.iter().any(|known| known == code) {
            codes.push(code.to_string());
        }
    }
    codes
}

/// Indicator selection for a request: the defaults when the parameter is
/// absent, otherwise exactly what was asked for (possibly nothing).
pub fn resolve_indicators(raw: Option<&str>, dataset: &Dataset) -> Vec<String> {
    match raw {
        Some(raw) => parse_indicator_list(raw),
        None => default_trend_indicators(dataset),
    }
}

/// Dashboard tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Trends,
    Events,
    Forecasts,
    Download,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Trends, Tab::Events, Tab::Forecasts, Tab::Download];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Trends => "trends",
            Tab::Events => "events",
            Tab::Forecasts => "forecasts",
            Tab::Download => "download",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Trends => "Trends",
            Tab::Events => "Events",
            Tab::Forecasts => "Forecasts",
            Tab::Download => "Download",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown tab '{}'", s))
    }
}

/// Page query string, parsed leniently.
///
/// Values that fail to parse are dropped and reported in `problems` so the
/// page can still render with defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub scenario: Option<Scenario>,
    pub tab: Tab,
    /// `None` when no `indicators` key was sent at all
    pub indicators: Option<Vec<String>>,
    pub problems: Vec<String>,
}

impl PageParams {
    /// Builds the parameters from raw query pairs. Repeated `indicators`
    /// keys accumulate; an empty `indicators=` marks an explicit selection.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut params = PageParams::default();

        for (key, value) in pairs {
            match key.as_str() {
                "start_date" => params.start_date = params.date(value, "start date"),
                "end_date" => params.end_date = params.date(value, "end date"),
                "scenario" if !value.trim().is_empty() => match value.parse::<Scenario>() {
                    Ok(scenario) => params.scenario = Some(scenario),
                    Err(err) => params.problems.push(err.to_string()),
                },
                "tab" if !value.trim().is_empty() => match value.parse::<Tab>() {
                    Ok(tab) => params.tab = tab,
                    Err(err) => params.problems.push(err),
                },
                "indicators" => {
                    let selected = params.indicators.get_or_insert_with(Vec::new);
                    for code in parse_indicator_list(value) {
                        if !selected.contains(&code) {
                            selected.push(code);
                        }
                    }
                }
                _ => {}
            }
        }

        params
    }

    fn date(&mut self, raw: &str, what: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.problems
                    .push(format!("Ignoring invalid {} '{}' (expected YYYY-MM-DD).", what, raw));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_indicator_list() {
        assert_eq!(
            parse_indicator_list(" ACC_OWNERSHIP, ,USG_ACTIVE_RATE,ACC_OWNERSHIP "),
            vec!["ACC_OWNERSHIP".to_string(), "USG_ACTIVE_RATE".to_string()]
        );
        assert!(parse_indicator_list("").is_empty());
    }

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::from_pairs(&[]);
        assert_eq!(params.tab, Tab::Trends);
        assert_eq!(params.scenario, None);
        assert_eq!(params.indicators, None);
        assert!(params.problems.is_empty());
    }

    #[test]
    fn test_page_params_repeated_indicators() {
        let params = PageParams::from_pairs(&pairs(&[
            ("indicators", ""),
            ("indicators", "ACC_OWNERSHIP"),
            ("indicators", "USG_CROSSOVER,ACC_OWNERSHIP"),
            ("tab", "forecasts"),
            ("scenario", "optimistic"),
        ]));

        assert_eq!(
            params.indicators,
            Some(vec!["ACC_OWNERSHIP".to_string(), "USG_CROSSOVER".to_string()])
        );
        assert_eq!(params.tab, Tab::Forecasts);
        assert_eq!(params.scenario, Some(Scenario::Optimistic));
    }

    #[test]
    fn test_empty_indicator_marker_selects_nothing() {
        let params = PageParams::from_pairs(&pairs(&[("indicators", "")]));
        assert_eq!(params.indicators, Some(Vec::new()));
    }

    #[test]
    fn test_invalid_values_are_reported_not_fatal() {
        let params = PageParams::from_pairs(&pairs(&[
            ("start_date", "2024-13-40"),
            ("end_date", "2024-06-30"),
            ("scenario", "catastrophic"),
            ("tab", "nope"),
        ]));

        assert_eq!(params.start_date, None);
        assert_eq!(params.end_date, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(params.scenario, None);
        assert_eq!(params.tab, Tab::Trends);
        assert_eq!(params.problems.len(), 3);
    }
}
