use common::{KpiBoard, KpiCard, KpiPoint, KpiSummary};
use tracing::debug;

use crate::records::Observation;

/// Latest value of `indicator_code` over the full observation history.
///
/// Rows without a value or a date are ignored. Among rows sharing the latest
/// date the one appearing last in the source wins. Any date filter the user
/// has active does not apply.
pub fn latest_value(observations: &[Observation], indicator_code: &str) -> KpiSummary {
    let latest = observations
        .iter()
        .filter(|o| o.indicator_code.as_deref() == Some(indicator_code))
        .filter_map(|o| match (o.observation_date, o.value_numeric) {
            (Some(date), Some(value)) => Some(KpiPoint { value, date }),
            _ => None,
        })
        .max_by_key(|point| point.date);

    debug!(indicator_code, ?latest, "Resolved latest KPI value");
    KpiSummary {
        indicator_code: indicator_code.to_string(),
        latest,
    }
}

/// How a headline card prints its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Percent { decimals: usize },
    Plain { decimals: usize },
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Percent { decimals } => format!("{:.*}%", decimals, value),
            ValueFormat::Plain { decimals } => format!("{:.*}", decimals, value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiDefinition {
    pub indicator_code: &'static str,
    pub label: &'static str,
    pub format: ValueFormat,
}

/// Headline cards shown above the tabs, in display order.
pub const HEADLINE_KPIS: [KpiDefinition; 4] = [
    KpiDefinition {
        indicator_code: "ACC_OWNERSHIP",
        label: "Access: Account Ownership (latest)",
        format: ValueFormat::Percent { decimals: 1 },
    },
    KpiDefinition {
        indicator_code: "ACC_MM_ACCOUNT",
        label: "Access: Mobile Money Account (latest)",
        format: ValueFormat::Percent { decimals: 2 },
    },
    KpiDefinition {
        indicator_code: "USG_CROSSOVER",
        label: "Usage: P2P/ATM Crossover (latest)",
        format: ValueFormat::Plain { decimals: 2 },
    },
    KpiDefinition {
        indicator_code: "USG_ACTIVE_RATE",
        label: "Usage: Active Rate (latest)",
        format: ValueFormat::Plain { decimals: 2 },
    },
];

/// Placeholder printed on a card without data.
pub const NO_DATA: &str = "—";

impl KpiDefinition {
    pub fn card(&self, observations: &[Observation]) -> KpiCard {
        let summary = latest_value(observations, self.indicator_code);
        let (display, help) = match summary.latest {
            Some(point) => (
                self.format.format(point.value),
                Some(format!("Date: {}", point.date)),
            ),
            None => (NO_DATA.to_string(), None),
        };
        KpiCard {
            label: self.label.to_string(),
            display,
            help,
            summary,
        }
    }
}

/// Builds the headline KPI cards from the unfiltered observations.
pub fn headline_board(observations: &[Observation]) -> KpiBoard {
    KpiBoard {
        cards: HEADLINE_KPIS.iter().map(|kpi| kpi.card(observations)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, observation};

    #[test]
    fn test_single_valid_row() {
        let rows = vec![observation("r1", "ACC_OWNERSHIP", Some(46.0), Some(date(2022, 1, 1)))];

        let summary = latest_value(&rows, "ACC_OWNERSHIP");
        assert_eq!(
            summary.latest,
            Some(KpiPoint {
                value: 46.0,
                date: date(2022, 1, 1)
            })
        );
    }

    #[test]
    fn test_latest_date_wins_regardless_of_order() {
        let rows = vec![
            observation("r1", "ACC_OWNERSHIP", Some(35.0), Some(date(2017, 12, 31))),
            observation("r2", "ACC_OWNERSHIP", Some(46.0), Some(date(2021, 12, 31))),
            observation("r3", "ACC_OWNERSHIP", Some(22.0), Some(date(2014, 12, 31))),
            observation("r4", "ACC_MM_ACCOUNT", Some(9.9), Some(date(2024, 1, 1))),
        ];

        let point = latest_value(&rows, "ACC_OWNERSHIP").latest.unwrap();
        assert_eq!(point.value, 46.0);
        assert_eq!(point.date, date(2021, 12, 31));
    }

    #[test]
    fn test_rows_without_value_or_date_are_skipped() {
        let rows = vec![
            observation("r1", "USG_ACTIVE_RATE", Some(0.3), Some(date(2020, 1, 1))),
            observation("r2", "USG_ACTIVE_RATE", None, Some(date(2024, 1, 1))),
            observation("r3", "USG_ACTIVE_RATE", Some(0.9), None),
        ];

        let point = latest_value(&rows, "USG_ACTIVE_RATE").latest.unwrap();
        assert_eq!(point.date, date(2020, 1, 1));
        assert_eq!(point.value, 0.3);
    }

    #[test]
    fn test_same_date_takes_last_row() {
        let rows = vec![
            observation("r1", "X", Some(1.0), Some(date(2020, 1, 1))),
            observation("r2", "X", Some(2.0), Some(date(2020, 1, 1))),
        ];
        assert_eq!(latest_value(&rows, "X").latest.unwrap().value, 2.0);
    }

    #[test]
    fn test_no_data() {
        let rows = vec![observation("r1", "X", None, Some(date(2020, 1, 1)))];

        let summary = latest_value(&rows, "X");
        assert!(!summary.has_data());
        assert_eq!(latest_value(&rows, "UNKNOWN"), KpiSummary::no_data("UNKNOWN"));
    }

    #[test]
    fn test_latest_date_is_max_date_with_value() {
        let rows = vec![
            observation("a", "X", Some(1.0), Some(date(2016, 3, 1))),
            observation("b", "X", None, Some(date(2023, 3, 1))),
            observation("c", "X", Some(3.0), Some(date(2019, 3, 1))),
            observation("d", "Y", Some(4.0), Some(date(2024, 3, 1))),
            observation("e", "X", Some(5.0), Some(date(2018, 3, 1))),
        ];

        let expected = rows
            .iter()
            .filter(|o| o.indicator_code.as_deref() == Some("X") && o.value_numeric.is_some())
            .filter_map(|o| o.observation_date)
            .max();
        assert_eq!(latest_value(&rows, "X").latest.map(|p| p.date), expected);
    }

    #[test]
    fn test_headline_cards_format_values() {
        let rows = vec![
            observation("r1", "ACC_OWNERSHIP", Some(46.0), Some(date(2021, 12, 31))),
            observation("r2", "ACC_MM_ACCOUNT", Some(4.7), Some(date(2021, 12, 31))),
            observation("r3", "USG_CROSSOVER", Some(1.081), Some(date(2024, 6, 30))),
        ];

        let board = headline_board(&rows);
        let displays: Vec<&str> = board.cards.iter().map(|c| c.display.as_str()).collect();
        assert_eq!(displays, vec!["46.0%", "4.70%", "1.08", NO_DATA]);
        assert_eq!(board.cards[0].help.as_deref(), Some("Date: 2021-12-31"));
        assert_eq!(board.cards[3].help, None);
        assert_eq!(board.cards[3].label, "Usage: Active Rate (latest)");
    }
}
