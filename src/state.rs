use crate::categories::Category;
use crate::errors::FetchError;
use crate::fetch::Fetcher;
use crate::models::{DailyRecord, LatestEntry};
use chrono::NaiveDate;

/// Shared axum state: just the fetcher. Dashboard data is transient and
/// rebuilt per request, nothing is persisted across sessions.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }
}

/// Which of the two data views the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    TimeSeries,
    Summary,
}

/// What actually gets rendered. Any non-empty error message replaces the
/// whole data view; cards or chart are never shown alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    TimeSeries,
    Summary,
    Error,
}

/// Bundled fallback series shown when the single-category fetch fails;
/// a snapshot of positive-cases so the chart never renders empty.
const DEFAULT_SERIES: [(&str, &str); 14] = [
    ("2021-11-01", "86"),
    ("2021-11-02", "154"),
    ("2021-11-03", "263"),
    ("2021-11-04", "158"),
    ("2021-11-05", "236"),
    ("2021-11-06", "162"),
    ("2021-11-07", "119"),
    ("2021-11-08", "107"),
    ("2021-11-09", "204"),
    ("2021-11-10", "205"),
    ("2021-11-11", "202"),
    ("2021-11-12", "199"),
    ("2021-11-13", "160"),
    ("2021-11-14", "134"),
];

pub fn default_series() -> Vec<DailyRecord> {
    DEFAULT_SERIES
        .iter()
        .map(|(date, count)| DailyRecord {
            date: (*date).to_string(),
            count: (*count).to_string(),
        })
        .collect()
}

/// Six zero-valued entries in display order, the fallback when the
/// latest-values batch fails.
pub fn default_latest() -> Vec<LatestEntry> {
    Category::ALL.into_iter().map(LatestEntry::zero).collect()
}

/// The container state behind one dashboard render: mode flag, the most
/// recent data for each fetch kind, and a single shared error message
/// overwritten by whichever fetch outcome was applied last.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub mode: ViewMode,
    pub current_category: Category,
    pub current_data: Vec<DailyRecord>,
    pub latest: Vec<LatestEntry>,
    pub error_message: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            mode: ViewMode::TimeSeries,
            current_category: Category::PositiveCases,
            current_data: default_series(),
            latest: default_latest(),
            error_message: String::new(),
        }
    }
}

impl DashboardState {
    /// Reducer for the single-category fetch. Failure degrades to the
    /// default category and dataset, never an empty chart. The mode flag
    /// flips to the time-series view either way.
    pub fn apply_series(
        &mut self,
        category: Category,
        outcome: Result<Vec<DailyRecord>, FetchError>,
    ) {
        self.mode = ViewMode::TimeSeries;
        match outcome {
            Ok(data) => {
                self.current_category = category;
                self.current_data = data;
                self.error_message.clear();
            }
            Err(err) => {
                self.current_category = Category::PositiveCases;
                self.current_data = default_series();
                self.error_message = err.to_string();
            }
        }
    }

    /// Reducer for the latest-values batch. No partial results: failure
    /// replaces all six entries with zeros.
    pub fn apply_summary(&mut self, outcome: Result<Vec<LatestEntry>, FetchError>) {
        self.mode = ViewMode::Summary;
        match outcome {
            Ok(data) => {
                self.latest = data;
                self.error_message.clear();
            }
            Err(err) => {
                self.latest = default_latest();
                self.error_message = err.to_string();
            }
        }
    }

    pub fn view(&self) -> View {
        if !self.error_message.is_empty() {
            return View::Error;
        }
        match self.mode {
            ViewMode::TimeSeries => View::TimeSeries,
            ViewMode::Summary => View::Summary,
        }
    }

    /// "Last updated" date for the header, taken from the newest record.
    pub fn load_date(&self) -> String {
        let raw = self
            .current_data
            .last()
            .map(|record| record.date.as_str())
            .unwrap_or_default();
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date.format("%Y/%m/%d").to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn series(dates: &[(&str, &str)]) -> Vec<DailyRecord> {
        dates
            .iter()
            .map(|(date, count)| DailyRecord {
                date: (*date).to_string(),
                count: (*count).to_string(),
            })
            .collect()
    }

    #[test]
    fn series_success_sets_mode_and_clears_error() {
        let mut state = DashboardState::default();
        state.error_message = "stale".to_string();

        let data = series(&[("2021-12-01", "99")]);
        state.apply_series(Category::DeathCases, Ok(data.clone()));

        assert_eq!(state.mode, ViewMode::TimeSeries);
        assert_eq!(state.current_category, Category::DeathCases);
        assert_eq!(state.current_data, data);
        assert!(state.error_message.is_empty());
        assert_eq!(state.view(), View::TimeSeries);
    }

    #[test]
    fn series_failure_falls_back_to_default_dataset() {
        let mut state = DashboardState::default();
        state.apply_series(
            Category::SevereCases,
            Err(FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR)),
        );

        assert_eq!(state.current_category, Category::PositiveCases);
        assert_eq!(state.current_data, default_series());
        assert_eq!(
            state.error_message,
            "Error! HTTP Status: 500 Internal Server Error"
        );
        assert_eq!(state.view(), View::Error);
    }

    #[test]
    fn summary_success_keeps_six_entries_in_order() {
        let mut state = DashboardState::default();
        let entries: Vec<LatestEntry> = Category::ALL
            .into_iter()
            .map(|category| LatestEntry {
                category,
                count: "7".to_string(),
            })
            .collect();

        state.apply_summary(Ok(entries.clone()));

        assert_eq!(state.mode, ViewMode::Summary);
        assert_eq!(state.latest, entries);
        assert_eq!(state.view(), View::Summary);
    }

    #[test]
    fn summary_failure_discards_partial_data() {
        let mut state = DashboardState::default();
        state.latest = vec![LatestEntry {
            category: Category::TestCases,
            count: "12345".to_string(),
        }];

        state.apply_summary(Err(FetchError::from_status(StatusCode::NOT_FOUND)));

        assert_eq!(state.latest, default_latest());
        assert_eq!(state.latest.len(), 6);
        assert!(state.latest.iter().all(|entry| entry.count == "0"));
        assert_eq!(state.error_message, "Error! HTTP Status: 404 Not Found");
    }

    #[test]
    fn last_reducer_wins_the_error_field() {
        let mut state = DashboardState::default();
        state.apply_series(
            Category::PositiveCases,
            Err(FetchError::from_status(StatusCode::BAD_GATEWAY)),
        );
        state.apply_summary(Ok(default_latest()));

        // The summary outcome was applied last, so its empty error wins.
        assert!(state.error_message.is_empty());
        assert_eq!(state.view(), View::Summary);
    }

    #[test]
    fn load_date_formats_the_newest_record() {
        let mut state = DashboardState::default();
        state.current_data = series(&[("2021-12-30", "1"), ("2021-12-31", "2")]);
        assert_eq!(state.load_date(), "2021/12/31");
    }
}
