use crate::core::timeseries::{fetch_recent_series, to_chart_points};
use crate::domain::model::{EbitdaResponse, Query, TimeSeriesPoint};
use crate::domain::ports::EbitdaSource;
use crate::utils::validation::Validate;

/// Outcome of the most recent search.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loaded(EbitdaResponse),
    Failed { message: String },
}

/// One user's search flow: submit, retry the same query after a failure,
/// or reset back to a blank state.
pub struct Session<S: EbitdaSource> {
    source: S,
    last_query: Option<Query>,
    state: SearchState,
}

impl<S: EbitdaSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_query: None,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn last_query(&self) -> Option<&Query> {
        self.last_query.as_ref()
    }

    pub async fn search(&mut self, query: Query) -> &SearchState {
        if let Err(e) = query.validate() {
            self.state = SearchState::Failed {
                message: e.user_friendly_message(),
            };
            return &self.state;
        }

        self.state = match self.source.fetch(&query).await {
            Ok(response) => SearchState::Loaded(response),
            Err(e) => {
                tracing::error!("lookup failed: {}", e);
                SearchState::Failed {
                    message: e.user_friendly_message(),
                }
            }
        };
        self.last_query = Some(query);
        &self.state
    }

    /// Re-issues the last submitted query. `None` when nothing was submitted.
    pub async fn retry(&mut self) -> Option<&SearchState> {
        let query = self.last_query.clone()?;
        Some(self.search(query).await)
    }

    pub fn reset(&mut self) {
        self.last_query = None;
        self.state = SearchState::Idle;
    }

    /// Chart data for the loaded result's company and report type. Empty
    /// unless the last search succeeded.
    pub async fn load_series(&self, years: usize) -> Vec<TimeSeriesPoint> {
        let (SearchState::Loaded(_), Some(query)) = (&self.state, &self.last_query) else {
            return Vec::new();
        };

        let series = fetch_recent_series(
            &self.source,
            &query.company,
            years,
            query.report_code,
            query.fs_div,
        )
        .await;
        to_chart_points(&series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_response;
    use crate::domain::model::{FsDiv, ReportCode};
    use crate::utils::error::{EbitdaError, Result, TIMEOUT_MESSAGE};
    use async_trait::async_trait;
    use chrono::{Datelike, Local};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Times out on the first call, succeeds afterwards.
    struct FlakySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EbitdaSource for FlakySource {
        async fn fetch(&self, query: &Query) -> Result<EbitdaResponse> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(EbitdaError::Timeout);
            }
            Ok(sample_response(query.year))
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    fn flaky() -> FlakySource {
        FlakySource {
            calls: AtomicUsize::new(0),
        }
    }

    fn this_year_query() -> Query {
        Query::new("005930", Local::now().year(), ReportCode::Annual, FsDiv::Consolidated)
    }

    #[tokio::test]
    async fn test_retry_reissues_last_query() {
        let mut session = Session::new(flaky());

        let state = session.search(this_year_query()).await;
        assert_eq!(
            state,
            &SearchState::Failed {
                message: TIMEOUT_MESSAGE.to_string()
            }
        );

        let state = session.retry().await.unwrap();
        assert!(matches!(state, SearchState::Loaded(r) if r.period.year == Local::now().year()));
        assert_eq!(session.source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_state() {
        let mut session = Session::new(flaky());
        session.search(this_year_query()).await;

        session.reset();
        assert_eq!(session.state(), &SearchState::Idle);
        assert!(session.last_query().is_none());
        assert!(session.retry().await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_query_is_not_sent() {
        let mut session = Session::new(flaky());
        let state = session
            .search(Query::new("  ", 2023, ReportCode::Annual, FsDiv::Consolidated))
            .await;

        assert!(matches!(state, SearchState::Failed { .. }));
        assert!(session.last_query().is_none());
        assert_eq!(session.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_series_only_after_success() {
        let mut session = Session::new(flaky());
        session.search(this_year_query()).await;
        assert!(session.load_series(5).await.is_empty());

        session.retry().await;
        let points = session.load_series(3).await;
        assert_eq!(points.len(), 3);
        assert_eq!(points.last().map(|p| p.year), Some(Local::now().year()));
    }
}
