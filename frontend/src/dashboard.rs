use futures::future::try_join3;
use log::{debug, error, info};
use std::future::Future;

use crate::error::Result;
use crate::metrics;
use crate::models::{
    CategoryBreakdownEntry, DailyAnalyticsEntry, IncomeVsExpensesPoint, MonthlyAnalyticsResponse,
    MonthlySummary, MonthlyTrendPoint, Transaction,
};
use crate::sample;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub transactions: Vec<Transaction>,
    pub daily: Vec<DailyAnalyticsEntry>,
    pub monthly: MonthlyAnalyticsResponse,
}

/// Awaits the three dashboard fetches together. The first failure wins; a
/// partial result is never returned.
pub async fn hydrate<T, D, M>(transactions: T, daily: D, monthly: M) -> Result<DashboardData>
where
    T: Future<Output = Result<Vec<Transaction>>>,
    D: Future<Output = Result<Vec<DailyAnalyticsEntry>>>,
    M: Future<Output = Result<MonthlyAnalyticsResponse>>,
{
    let (transactions, daily, monthly) = try_join3(transactions, daily, monthly).await?;
    Ok(DashboardData {
        transactions,
        daily,
        monthly,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Inputs to the load lifecycle.
#[derive(Debug)]
pub enum LoadEvent {
    /// Mount, Retry, or a finished upload asking for fresh data.
    Requested,
    Finished(Result<DashboardData>),
}

/// Load lifecycle plus whatever was last fetched successfully.
///
/// `ticket` goes up each time a fetch should start; a request that arrives
/// while one is in flight is queued and started as soon as it settles.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub state: LoadState,
    data: Option<DashboardData>,
    queued: bool,
    ticket: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard {
            state: LoadState::Idle,
            data: None,
            queued: false,
            ticket: 0,
        }
    }
}

impl Dashboard {
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Sample data stays up until the first successful load.
    pub fn using_sample_data(&self) -> bool {
        self.data.is_none()
    }

    /// Bumped once per fetch that should be issued.
    pub fn load_ticket(&self) -> u64 {
        self.ticket
    }

    pub fn has_queued_reload(&self) -> bool {
        self.queued
    }

    pub fn apply(&self, event: LoadEvent) -> Dashboard {
        match event {
            LoadEvent::Requested => self.request_load(),
            LoadEvent::Finished(result) => self.finish_load(result),
        }
    }

    pub fn request_load(&self) -> Dashboard {
        if self.is_loading() {
            debug!("load already running, queueing another");
            return Dashboard {
                queued: true,
                ..self.clone()
            };
        }
        info!("loading dashboard data");
        Dashboard {
            state: LoadState::Loading,
            ticket: self.ticket + 1,
            ..self.clone()
        }
    }

    pub fn finish_load(&self, result: Result<DashboardData>) -> Dashboard {
        let settled = match result {
            Ok(data) => {
                info!(
                    "dashboard loaded: {} transactions, {} daily entries",
                    data.transactions.len(),
                    data.daily.len()
                );
                Dashboard {
                    state: LoadState::Loaded,
                    data: Some(data),
                    queued: false,
                    ticket: self.ticket,
                }
            }
            Err(err) => {
                error!("dashboard load failed: {}", err);
                Dashboard {
                    state: LoadState::Failed(err.to_string()),
                    data: self.data.clone(),
                    queued: false,
                    ticket: self.ticket,
                }
            }
        };
        if self.queued {
            settled.request_load()
        } else {
            settled
        }
    }

    fn monthly(&self) -> Option<&MonthlyAnalyticsResponse> {
        self.data.as_ref().map(|data| &data.monthly)
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        match &self.data {
            Some(data) if !data.transactions.is_empty() => data.transactions.clone(),
            _ => sample::transactions(),
        }
    }

    /// Whether the transaction list is showing backend rows.
    pub fn has_live_transactions(&self) -> bool {
        self.data
            .as_ref()
            .map_or(false, |data| !data.transactions.is_empty())
    }

    pub fn daily_snapshot(&self) -> Vec<DailyAnalyticsEntry> {
        self.data
            .as_ref()
            .map(|data| data.daily.iter().take(7).cloned().collect())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> Option<MonthlySummary> {
        self.monthly().and_then(|monthly| monthly.summary.clone())
    }

    pub fn trend(&self) -> Vec<MonthlyTrendPoint> {
        metrics::normalize_trend(self.monthly().and_then(|m| m.trend.as_deref()))
    }

    /// Raw trend points, only when the backend actually sent some.
    pub fn live_trend(&self) -> Option<Vec<MonthlyTrendPoint>> {
        self.monthly().and_then(|m| m.trend.clone())
    }

    pub fn income_vs_expenses(&self) -> Vec<IncomeVsExpensesPoint> {
        match self.monthly().and_then(|m| m.income_vs_expenses.as_ref()) {
            Some(points) if !points.is_empty() => points.clone(),
            _ => sample::income_vs_expenses(),
        }
    }

    /// Normalized breakdown; the sample split before the first load, an empty
    /// list when the backend had nothing.
    pub fn category_breakdown(&self) -> Vec<CategoryBreakdownEntry> {
        match self.monthly() {
            Some(monthly) => {
                metrics::normalize_breakdown(monthly.category_breakdown.as_deref().unwrap_or(&[]))
            }
            None => sample::category_breakdown(),
        }
    }

    pub fn total_expenses(&self) -> f64 {
        let summary = self.summary();
        metrics::total_expenses(summary.as_ref(), &self.category_breakdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use futures::executor::block_on;
    use futures::future::{ready, Ready};

    fn ok<T>(value: T) -> Ready<Result<T>> {
        ready(Ok(value))
    }

    fn fail<T>(message: &str) -> Ready<Result<T>> {
        ready(Err(ApiError::Status {
            status: 500,
            message: message.to_string(),
        }))
    }

    fn monthly_with_breakdown() -> MonthlyAnalyticsResponse {
        MonthlyAnalyticsResponse {
            category_breakdown: Some(vec![CategoryBreakdownEntry {
                category: "Food".to_string(),
                amount: 250.0,
                percent: 0.25,
                recommended: None,
                recommended_amount: None,
                color: None,
                accent_class: None,
            }]),
            ..MonthlyAnalyticsResponse::default()
        }
    }

    #[test]
    fn joint_load_succeeds_only_when_all_succeed() {
        let result = block_on(hydrate(ok(sample::transactions()), ok(vec![]), ok(monthly_with_breakdown())));
        let dashboard = Dashboard::default().request_load().finish_load(result);
        assert_eq!(dashboard.state, LoadState::Loaded);
        assert!(!dashboard.using_sample_data());
        assert_eq!(dashboard.total_expenses(), 250.0);
    }

    #[test]
    fn any_failed_fetch_fails_the_whole_load() {
        let cases = [
            block_on(hydrate(fail("tx down"), ok(vec![]), ok(monthly_with_breakdown()))),
            block_on(hydrate(ok(vec![]), fail("daily down"), ok(monthly_with_breakdown()))),
            block_on(hydrate(ok(vec![]), ok(vec![]), fail("monthly down"))),
        ];
        for result in cases {
            let dashboard = Dashboard::default().request_load().finish_load(result);
            assert!(matches!(dashboard.state, LoadState::Failed(_)));
            assert!(dashboard.using_sample_data());
        }
    }

    #[test]
    fn failure_keeps_error_message_for_the_banner() {
        let loading = Dashboard::default().request_load();
        let failed = loading.finish_load(block_on(hydrate(ok(vec![]), ok(vec![]), fail("Service Unavailable"))));
        assert_eq!(failed.error(), Some("Service Unavailable"));
        assert!(failed.request_load().is_loading());
    }

    #[test]
    fn request_during_a_load_is_queued_not_dropped() {
        let loading = Dashboard::default().apply(LoadEvent::Requested);
        assert_eq!(loading.load_ticket(), 1);

        let queued = loading.apply(LoadEvent::Requested);
        assert!(queued.has_queued_reload());
        assert_eq!(queued.load_ticket(), 1);

        let first = block_on(hydrate(ok(vec![]), ok(vec![]), ok(monthly_with_breakdown())));
        let reloading = queued.apply(LoadEvent::Finished(first));
        assert!(reloading.is_loading());
        assert!(!reloading.has_queued_reload());
        assert_eq!(reloading.load_ticket(), 2);
        assert!(!reloading.using_sample_data());

        let settled = reloading.apply(LoadEvent::Finished(Ok(DashboardData::default())));
        assert_eq!(settled.state, LoadState::Loaded);
        assert_eq!(settled.load_ticket(), 2);
    }

    #[test]
    fn queued_reload_still_runs_after_a_failure() {
        let queued = Dashboard::default()
            .apply(LoadEvent::Requested)
            .apply(LoadEvent::Requested);
        let failed = block_on(hydrate(ok(vec![]), fail("daily down"), ok(monthly_with_breakdown())));
        let retrying = queued.apply(LoadEvent::Finished(failed));
        assert!(retrying.is_loading());
        assert_eq!(retrying.load_ticket(), 2);
    }

    #[test]
    fn sample_data_fills_widgets_before_first_load() {
        let dashboard = Dashboard::default();
        assert!(dashboard.using_sample_data());
        assert_eq!(dashboard.transactions().len(), 14);
        assert!(!dashboard.has_live_transactions());
        assert_eq!(dashboard.trend().len(), 7);
        assert_eq!(dashboard.category_breakdown().len(), 9);
        assert_eq!(dashboard.income_vs_expenses().len(), 7);
        assert!(dashboard.live_trend().is_none());
    }

    #[test]
    fn reload_after_failure_keeps_previous_data() {
        let loaded = Dashboard::default()
            .request_load()
            .finish_load(Ok(DashboardData {
                monthly: monthly_with_breakdown(),
                ..DashboardData::default()
            }));
        let failed = loaded
            .request_load()
            .finish_load(block_on(hydrate(ok(vec![]), ok(vec![]), fail("timeout"))));
        assert!(!failed.using_sample_data());
        assert_eq!(failed.category_breakdown().len(), 1);
        assert_eq!(failed.category_breakdown()[0].color.as_deref(), Some("#dc2626"));
    }
}
