use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::category::CategoryBreakdown;
use crate::models::period::ValidatedSeries;
use crate::models::preset::DateRangePreset;
use crate::models::summary::SummarySnapshot;

/// Source of analytics data for the dashboard.
///
/// The HTTP backend implements this; tests and offline shells plug in
/// their own implementation. Everything downstream only sees this trait.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AnalyticsProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Income/expense time series for the given range.
    /// Malformed records are reported in `ValidatedSeries::rejected`
    /// rather than failing the whole call.
    async fn fetch_chart_data(
        &self,
        preset: Option<DateRangePreset>,
    ) -> Result<ValidatedSeries, CoreError>;

    /// Spending per category for the given range.
    async fn fetch_expense_breakdown(
        &self,
        preset: Option<DateRangePreset>,
    ) -> Result<CategoryBreakdown, CoreError>;

    /// Balance/income/expense snapshot for the given range.
    async fn fetch_summary(
        &self,
        preset: Option<DateRangePreset>,
    ) -> Result<SummarySnapshot, CoreError>;
}
