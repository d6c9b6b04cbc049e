use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::category::CategoryBreakdown;
use crate::models::period::{validate_json_series, ValidatedSeries};
use crate::models::preset::DateRangePreset;
use crate::models::summary::SummarySnapshot;
use super::traits::AnalyticsProvider;

pub const CHART_ENDPOINT: &str = "analytics/chart";
pub const EXPENSE_BREAKDOWN_ENDPOINT: &str = "analytics/expense-breakdown";
pub const SUMMARY_ENDPOINT: &str = "analytics/summary";

/// Analytics provider backed by the REST API.
///
/// - `GET {base}/analytics/chart` → `{ data: { chartData: [...] } }`
/// - `GET {base}/analytics/expense-breakdown` → `{ data: { breakdown, totalSpent } }`
/// - `GET {base}/analytics/summary` → `{ data: { availableBalance, ... } }`
///
/// All three take an optional `preset` query parameter.
pub struct HttpAnalyticsProvider {
    client: Client,
    base_url: String,
}

impl HttpAnalyticsProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an endpoint, without query string.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Query parameters for a request; empty when no preset is selected.
    pub fn query_params(preset: Option<DateRangePreset>) -> Vec<(&'static str, &'static str)> {
        preset
            .map(|p| vec![("preset", p.as_query_value())])
            .unwrap_or_default()
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        preset: Option<DateRangePreset>,
    ) -> Result<T, CoreError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(%url, preset = ?preset, "requesting analytics");

        let resp = self
            .client
            .get(&url)
            .query(&Self::query_params(preset))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                endpoint: endpoint.into(),
                message: format!("HTTP {status}"),
            });
        }

        let envelope: ApiEnvelope<T> = resp.json().await.map_err(|e| CoreError::Api {
            endpoint: endpoint.into(),
            message: format!("Failed to parse response: {e}"),
        })?;

        Ok(envelope.data)
    }
}

// ── Analytics API response types ────────────────────────────────────

#[derive(Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartDataPayload {
    #[serde(default)]
    chart_data: Vec<serde_json::Value>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AnalyticsProvider for HttpAnalyticsProvider {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_chart_data(
        &self,
        preset: Option<DateRangePreset>,
    ) -> Result<ValidatedSeries, CoreError> {
        let payload: ChartDataPayload = self.get_data(CHART_ENDPOINT, preset).await?;
        Ok(validate_json_series(&payload.chart_data))
    }

    async fn fetch_expense_breakdown(
        &self,
        preset: Option<DateRangePreset>,
    ) -> Result<CategoryBreakdown, CoreError> {
        self.get_data(EXPENSE_BREAKDOWN_ENDPOINT, preset).await
    }

    async fn fetch_summary(
        &self,
        preset: Option<DateRangePreset>,
    ) -> Result<SummarySnapshot, CoreError> {
        self.get_data(SUMMARY_ENDPOINT, preset).await
    }
}
