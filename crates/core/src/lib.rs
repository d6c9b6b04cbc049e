pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    category::CategoryBreakdown,
    chart::{CategoryChart, IncomeExpenseComparison, MetricSeries},
    fetch::{FetchState, FetchTicket},
    panel::{ChartContent, Panel, SummaryCard},
    period::{PeriodRecord, ValidatedSeries},
    preset::DateRangePreset,
    settings::Settings,
    summary::SummarySnapshot,
};
use serde::Serialize;

use providers::http::HttpAnalyticsProvider;
use providers::traits::AnalyticsProvider;
use services::{
    chart_service::ChartService, panel_service::PanelService, query_service::QueryCell,
};

use errors::CoreError;

/// Tickets for one round of fetches, one per endpoint.
/// All `None` when no date range is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchRound {
    pub chart_data: Option<FetchTicket>,
    pub breakdown: Option<FetchTicket>,
    pub summary: Option<FetchTicket>,
}

/// Main entry point for the finance dashboard core library.
///
/// Holds the active date-range filter, the state of the three analytics
/// queries, and the services that turn those states into renderable panels.
/// Every panel is recomputed from the latest query state on each call.
#[must_use]
pub struct FinanceDashboard {
    settings: Settings,
    provider: Box<dyn AnalyticsProvider>,
    panel_service: PanelService,
    date_range: Option<DateRangePreset>,
    chart_data: QueryCell<Vec<PeriodRecord>>,
    breakdown: QueryCell<CategoryBreakdown>,
    summary: QueryCell<SummarySnapshot>,
    /// Records dropped from the latest chart response during validation.
    rejected_records: Vec<CoreError>,
}

impl std::fmt::Debug for FinanceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceDashboard")
            .field("provider", &self.provider.name())
            .field("settings", &self.settings)
            .field("date_range", &self.date_range)
            .field("rejected_records", &self.rejected_records.len())
            .finish()
    }
}

impl FinanceDashboard {
    /// Dashboard talking to the HTTP backend at `settings.api_base_url`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let provider = HttpAnalyticsProvider::new(settings.api_base_url.clone());
        Self::with_provider(settings, Box::new(provider))
    }

    /// Dashboard backed by any analytics provider.
    pub fn with_provider(
        settings: Settings,
        provider: Box<dyn AnalyticsProvider>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let chart_service = ChartService::with_palette(settings.palette.clone())?;
        let panel_service = PanelService::new(chart_service, settings.display_currency.clone());

        Ok(Self {
            settings,
            provider,
            panel_service,
            date_range: None,
            chart_data: QueryCell::new("chart_data"),
            breakdown: QueryCell::new("expense_breakdown"),
            summary: QueryCell::new("summary"),
            rejected_records: Vec::new(),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn date_range(&self) -> Option<DateRangePreset> {
        self.date_range
    }

    // ── Fetching ────────────────────────────────────────────────────

    /// Change the date-range filter and fetch everything for it.
    ///
    /// The three endpoints are requested concurrently. With no range
    /// selected nothing is requested and every query goes idle.
    pub async fn set_date_range(&mut self, preset: Option<DateRangePreset>) {
        let round = self.begin_fetch(preset);

        let provider = self.provider.as_ref();
        let (chart_data, breakdown, summary) = tokio::join!(
            async {
                match round.chart_data {
                    Some(_) => Some(provider.fetch_chart_data(preset).await),
                    None => None,
                }
            },
            async {
                match round.breakdown {
                    Some(_) => Some(provider.fetch_expense_breakdown(preset).await),
                    None => None,
                }
            },
            async {
                match round.summary {
                    Some(_) => Some(provider.fetch_summary(preset).await),
                    None => None,
                }
            },
        );

        if let (Some(ticket), Some(result)) = (round.chart_data, chart_data) {
            self.resolve_chart_data(ticket, result);
        }
        if let (Some(ticket), Some(result)) = (round.breakdown, breakdown) {
            self.resolve_breakdown(ticket, result);
        }
        if let (Some(ticket), Some(result)) = (round.summary, summary) {
            self.resolve_summary(ticket, result);
        }
    }

    /// Re-fetch for the current filter.
    pub async fn refresh(&mut self) {
        self.set_date_range(self.date_range).await;
    }

    /// Switch the filter and put every query into `Loading` (or `Idle`),
    /// returning the tickets for the requests the caller must issue.
    ///
    /// For shells that drive requests themselves: hand each response back
    /// through the matching `resolve_*` method. Responses for a superseded
    /// round are ignored.
    pub fn begin_fetch(&mut self, preset: Option<DateRangePreset>) -> FetchRound {
        self.date_range = preset;
        FetchRound {
            chart_data: self.chart_data.begin(preset),
            breakdown: self.breakdown.begin(preset),
            summary: self.summary.begin(preset),
        }
    }

    /// Apply a chart-data response. Returns whether it was applied.
    pub fn resolve_chart_data(
        &mut self,
        ticket: FetchTicket,
        result: Result<ValidatedSeries, CoreError>,
    ) -> bool {
        if !self.chart_data.is_current(&ticket) {
            return self.chart_data.resolve(ticket, result.map(|s| s.records));
        }
        let result = match result {
            Ok(series) => {
                self.rejected_records = series.rejected;
                Ok(series.records)
            }
            Err(e) => {
                self.rejected_records.clear();
                Err(e)
            }
        };
        self.chart_data.resolve(ticket, result)
    }

    /// Apply an expense-breakdown response. Returns whether it was applied.
    pub fn resolve_breakdown(
        &mut self,
        ticket: FetchTicket,
        result: Result<CategoryBreakdown, CoreError>,
    ) -> bool {
        self.breakdown.resolve(ticket, result)
    }

    /// Apply a summary response. Returns whether it was applied.
    pub fn resolve_summary(
        &mut self,
        ticket: FetchTicket,
        result: Result<SummarySnapshot, CoreError>,
    ) -> bool {
        self.summary.resolve(ticket, result)
    }

    // ── Query State ─────────────────────────────────────────────────

    #[must_use]
    pub fn chart_data_state(&self) -> &FetchState<Vec<PeriodRecord>> {
        self.chart_data.state()
    }

    #[must_use]
    pub fn breakdown_state(&self) -> &FetchState<CategoryBreakdown> {
        self.breakdown.state()
    }

    #[must_use]
    pub fn summary_state(&self) -> &FetchState<SummarySnapshot> {
        self.summary.state()
    }

    /// Validation failures for records dropped from the latest applied
    /// chart response.
    #[must_use]
    pub fn rejected_records(&self) -> &[CoreError] {
        &self.rejected_records
    }

    // ── Panels ──────────────────────────────────────────────────────

    #[must_use]
    pub fn cash_flow_panel(&self) -> Panel<ChartContent<MetricSeries>> {
        self.panel_service.cash_flow_panel(self.chart_data.state())
    }

    #[must_use]
    pub fn savings_panel(&self) -> Panel<ChartContent<MetricSeries>> {
        self.panel_service.savings_panel(self.chart_data.state())
    }

    #[must_use]
    pub fn income_expense_panel(&self) -> Panel<ChartContent<IncomeExpenseComparison>> {
        self.panel_service.income_expense_panel(self.chart_data.state())
    }

    #[must_use]
    pub fn category_panel(&self) -> Panel<ChartContent<CategoryChart>> {
        self.panel_service.category_panel(self.breakdown.state())
    }

    #[must_use]
    pub fn summary_cards(&self) -> Vec<SummaryCard> {
        self.panel_service.summary_cards(self.summary.state())
    }

    /// Everything the dashboard renders, recomputed from the current state.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            date_range: self.date_range,
            summary_cards: self.summary_cards(),
            cash_flow: self.cash_flow_panel(),
            savings: self.savings_panel(),
            income_expenses: self.income_expense_panel(),
            categories: self.category_panel(),
        }
    }

    /// Export the full view as JSON for a frontend to render.
    pub fn view_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.view())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize dashboard view: {e}")))
    }
}

/// All panels and cards of the dashboard at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub date_range: Option<DateRangePreset>,
    pub summary_cards: Vec<SummaryCard>,
    pub cash_flow: Panel<ChartContent<MetricSeries>>,
    pub savings: Panel<ChartContent<MetricSeries>>,
    pub income_expenses: Panel<ChartContent<IncomeExpenseComparison>>,
    pub categories: Panel<ChartContent<CategoryChart>>,
}
