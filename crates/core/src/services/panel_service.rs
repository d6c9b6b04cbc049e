use crate::models::category::CategoryBreakdown;
use crate::models::chart::{CategoryChart, IncomeExpenseComparison, MetricSeries};
use crate::models::fetch::FetchState;
use crate::models::panel::{CardType, ChartContent, Panel, PanelBody, SummaryCard};
use crate::models::period::PeriodRecord;
use crate::models::summary::SummarySnapshot;
use crate::services::chart_service::ChartService;
use crate::services::format_service::{
    format_currency, format_percentage, format_percentage_change,
};

/// Static copy for one chart card.
struct PanelCopy {
    title: &'static str,
    description: &'static str,
    empty_description: &'static str,
    empty_title: &'static str,
    empty_hint: &'static str,
    headline_label: &'static str,
}

const CASH_FLOW_COPY: PanelCopy = PanelCopy {
    title: "Cash Flow Trend",
    description: "Monthly net cash flow for the selected period",
    empty_description: "Monitor your monthly cash flow",
    empty_title: "No cash flow data available",
    empty_hint: "Start tracking your transactions to see your cash flow trend.",
    headline_label: "Average Cash Flow",
};

const SAVINGS_COPY: PanelCopy = PanelCopy {
    title: "Monthly Savings Trend",
    description: "Showing your savings for the selected period",
    empty_description: "Track your monthly savings progress",
    empty_title: "No savings data available",
    empty_hint: "Start tracking your income and expenses to see your savings trend.",
    headline_label: "Average Monthly Savings",
};

const INCOME_EXPENSES_COPY: PanelCopy = PanelCopy {
    title: "Income vs Expenses",
    description: "Monthly comparison for the selected period",
    empty_description: "Compare your monthly income and expenses",
    empty_title: "No comparison data available",
    empty_hint: "Start tracking your income and expenses to see the comparison.",
    headline_label: "Net Profit",
};

const CATEGORIES_COPY: PanelCopy = PanelCopy {
    title: "Spending by Categories",
    description: "Monthly spending breakdown",
    empty_description: "Breakdown of your spending categories",
    empty_title: "No spending data available",
    empty_hint: "Start adding expenses to see your spending breakdown by categories.",
    headline_label: "Total Spending",
};

/// Turns query states into the panels and cards the dashboard renders.
///
/// Loading → skeleton, Idle or an empty derived series → empty state,
/// Error → error message, otherwise the assembled view-model. The empty
/// check runs on the derived series, not on the raw response.
pub struct PanelService {
    chart_service: ChartService,
    currency: String,
}

impl PanelService {
    pub fn new(chart_service: ChartService, currency: impl Into<String>) -> Self {
        Self {
            chart_service,
            currency: currency.into(),
        }
    }

    pub fn chart_service(&self) -> &ChartService {
        &self.chart_service
    }

    pub fn cash_flow_panel(
        &self,
        state: &FetchState<Vec<PeriodRecord>>,
    ) -> Panel<ChartContent<MetricSeries>> {
        build_panel(&CASH_FLOW_COPY, state, |series| {
            let chart = self.chart_service.cash_flow_series(series);
            (!chart.is_empty()).then(|| ChartContent {
                headline_label: CASH_FLOW_COPY.headline_label.into(),
                headline_value: format_currency(chart.average, &self.currency),
                chart,
            })
        })
    }

    pub fn savings_panel(
        &self,
        state: &FetchState<Vec<PeriodRecord>>,
    ) -> Panel<ChartContent<MetricSeries>> {
        build_panel(&SAVINGS_COPY, state, |series| {
            let chart = self.chart_service.savings_series(series);
            (!chart.is_empty()).then(|| ChartContent {
                headline_label: SAVINGS_COPY.headline_label.into(),
                headline_value: format_currency(chart.average, &self.currency),
                chart,
            })
        })
    }

    pub fn income_expense_panel(
        &self,
        state: &FetchState<Vec<PeriodRecord>>,
    ) -> Panel<ChartContent<IncomeExpenseComparison>> {
        build_panel(&INCOME_EXPENSES_COPY, state, |series| {
            let chart = self.chart_service.income_expense_comparison(series);
            (!chart.is_empty()).then(|| ChartContent {
                headline_label: INCOME_EXPENSES_COPY.headline_label.into(),
                headline_value: format_currency(chart.net_profit, &self.currency),
                chart,
            })
        })
    }

    pub fn category_panel(
        &self,
        state: &FetchState<CategoryBreakdown>,
    ) -> Panel<ChartContent<CategoryChart>> {
        build_panel(&CATEGORIES_COPY, state, |breakdown| {
            let chart = self.chart_service.category_chart(breakdown);
            (!chart.is_empty()).then(|| ChartContent {
                headline_label: CATEGORIES_COPY.headline_label.into(),
                headline_value: format_currency(chart.total_spent, &self.currency),
                chart,
            })
        })
    }

    /// The four summary cards, always in the same order. Values are absent
    /// while loading or when no snapshot has been loaded. A failed fetch
    /// sets `error` on every card.
    pub fn summary_cards(&self, state: &FetchState<SummarySnapshot>) -> Vec<SummaryCard> {
        let is_loading = state.is_loading();
        let snapshot = state.loaded();
        let error = match state {
            FetchState::Error(message) => Some(message.clone()),
            _ => None,
        };

        let money_card = |title: &str, card_type, value: Option<f64>, change: Option<f64>| {
            SummaryCard {
                title: title.to_string(),
                card_type,
                display_value: value.map(|v| format_currency(v, &self.currency)),
                value,
                percentage_change: change,
                display_change: change.map(format_percentage_change),
                expense_ratio: None,
                is_loading,
                error: error.clone(),
            }
        };

        let saving_rate = snapshot.map(|s| s.saving_rate.percentage);

        vec![
            money_card(
                "Current Balance",
                CardType::Balance,
                snapshot.map(|s| s.available_balance),
                snapshot.map(|s| s.percentage_change.balance),
            ),
            money_card(
                "Monthly Income",
                CardType::Income,
                snapshot.map(|s| s.total_income),
                snapshot.map(|s| s.percentage_change.income),
            ),
            money_card(
                "Monthly Spending",
                CardType::Expenses,
                snapshot.map(|s| s.total_expenses),
                snapshot.map(|s| s.percentage_change.expenses),
            ),
            SummaryCard {
                title: "Savings Goal".to_string(),
                card_type: CardType::Savings,
                value: saving_rate,
                display_value: saving_rate.map(|p| format_percentage(p / 100.0)),
                percentage_change: None,
                display_change: None,
                expense_ratio: snapshot.map(|s| s.saving_rate.expense_ratio),
                is_loading,
                error,
            },
        ]
    }
}

fn build_panel<S, V>(
    copy: &PanelCopy,
    state: &FetchState<S>,
    assemble: impl FnOnce(&S) -> Option<V>,
) -> Panel<V> {
    let empty = || PanelBody::Empty {
        title: copy.empty_title.to_string(),
        description: copy.empty_hint.to_string(),
    };

    let body = match state {
        FetchState::Loading => PanelBody::Loading,
        FetchState::Idle => empty(),
        FetchState::Error(message) => PanelBody::Error {
            message: message.clone(),
        },
        FetchState::Loaded(data) => assemble(data).map_or_else(empty, PanelBody::Populated),
    };

    let description = if body.is_populated() {
        copy.description
    } else {
        copy.empty_description
    };

    Panel {
        title: copy.title.to_string(),
        description: description.to_string(),
        body,
    }
}
