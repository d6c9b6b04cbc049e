use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::category::CategoryBreakdown;
use crate::models::chart::{
    CategoryChart, CategorySlice, ComparisonPoint, IncomeExpenseComparison, MetricPoint,
    MetricSeries, NetTrend,
};
use crate::models::period::PeriodRecord;
use crate::models::settings::DEFAULT_PALETTE;
use crate::services::metrics_service;

/// Largest disagreement (in percentage points) tolerated between an upstream
/// category percentage and `value / totalSpent × 100`.
const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// Short month label for a chart axis, e.g. "Jan".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Generates chart-ready view-models from analytics data.
///
/// The core computes all the numbers and the frontend only renders them.
/// Each chart is assembled from scratch from its source data; nothing is
/// cached between calls, so assembling twice yields identical output.
/// Output order always follows input order.
#[derive(Debug, Clone)]
pub struct ChartService {
    palette: Vec<String>,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Use a custom category palette. Must not be empty.
    pub fn with_palette(palette: Vec<String>) -> Result<Self, CoreError> {
        if palette.is_empty() {
            return Err(CoreError::ValidationError(
                "Category palette must contain at least one colour".into(),
            ));
        }
        Ok(Self { palette })
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Colour for the category at ordinal position `index`.
    /// Cycles through the palette when categories outnumber colours.
    pub fn color_for(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }

    /// Monthly net cash flow (income - expenses, may be negative).
    pub fn cash_flow_series(&self, series: &[PeriodRecord]) -> MetricSeries {
        build_series(series, metrics_service::cash_flow)
    }

    /// Monthly savings (cash flow clamped at zero).
    pub fn savings_series(&self, series: &[PeriodRecord]) -> MetricSeries {
        build_series(series, metrics_service::savings)
    }

    /// Income and expenses side by side per month, with totals and net profit.
    pub fn income_expense_comparison(&self, series: &[PeriodRecord]) -> IncomeExpenseComparison {
        let points = series
            .iter()
            .map(|p| ComparisonPoint {
                label: month_label(p.date),
                income: p.income,
                expenses: p.expenses,
            })
            .collect();

        let totals = metrics_service::income_expense_totals(series);
        let net_profit = totals.net_profit();

        IncomeExpenseComparison {
            points,
            total_income: totals.income,
            total_expenses: totals.expenses,
            net_profit,
            trend: if net_profit >= 0.0 {
                NetTrend::Positive
            } else {
                NetTrend::Negative
            },
        }
    }

    /// Spending by category, in API order, with palette colours assigned by
    /// position.
    ///
    /// Upstream percentages are checked against `value / totalSpent × 100`;
    /// a disagreement beyond `PERCENTAGE_TOLERANCE` is logged and the
    /// recomputed value is used. With a zero total the upstream value is kept.
    pub fn category_chart(&self, breakdown: &CategoryBreakdown) -> CategoryChart {
        let total_spent = breakdown.total_spent;

        let entries_total = breakdown.entries_total();
        if !breakdown.breakdown.is_empty()
            && (entries_total - total_spent).abs() > PERCENTAGE_TOLERANCE
        {
            tracing::warn!(
                entries_total,
                total_spent,
                "category values do not sum to total spending"
            );
        }

        let slices = breakdown
            .breakdown
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let percentage = if total_spent > 0.0 {
                    let expected = entry.value / total_spent * 100.0;
                    if (expected - entry.percentage).abs() > PERCENTAGE_TOLERANCE {
                        tracing::warn!(
                            category = %entry.name,
                            upstream = entry.percentage,
                            expected,
                            "category percentage disagrees with its value; using recomputed share"
                        );
                        expected
                    } else {
                        entry.percentage
                    }
                } else {
                    entry.percentage
                };

                CategorySlice {
                    name: entry.name.clone(),
                    amount: entry.value,
                    percentage,
                    color: self.color_for(index).to_string(),
                }
            })
            .collect();

        CategoryChart {
            slices,
            total_spent,
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn build_series(series: &[PeriodRecord], metric: fn(&PeriodRecord) -> f64) -> MetricSeries {
    let points: Vec<MetricPoint> = series
        .iter()
        .map(|p| MetricPoint {
            label: month_label(p.date),
            value: metric(p),
        })
        .collect();

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();

    MetricSeries {
        total: metrics_service::total(&values),
        average: metrics_service::average(&values),
        points,
    }
}
