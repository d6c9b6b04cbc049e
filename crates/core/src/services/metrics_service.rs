//! Pure metric derivations over a period series.
//!
//! None of these mutate their input or keep state between calls, so the
//! order in which charts derive their metrics does not matter. Every
//! aggregate over an empty series is 0, never NaN.

use crate::models::period::PeriodRecord;

/// Net cash flow of one period. May be negative.
pub fn cash_flow(period: &PeriodRecord) -> f64 {
    period.income - period.expenses
}

/// Savings of one period: cash flow clamped at zero.
/// Unlike cash flow, savings are never shown negative.
pub fn savings(period: &PeriodRecord) -> f64 {
    (period.income - period.expenses).max(0.0)
}

/// Per-period cash flow, aligned with `series`.
pub fn cash_flow_values(series: &[PeriodRecord]) -> Vec<f64> {
    series.iter().map(cash_flow).collect()
}

/// Per-period savings, aligned with `series`.
pub fn savings_values(series: &[PeriodRecord]) -> Vec<f64> {
    series.iter().map(savings).collect()
}

/// Sum of values; 0 for an empty slice.
pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; 0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        total(values) / values.len() as f64
    }
}

pub fn total_cash_flow(series: &[PeriodRecord]) -> f64 {
    total(&cash_flow_values(series))
}

pub fn average_cash_flow(series: &[PeriodRecord]) -> f64 {
    average(&cash_flow_values(series))
}

pub fn total_savings(series: &[PeriodRecord]) -> f64 {
    total(&savings_values(series))
}

pub fn average_savings(series: &[PeriodRecord]) -> f64 {
    average(&savings_values(series))
}

/// Income and expense totals, each reduced independently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncomeExpenseTotals {
    pub income: f64,
    pub expenses: f64,
}

impl IncomeExpenseTotals {
    /// income - expenses, computed from the totals.
    pub fn net_profit(&self) -> f64 {
        self.income - self.expenses
    }
}

pub fn income_expense_totals(series: &[PeriodRecord]) -> IncomeExpenseTotals {
    series
        .iter()
        .fold(IncomeExpenseTotals::default(), |acc, p| IncomeExpenseTotals {
            income: acc.income + p.income,
            expenses: acc.expenses + p.expenses,
        })
}

/// sum(income) - sum(expenses) over the whole series.
pub fn net_profit(series: &[PeriodRecord]) -> f64 {
    income_expense_totals(series).net_profit()
}
