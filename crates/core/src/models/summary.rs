use serde::{Deserialize, Serialize};

/// Point-in-time aggregate returned by the summary endpoint.
///
/// Replaced wholesale on every fetch, never merged with a previous one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySnapshot {
    pub available_balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub saving_rate: SavingRate,
    pub percentage_change: PercentageChange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingRate {
    /// Share of income saved, in percent
    pub percentage: f64,

    /// Share of income spent, in percent
    pub expense_ratio: f64,
}

/// Change relative to the previous equivalent period, in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentageChange {
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
}
