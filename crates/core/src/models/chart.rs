use serde::{Deserialize, Serialize};

/// A single labelled value on a chart's horizontal axis.
///
/// The core generates these and the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Short month label (e.g., "Jan")
    pub label: String,

    /// Raw, unformatted value
    pub value: f64,
}

/// A derived per-period series together with its aggregates.
///
/// Points are aligned 1:1 with the period records they were derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub points: Vec<MetricPoint>,

    /// Sum of all point values (0 for an empty series)
    pub total: f64,

    /// Arithmetic mean of all point values (0 for an empty series)
    pub average: f64,
}

impl MetricSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// One bar pair of the income vs expenses chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub label: String,
    pub income: f64,
    pub expenses: f64,
}

/// Whether the net profit over a range is a gain or a loss.
/// Drives the colour of the headline figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetTrend {
    Positive,
    Negative,
}

/// View-model for the income vs expenses comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeExpenseComparison {
    pub points: Vec<ComparisonPoint>,
    pub total_income: f64,
    pub total_expenses: f64,

    /// total_income - total_expenses
    pub net_profit: f64,

    pub trend: NetTrend,
}

impl IncomeExpenseComparison {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One slice of the spending-by-category chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub amount: f64,

    /// Share of total spending, in percent (0–100)
    pub percentage: f64,

    /// Colour assigned by ordinal position in the palette
    pub color: String,
}

/// View-model for the spending-by-category chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChart {
    pub slices: Vec<CategorySlice>,
    pub total_spent: f64,
}

impl CategoryChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
