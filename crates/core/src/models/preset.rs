use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A named, predefined date range. Selects which period records the
/// analytics endpoints return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRangePreset {
    #[serde(rename = "last30Days")]
    Last30Days,
    LastMonth,
    #[serde(rename = "last3Months")]
    Last3Months,
    #[serde(rename = "last6Months")]
    Last6Months,
    LastYear,
    ThisMonth,
    ThisYear,
    AllTime,
}

impl DateRangePreset {
    pub const ALL: [DateRangePreset; 8] = [
        DateRangePreset::Last30Days,
        DateRangePreset::LastMonth,
        DateRangePreset::Last3Months,
        DateRangePreset::Last6Months,
        DateRangePreset::LastYear,
        DateRangePreset::ThisMonth,
        DateRangePreset::ThisYear,
        DateRangePreset::AllTime,
    ];

    /// Value sent as the `preset` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            DateRangePreset::Last30Days => "last30Days",
            DateRangePreset::LastMonth => "lastMonth",
            DateRangePreset::Last3Months => "last3Months",
            DateRangePreset::Last6Months => "last6Months",
            DateRangePreset::LastYear => "lastYear",
            DateRangePreset::ThisMonth => "thisMonth",
            DateRangePreset::ThisYear => "thisYear",
            DateRangePreset::AllTime => "allTime",
        }
    }

    /// Human-readable label for range selectors.
    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::Last30Days => "Last 30 Days",
            DateRangePreset::LastMonth => "Last Month",
            DateRangePreset::Last3Months => "Last 3 Months",
            DateRangePreset::Last6Months => "Last 6 Months",
            DateRangePreset::LastYear => "Last Year",
            DateRangePreset::ThisMonth => "This Month",
            DateRangePreset::ThisYear => "This Year",
            DateRangePreset::AllTime => "All Time",
        }
    }
}

impl std::fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl std::str::FromStr for DateRangePreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_query_value() == s)
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown date range preset: {s}")))
    }
}
