use serde::{Deserialize, Serialize};

/// One spending category in the expense breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Category name as shown to the user (e.g., "Groceries")
    pub name: String,

    /// Amount spent in this category
    pub value: f64,

    /// Share of total spending, pre-computed upstream: value / totalSpent × 100
    pub percentage: f64,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, value: f64, percentage: f64) -> Self {
        Self {
            name: name.into(),
            value,
            percentage,
        }
    }
}

/// Payload of the expense breakdown endpoint.
///
/// Entries are rendered in the order the API supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    #[serde(default)]
    pub breakdown: Vec<CategoryEntry>,

    #[serde(default)]
    pub total_spent: f64,
}

impl CategoryBreakdown {
    /// Sum of all entry values. Expected to equal `total_spent`.
    pub fn entries_total(&self) -> f64 {
        self.breakdown.iter().map(|e| e.value).sum()
    }
}
