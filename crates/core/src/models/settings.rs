use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Default category colours: the five chart CSS variables of the theme.
pub const DEFAULT_PALETTE: [&str; 5] = [
    "var(--color-chart-1)",
    "var(--color-chart-2)",
    "var(--color-chart-3)",
    "var(--color-chart-4)",
    "var(--color-chart-5)",
];

/// User-facing dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The currency in which all amounts are displayed (e.g., "USD", "EUR").
    pub display_currency: String,

    /// Base URL of the backend API, including its base path.
    pub api_base_url: String,

    /// Colours assigned to spending categories by ordinal position.
    pub palette: Vec<String>,
}

impl Settings {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.palette.is_empty() {
            return Err(CoreError::ValidationError(
                "Category palette must contain at least one colour".into(),
            ));
        }
        if self.display_currency.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Display currency must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: "USD".to_string(),
            api_base_url: "http://localhost:8000/api".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}
