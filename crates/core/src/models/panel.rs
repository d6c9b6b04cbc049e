use serde::Serialize;

/// What a chart card shows below its header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PanelBody<V> {
    /// Placeholder skeleton while a fetch is in flight
    Loading,
    /// Fetch resolved with no records (or nothing was requested)
    Empty { title: String, description: String },
    /// Fetch failed
    Error { message: String },
    /// Fetch resolved with at least one record
    Populated(V),
}

impl<V> PanelBody<V> {
    pub fn is_populated(&self) -> bool {
        matches!(self, PanelBody::Populated(_))
    }
}

/// A chart card: fixed header copy plus a state-dependent body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel<V> {
    pub title: String,
    pub description: String,
    pub body: PanelBody<V>,
}

/// Populated body of a chart card: the view-model plus the formatted
/// headline figure shown next to the title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartContent<V> {
    pub headline_label: String,
    pub headline_value: String,
    pub chart: V,
}

/// Which summary metric a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    Balance,
    Income,
    Expenses,
    Savings,
}

/// One of the four summary cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub title: String,
    pub card_type: CardType,

    /// Raw value; `None` while loading or without a snapshot
    pub value: Option<f64>,

    /// `value` formatted for display (currency, or percent for savings)
    pub display_value: Option<String>,

    /// Change against the previous period, in percent
    pub percentage_change: Option<f64>,

    /// `percentage_change` formatted with its sign, e.g. "+12.5%"
    pub display_change: Option<String>,

    /// Only set on the savings card
    pub expense_ratio: Option<f64>,

    pub is_loading: bool,

    /// Reason the summary fetch failed; `None` unless it failed
    pub error: Option<String>,
}
