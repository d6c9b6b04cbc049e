use super::preset::DateRangePreset;

/// Status of one analytics query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    /// No date range selected; nothing was requested
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The request failed; carries a user-presentable reason
    Error(String),
    /// The request succeeded
    Loaded(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Handle for one issued request. Must be handed back when the response
/// arrives so the query can tell whether the response is still wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: DateRangePreset,
    pub seq: u64,
}
