use crate::errors::CoreError;
use crate::models::fetch::{FetchState, FetchTicket};
use crate::models::preset::DateRangePreset;

/// State of one analytics query, keyed by the active date-range filter.
///
/// Each `begin` issues a ticket with a fresh sequence number. A response is
/// applied only if its ticket is the most recently issued one and its key is
/// still the active filter; anything else is a superseded response and is
/// dropped. Nothing is aborted in flight.
#[derive(Debug, Clone)]
pub struct QueryCell<T> {
    name: &'static str,
    active_key: Option<DateRangePreset>,
    latest_seq: u64,
    state: FetchState<T>,
}

impl<T> QueryCell<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            active_key: None,
            latest_seq: 0,
            state: FetchState::Idle,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn active_key(&self) -> Option<DateRangePreset> {
        self.active_key
    }

    /// Switch to a new filter.
    ///
    /// With no filter the query goes `Idle` and no request should be made,
    /// so `None` is returned. Otherwise the state becomes `Loading` and the
    /// ticket for the request to issue is returned.
    pub fn begin(&mut self, key: Option<DateRangePreset>) -> Option<FetchTicket> {
        self.latest_seq += 1;
        self.active_key = key;

        let Some(key) = key else {
            self.state = FetchState::Idle;
            tracing::debug!(query = self.name, "no date range selected; fetch skipped");
            return None;
        };

        self.state = FetchState::Loading;
        tracing::debug!(query = self.name, preset = %key, seq = self.latest_seq, "fetch issued");
        Some(FetchTicket {
            key,
            seq: self.latest_seq,
        })
    }

    /// Whether a response carrying `ticket` may still be applied.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.latest_seq && self.active_key == Some(ticket.key)
    }

    /// Apply a response. Returns `false` (and leaves the state untouched)
    /// when the ticket has been superseded.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, CoreError>) -> bool {
        if !self.is_current(&ticket) {
            tracing::info!(
                query = self.name,
                preset = %ticket.key,
                seq = ticket.seq,
                latest = self.latest_seq,
                "discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => {
                tracing::debug!(query = self.name, preset = %ticket.key, "response applied");
                FetchState::Loaded(data)
            }
            Err(e) => {
                tracing::warn!(query = self.name, preset = %ticket.key, error = %e, "fetch failed");
                FetchState::Error(e.to_string())
            }
        };
        true
    }
}
