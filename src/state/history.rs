//! Lazily loaded history of past results.
//!
//! Independent of the session: a history failure never touches the analysis
//! workflow and vice versa. Entries are kept in the order the backend sent
//! them; nothing here sorts.

use std::cell::RefCell;
use std::num::NonZeroU32;

use crate::api::AnalysisApi;
use crate::error::ErrorKind;
use crate::state::cell::StateCell;
use crate::types::HistoryEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HistoryState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<HistoryEntry>),
    LoadFailed(ErrorKind),
}

impl HistoryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, HistoryState::Loading)
    }
}

pub struct HistoryCache<A, S = RefCell<HistoryState>> {
    api: A,
    state: S,
    limit: NonZeroU32,
}

impl<A: AnalysisApi> HistoryCache<A, RefCell<HistoryState>> {
    pub fn detached(api: A, limit: NonZeroU32) -> Self {
        Self::new(api, RefCell::new(HistoryState::NotLoaded), limit)
    }
}

impl<A, S> HistoryCache<A, S>
where
    A: AnalysisApi,
    S: StateCell<HistoryState>,
{
    pub fn new(api: A, state: S, limit: NonZeroU32) -> Self {
        Self { api, state, limit }
    }

    /// Current state. A cell that has gone away reads as `NotLoaded`.
    pub fn state(&self) -> HistoryState {
        self.state.snapshot().unwrap_or_default()
    }

    /// Panel became visible. Fetches only if nothing is cached yet (or the
    /// last attempt failed). Returns whether a fetch ran and its outcome was
    /// stored.
    pub async fn reveal(&self) -> bool {
        self.load(self.limit).await
    }

    /// `NotLoaded | LoadFailed -> Loading -> Loaded | LoadFailed`.
    /// A successful load is never repeated; use [`reload`](Self::reload).
    pub async fn load(&self, limit: NonZeroU32) -> bool {
        match self.state.snapshot() {
            Some(HistoryState::NotLoaded | HistoryState::LoadFailed(_)) => self.fetch(limit).await,
            Some(HistoryState::Loading | HistoryState::Loaded(_)) | None => false,
        }
    }

    /// Explicit refresh. Ignored while a load is in flight.
    pub async fn reload(&self) -> bool {
        match self.state.snapshot() {
            Some(state) if !state.is_loading() => {}
            _ => return false,
        }
        self.fetch(self.limit).await
    }

    async fn fetch(&self, limit: NonZeroU32) -> bool {
        if !self.state.replace(HistoryState::Loading) {
            return false;
        }
        let next = match self.api.fetch_history(limit).await {
            Ok(entries) => {
                log::debug!("Loaded {} history entries", entries.len());
                HistoryState::Loaded(entries)
            }
            Err(err) => {
                log::warn!("Failed to fetch history: {}", err);
                HistoryState::LoadFailed(err)
            }
        };
        let stored = self.state.replace(next);
        if !stored {
            log::info!("History panel is gone, dropping fetched entries");
        }
        stored
    }
}
