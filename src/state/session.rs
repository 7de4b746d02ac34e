//! Session state controller: the one place the analysis workflow changes state.

use std::cell::{Cell, RefCell};

use crate::api::AnalysisApi;
use crate::clipboard::Clipboard;
use crate::error::ErrorKind;
use crate::state::cell::StateCell;
use crate::types::AnalysisResult;

/// Current state of the analysis workflow. Exactly one per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight. The last successful result stays visible.
    Pending { previous: Option<AnalysisResult> },
    /// The last request succeeded.
    Ready(AnalysisResult),
    /// The last request failed. Any earlier result is gone.
    Failed(ErrorKind),
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending { .. })
    }

    /// The result the presentation layer should show, if any.
    pub fn visible_result(&self) -> Option<&AnalysisResult> {
        match self {
            SessionState::Ready(result) => Some(result),
            SessionState::Pending { previous } => previous.as_ref(),
            SessionState::Idle | SessionState::Failed(_) => None,
        }
    }

    /// Copy acts only on a settled result, not on one kept visible while
    /// `Pending`.
    pub fn can_copy(&self) -> bool {
        matches!(self, SessionState::Ready(_))
    }

    pub fn error(&self) -> Option<&ErrorKind> {
        match self {
            SessionState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Proof that `begin` moved the session into `Pending`.
/// Only the ticket of the current generation may resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// What happened when the user asked to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Not in `Ready`; nothing was written.
    NothingToCopy,
    /// The write failed. Reported as a notice; the session is untouched.
    Failed(ErrorKind),
}

/// Owns the [`SessionState`] and drives every transition.
///
/// The `Pending` guard is the only concurrency control: while a request is
/// in flight, further analyze/regenerate triggers are ignored, so at most
/// one outbound call ever races to set the final state.
pub struct SessionController<A, S = RefCell<SessionState>> {
    api: A,
    state: S,
    generation: Cell<u64>,
}

impl<A: AnalysisApi> SessionController<A, RefCell<SessionState>> {
    /// Controller over plain in-memory state.
    pub fn detached(api: A) -> Self {
        Self::new(api, RefCell::new(SessionState::Idle))
    }
}

impl<A, S> SessionController<A, S>
where
    A: AnalysisApi,
    S: StateCell<SessionState>,
{
    pub fn new(api: A, state: S) -> Self {
        Self {
            api,
            state,
            generation: Cell::new(0),
        }
    }

    /// Current state. A cell that has gone away reads as `Idle`.
    pub fn state(&self) -> SessionState {
        self.state.snapshot().unwrap_or_default()
    }

    pub fn is_pending(&self) -> bool {
        self.state.snapshot().is_some_and(|state| state.is_pending())
    }

    /// Enter `Pending`, clearing any displayed error. Returns `None` if a
    /// request is already in flight or the state cell is gone.
    pub fn begin(&self) -> Option<RequestTicket> {
        let Some(current) = self.state.snapshot() else {
            log::info!("Session state is gone, ignoring trigger");
            return None;
        };
        let previous = match current {
            SessionState::Pending { .. } => {
                log::info!("Analysis already in flight, ignoring trigger");
                return None;
            }
            SessionState::Ready(result) => Some(result),
            SessionState::Idle | SessionState::Failed(_) => None,
        };

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        if !self.state.replace(SessionState::Pending { previous }) {
            return None;
        }
        log::debug!("Session -> Pending (request {})", generation);
        Some(RequestTicket { generation })
    }

    /// Settle a request. Late or stale outcomes, and outcomes whose state
    /// cell has gone away, are discarded and `false` is returned.
    pub fn resolve(
        &self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult, ErrorKind>,
    ) -> bool {
        if ticket.generation != self.generation.get() || !self.is_pending() {
            log::info!(
                "Discarding outcome of request {} (current {})",
                ticket.generation,
                self.generation.get()
            );
            return false;
        }

        let next = match outcome {
            Ok(result) => {
                log::debug!(
                    "Session -> Ready ({} files, +{} -{})",
                    result.files_changed.len(),
                    result.insertions,
                    result.deletions
                );
                SessionState::Ready(result)
            }
            Err(err) => {
                log::debug!("Session -> Failed: {}", err);
                SessionState::Failed(err)
            }
        };
        if !self.state.replace(next) {
            log::info!("Session state is gone, dropping outcome of request {}", ticket.generation);
            return false;
        }
        true
    }

    /// Analyze staged changes. Returns `false` when ignored by the `Pending` guard.
    pub async fn on_analyze(&self) -> bool {
        let Some(ticket) = self.begin() else {
            return false;
        };
        let outcome = self.api.analyze().await;
        self.resolve(ticket, outcome);
        true
    }

    /// Same transition and same call as [`on_analyze`](Self::on_analyze).
    pub async fn on_regenerate(&self) -> bool {
        self.on_analyze().await
    }

    /// Copy the current message verbatim. Never changes the session state.
    pub async fn on_copy<C: Clipboard>(&self, clipboard: &C) -> CopyOutcome {
        let Some(SessionState::Ready(result)) = self.state.snapshot() else {
            return CopyOutcome::NothingToCopy;
        };
        match clipboard.write_text(&result.message).await {
            Ok(()) => CopyOutcome::Copied,
            Err(err) => {
                log::warn!("Clipboard write failed: {}", err);
                CopyOutcome::Failed(err)
            }
        }
    }
}
