//! Pagination controller
//!
//! Owns the current [`PaginationParams`] and [`FetchState`] and re-fetches
//! whenever the page changes or a retry is requested.
//!
//! # Overview
//!
//! Operations return immediately; each one spawns a tokio task that runs the
//! provider query and applies the outcome when it settles. Observers follow
//! along through two channels:
//!
//! - [`PaginationController::subscribe`] - a `watch` receiver holding the
//!   latest [`ControllerSnapshot`]
//! - [`PaginationController::transitions`] - a `broadcast` receiver yielding
//!   every [`FetchState`] transition in order
//!
//! Overlapping fetches are not cancelled. Which response wins is decided by
//! the configured [`FetchOrdering`].

mod types;

pub use types::{ControllerSnapshot, FetchOrdering, FetchState};

use crate::error::{FetchError, Result};
use crate::launch::QueryResult;
use crate::pagination::{PaginationParams, QueryRequest};
use crate::provider::LaunchProvider;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

const TRANSITION_CAPACITY: usize = 64;

struct Shared {
    provider: Arc<dyn LaunchProvider>,
    ordering: FetchOrdering,
    snapshot: watch::Sender<ControllerSnapshot>,
    transitions: broadcast::Sender<FetchState>,
    /// Ticket of the most recently issued fetch; only touched while the
    /// snapshot is locked by `send_modify`
    latest_ticket: AtomicU64,
}

impl Shared {
    /// Optionally move to `page`, then take a ticket and enter Loading.
    ///
    /// Everything happens under the snapshot lock, so tickets, params and
    /// broadcast transitions stay in the same order as snapshot changes.
    fn begin(&self, page: Option<u32>) -> (u64, PaginationParams) {
        let mut issued = (0, PaginationParams::default());
        self.snapshot.send_modify(|snapshot| {
            if let Some(page) = page {
                snapshot.params = snapshot.params.with_page(page);
            }
            let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
            snapshot.state = FetchState::Loading;
            snapshot.in_flight += 1;
            snapshot.version += 1;
            let _ = self.transitions.send(FetchState::Loading);
            issued = (ticket, snapshot.params);
        });
        issued
    }

    fn settle(&self, ticket: u64, params: PaginationParams, outcome: Result<QueryResult>) {
        let state = match outcome {
            Ok(result) => {
                debug!(
                    "Fetched page {} ({} launches, {} pages total)",
                    result.current_page,
                    result.items.len(),
                    result.total_pages
                );
                FetchState::Loaded(result)
            }
            Err(err) => {
                warn!("Fetch for page {} failed: {}", params.page(), err);
                FetchState::Failed(FetchError::from(err))
            }
        };

        let mut applied = false;
        self.snapshot.send_modify(|snapshot| {
            let superseded = ticket != self.latest_ticket.load(Ordering::SeqCst);
            applied = !(superseded && self.ordering == FetchOrdering::LatestWins);

            snapshot.in_flight = snapshot.in_flight.saturating_sub(1);
            if applied {
                snapshot.state = state.clone();
                let _ = self.transitions.send(state.clone());
            }
            snapshot.version += 1;
        });

        if !applied {
            debug!("Discarding superseded response for page {}", params.page());
        }
    }
}

/// Paginated view state over a [`LaunchProvider`]
///
/// Cloning yields another handle to the same controller.
#[derive(Clone)]
pub struct PaginationController {
    shared: Arc<Shared>,
}

impl PaginationController {
    /// Create an idle controller. Nothing is fetched until [`start`](Self::start),
    /// [`set_page`](Self::set_page) or [`retry`](Self::retry) is called.
    pub fn new(
        provider: Arc<dyn LaunchProvider>,
        params: PaginationParams,
        ordering: FetchOrdering,
    ) -> Self {
        let (snapshot, _) = watch::channel(ControllerSnapshot::new(params));
        let (transitions, _) = broadcast::channel(TRANSITION_CAPACITY);

        Self {
            shared: Arc::new(Shared {
                provider,
                ordering,
                snapshot,
                transitions,
                latest_ticket: AtomicU64::new(0),
            }),
        }
    }

    /// Issue the first fetch for the initial parameters.
    ///
    /// Must be called from within a tokio runtime, like every operation that
    /// fetches.
    pub fn start(&self) {
        info!("Loading launches");
        self.fetch(None);
    }

    /// Move to `new_page` and fetch it.
    ///
    /// The page is not validated; callers derive it from the last
    /// [`QueryResult`]'s navigation fields.
    pub fn set_page(&self, new_page: u32) {
        info!("Switching to page {}", new_page);
        self.fetch(Some(new_page));
    }

    /// Fetch the current parameters again. Allowed in any state.
    pub fn retry(&self) {
        info!("Retrying page {}", self.params().page());
        self.fetch(None);
    }

    fn fetch(&self, page: Option<u32>) {
        let (ticket, params) = self.shared.begin(page);
        let shared = Arc::clone(&self.shared);

        tokio::spawn(async move {
            let request = QueryRequest::unfiltered(params);
            let outcome = shared.provider.query(&request).await;
            shared.settle(ticket, params, outcome);
        });
    }

    /// Current parameters
    pub fn params(&self) -> PaginationParams {
        self.shared.snapshot.borrow().params
    }

    /// Current fetch state
    pub fn state(&self) -> FetchState {
        self.shared.snapshot.borrow().state.clone()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> ControllerSnapshot {
        self.shared.snapshot.borrow().clone()
    }

    /// Policy applied to overlapping fetches
    pub fn ordering(&self) -> FetchOrdering {
        self.shared.ordering
    }

    /// Receiver that always holds the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.shared.snapshot.subscribe()
    }

    /// Receiver for every state transition from now on
    pub fn transitions(&self) -> broadcast::Receiver<FetchState> {
        self.shared.transitions.subscribe()
    }

    /// Wait until no fetch is in flight and return the snapshot at that point
    pub async fn settled(&self) -> ControllerSnapshot {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|snapshot| snapshot.in_flight == 0).await {
            Ok(snapshot) => snapshot.clone(),
            // The sender lives in `self`, so the channel cannot close here
            Err(_) => self.snapshot(),
        };
        settled
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("ordering", &self.shared.ordering)
            .field("snapshot", &*self.shared.snapshot.borrow())
            .finish_non_exhaustive()
    }
}
