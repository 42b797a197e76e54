//! Controller types
//!
//! Fetch lifecycle, ordering policy and the snapshot published to observers.

use crate::error::FetchError;
use crate::launch::QueryResult;
use crate::pagination::PaginationParams;
use serde::{Deserialize, Serialize};

/// Lifecycle of the controller's data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last applied request succeeded
    Loaded(QueryResult),
    /// The last applied request failed; no stale result is kept
    Failed(FetchError),
}

impl FetchState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The loaded result, if any
    pub fn result(&self) -> Option<&QueryResult> {
        match self {
            Self::Loaded(result) => Some(result),
            _ => None,
        }
    }

    /// The failure, if any
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short tag for logs and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

/// How responses of overlapping fetches are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchOrdering {
    /// Only the most recently issued fetch may update the state;
    /// responses to superseded fetches are dropped.
    #[default]
    LatestWins,
    /// Every response is applied as it settles, so a slow stale response
    /// can overwrite a newer one.
    LastResolvedWins,
}

/// Point-in-time view of the controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerSnapshot {
    /// Current pagination parameters
    pub params: PaginationParams,
    /// Current fetch state
    pub state: FetchState,
    /// Requests issued but not yet settled
    pub in_flight: usize,
    /// Bumped on every change
    pub version: u64,
}

impl ControllerSnapshot {
    pub fn new(params: PaginationParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }
}
