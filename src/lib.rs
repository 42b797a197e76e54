//! # Launch Viewer
//!
//! A paginated client for the public SpaceX launch-data API.
//!
//! ## Features
//!
//! - **Offset Pagination**: page/limit parameters with a derived offset
//! - **Fetch Lifecycle**: Idle, Loading, Loaded and Failed states
//! - **Observers**: `watch` snapshots and `broadcast` transitions
//! - **Overlap Policy**: latest-wins sequencing or last-resolved-wins
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use launch_viewer::{
//!     FetchOrdering, HttpLaunchProvider, PaginationController, PaginationParams, Result,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let provider = Arc::new(HttpLaunchProvider::public()?);
//!     let controller =
//!         PaginationController::new(provider, PaginationParams::first(10), FetchOrdering::default());
//!
//!     controller.start();
//!     let snapshot = controller.settled().await;
//!     if let Some(page) = snapshot.state.result() {
//!         println!("Page {} of {}", page.current_page, page.total_pages);
//!     }
//!
//!     controller.set_page(2);
//!     controller.settled().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                PaginationController                  │
//! │  start()   set_page(n)   retry()   subscribe()       │
//! └──────────────────────────────────────────────────────┘
//!                            │
//! ┌─────────────┬────────────┴─────┬─────────────────────┐
//! │ Pagination  │  LaunchProvider  │  Render             │
//! ├─────────────┼──────────────────┼─────────────────────┤
//! │ page/limit  │  POST query      │  Page X of Y        │
//! │ offset      │  decode page     │  prev/next targets  │
//! └─────────────┴──────────────────┴─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pagination parameters and query body
pub mod pagination;

/// Launch records and paged results
pub mod launch;

/// HTTP client
pub mod http;

/// Launch data providers
pub mod provider;

/// Pagination controller and fetch lifecycle
pub mod controller;

/// Text and JSON presentation
pub mod render;

/// Viewer configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use controller::{ControllerSnapshot, FetchOrdering, FetchState, PaginationController};
pub use error::{Error, FetchError, Result};
pub use launch::{Launch, QueryResult};
pub use pagination::{PaginationParams, QueryRequest};
pub use provider::{HttpLaunchProvider, LaunchProvider};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
