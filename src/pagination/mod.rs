//! Pagination module
//!
//! Page/limit/offset parameters and the query body sent to the launch API.
//!
//! # Overview
//!
//! The launch API uses offset pagination driven by a 1-indexed page number.
//! `PaginationParams` keeps the offset derived from `page` and `limit`, and
//! `QueryRequest` wraps the params into the `{ "query": {}, "options": ... }`
//! envelope the provider expects.

mod types;

pub use types::{compute_offset, PaginationParams, QueryRequest, DEFAULT_LIMIT};
