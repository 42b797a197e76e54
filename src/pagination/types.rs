//! Pagination types
//!
//! Defines the parameters sent as `options` and the full request body.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page size used when none is configured
pub const DEFAULT_LIMIT: u32 = 10;

/// Offset of the first record of `page` for pages of `limit` records.
///
/// Page 0 is not a valid page, but callers are not validated; it maps to
/// offset 0.
pub fn compute_offset(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

/// Pagination parameters sent to the provider as `options`
///
/// Field order matches the wire format; serializing the same params twice
/// always produces the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Records to skip before the page starts
    offset: u64,
    /// 1-indexed page number
    page: u32,
    /// Records per page
    limit: u32,
    /// Always true; asks the provider for paging metadata
    pagination: bool,
}

impl PaginationParams {
    /// Create params for `page` with `limit` records per page
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            offset: compute_offset(page, limit),
            page,
            limit,
            pagination: true,
        }
    }

    /// Params for the first page
    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }

    /// Same limit, different page; the offset is recomputed
    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self::new(page, self.limit)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn pagination(&self) -> bool {
        self.pagination
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::first(DEFAULT_LIMIT)
    }
}

/// Body of the launch query: an empty filter plus pagination options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    /// Filter; always empty so the whole collection is paged
    pub query: Map<String, Value>,
    /// Pagination options
    pub options: PaginationParams,
}

impl QueryRequest {
    /// Build the unfiltered query for `params`
    pub fn unfiltered(params: PaginationParams) -> Self {
        Self {
            query: Map::new(),
            options: params,
        }
    }

    /// Serialize to the exact bytes sent on the wire
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
