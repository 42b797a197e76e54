//! Launch and paged result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single launch record
///
/// Only the fields the viewer shows are decoded; everything else the
/// provider sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    /// Numeric ids are kept as their decimal text
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "date_utc")]
    pub date: DateTime<Utc>,
    /// `null` (upcoming launches) decodes as `false`
    #[serde(rename = "success", default, deserialize_with = "null_as_false")]
    pub succeeded: bool,
    #[serde(default)]
    pub details: Option<String>,
}

fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Number(id) => id.to_string(),
    })
}

/// Paginated response envelope as sent by the provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPage {
    pub docs: Vec<Launch>,
    pub total_docs: u64,
    #[serde(default)]
    pub offset: u64,
    pub limit: u32,
    pub total_pages: u32,
    pub page: u32,
    #[serde(default)]
    pub paging_counter: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}

/// One page of launches with its navigation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub items: Vec<Launch>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}

impl QueryResult {
    /// Whether the provider's paging fields agree with each other.
    ///
    /// Results are never rejected on this basis; it only feeds logging.
    pub fn is_consistent(&self) -> bool {
        let page_in_range =
            self.total_pages == 0 || (1..=self.total_pages).contains(&self.current_page);
        page_in_range
            && self.has_prev == self.prev_page.is_some()
            && self.has_next == self.next_page.is_some()
    }

    /// True when the page holds no launches
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<LaunchPage> for QueryResult {
    fn from(page: LaunchPage) -> Self {
        Self {
            items: page.docs,
            total_items: page.total_docs,
            total_pages: page.total_pages,
            current_page: page.page,
            has_prev: page.has_prev_page,
            has_next: page.has_next_page,
            prev_page: page.prev_page,
            next_page: page.next_page,
        }
    }
}
