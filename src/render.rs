//! Presentation of controller snapshots
//!
//! Turns a [`ControllerSnapshot`] into either human-readable text or a JSON
//! document, and works out where the previous/next controls lead.

use crate::controller::{ControllerSnapshot, FetchState};
use crate::error::Result;
use crate::launch::{Launch, QueryResult};
use serde_json::{json, Value};
use std::fmt::Write as _;

/// How snapshots are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable list
    #[default]
    Pretty,
    /// One JSON object per snapshot
    Json,
}

/// Previous/next controls for a loaded page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Page the "previous" control requests
    pub prev_target: u32,
    /// Page the "next" control requests
    pub next_target: u32,
}

impl Navigation {
    /// Controls for `result`; missing targets fall back to the first and
    /// last page respectively.
    pub fn from_result(result: &QueryResult) -> Self {
        Self {
            current_page: result.current_page,
            total_pages: result.total_pages,
            prev_enabled: result.has_prev,
            next_enabled: result.has_next,
            prev_target: result.prev_page.unwrap_or(1),
            next_target: result.next_page.unwrap_or(result.total_pages),
        }
    }

    /// "Page X of Y"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    fn bar(&self) -> String {
        let prev = if self.prev_enabled { "[p] Previous" } else { "    Previous" };
        let next = if self.next_enabled { "[n] Next" } else { "    Next" };
        format!("{prev}  {}  {next}", self.label())
    }
}

/// Render a snapshot in the given format
pub fn render_snapshot(snapshot: &ControllerSnapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(render_pretty(&snapshot.state)),
        OutputFormat::Json => Ok(render_json(snapshot)?.to_string()),
    }
}

/// Human-readable rendering of a fetch state
pub fn render_pretty(state: &FetchState) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => "Loading...".to_string(),
        FetchState::Failed(err) => format!("Error: {}\n[r] Retry", err.message()),
        FetchState::Loaded(result) => {
            let nav = Navigation::from_result(result).bar();
            let mut out = String::new();
            let _ = writeln!(out, "{nav}");
            for launch in &result.items {
                out.push('\n');
                out.push_str(&render_launch(launch));
            }
            let _ = write!(out, "\n{nav}");
            out
        }
    }
}

/// One launch as a text block
pub fn render_launch(launch: &Launch) -> String {
    let status = if launch.succeeded {
        "Successful"
    } else {
        "Failed"
    };
    let mut out = format!(
        "{}\n  Date: {}\n  Status: {}\n",
        launch.name,
        launch.date.format("%Y-%m-%d"),
        status
    );
    if let Some(details) = launch.details.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  {details}");
    }
    out
}

/// JSON rendering of a snapshot
pub fn render_json(snapshot: &ControllerSnapshot) -> Result<Value> {
    let mut value = json!({
        "state": snapshot.state.name(),
        "page": snapshot.params.page(),
        "limit": snapshot.params.limit(),
    });

    match &snapshot.state {
        FetchState::Loaded(result) => {
            let nav = Navigation::from_result(result);
            value["result"] = serde_json::to_value(result)?;
            value["navigation"] = json!({
                "label": nav.label(),
                "prev_enabled": nav.prev_enabled,
                "next_enabled": nav.next_enabled,
                "prev_target": nav.prev_target,
                "next_target": nav.next_target,
            });
        }
        FetchState::Failed(err) => {
            value["error"] = json!(err.message());
        }
        FetchState::Idle | FetchState::Loading => {}
    }

    Ok(value)
}
