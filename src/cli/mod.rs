//! CLI module
//!
//! Command-line interface for browsing launches.
//!
//! # Commands
//!
//! - `page` - Fetch and print a single page
//! - `browse` - Interactive paging on stdin

mod commands;
mod runner;

pub use commands::{BrowseCommand, Cli, Commands, FormatArg, OrderingArg};
pub use runner::Runner;
