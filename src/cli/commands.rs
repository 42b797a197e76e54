//! CLI commands and argument parsing

use crate::controller::FetchOrdering;
use crate::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Paginated viewer for the SpaceX launch-data API
#[derive(Parser, Debug)]
#[command(name = "launch-viewer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Launch query endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Launches per page
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Policy for overlapping fetches
    #[arg(long, global = true)]
    pub ordering: Option<OrderingArg>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: FormatArg,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print one page of launches
    Page {
        /// Page to fetch (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Page through launches interactively
    /// (n = next, p = previous, r = retry, <number> = go to page, q = quit)
    Browse {
        /// Page to start on
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Human-readable output
    Pretty,
    /// JSON output (one object per page)
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Overlapping fetch policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderingArg {
    /// Only the newest request may update the view
    LatestWins,
    /// Whichever response arrives last is shown
    LastResolvedWins,
}

impl From<OrderingArg> for FetchOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::LatestWins => FetchOrdering::LatestWins,
            OrderingArg::LastResolvedWins => FetchOrdering::LastResolvedWins,
        }
    }
}

/// A line typed during `browse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Retry,
    Page(u32),
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Ok(Self::Next),
            "p" | "prev" | "previous" => Ok(Self::Prev),
            "r" | "retry" => Ok(Self::Retry),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => other
                .parse::<u32>()
                .map(Self::Page)
                .map_err(|_| format!("unknown command '{other}' (n, p, r, <page>, q)")),
        }
    }
}
