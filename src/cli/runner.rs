//! CLI runner - executes commands

use crate::cli::commands::{BrowseCommand, Cli, Commands};
use crate::config::ViewerConfig;
use crate::controller::{FetchState, PaginationController};
use crate::error::{Error, Result};
use crate::pagination::PaginationParams;
use crate::render::{render_snapshot, Navigation, OutputFormat};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!("Using config: {:?}", config);

        let controller = build_controller(&config)?;
        debug!("Overlapping fetches use {:?}", controller.ordering());
        let format = OutputFormat::from(self.cli.format);

        match &self.cli.command {
            Commands::Page { page } => self.page(&controller, *page, format).await,
            Commands::Browse { page } => self.browse(&controller, *page, format).await,
        }
    }

    /// Config file (or defaults) with CLI flags applied
    fn load_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ViewerConfig::from_file(path)?,
            None => ViewerConfig::default(),
        };

        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(limit) = self.cli.limit {
            config.page_size = limit;
        }
        if let Some(ordering) = self.cli.ordering {
            config.ordering = ordering.into();
        }

        config.validate()?;
        Ok(config)
    }

    async fn page(
        &self,
        controller: &PaginationController,
        page: u32,
        format: OutputFormat,
    ) -> Result<()> {
        controller.set_page(page);
        let snapshot = controller.settled().await;
        println!("{}", render_snapshot(&snapshot, format)?);

        match snapshot.state {
            FetchState::Failed(err) => Err(Error::Other(format!("Fetch failed: {err}"))),
            _ => Ok(()),
        }
    }

    async fn browse(
        &self,
        controller: &PaginationController,
        page: u32,
        format: OutputFormat,
    ) -> Result<()> {
        controller.set_page(page);
        println!("{}", render_snapshot(&controller.settled().await, format)?);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<BrowseCommand>() {
                Ok(command) => command,
                Err(message) => {
                    eprintln!("{message}");
                    continue;
                }
            };

            if command == BrowseCommand::Quit {
                break;
            }

            match next_page(&controller.state(), command) {
                Some(target) => controller.set_page(target),
                None if command == BrowseCommand::Retry => controller.retry(),
                None => {
                    eprintln!("Nothing to navigate to");
                    continue;
                }
            }

            println!("{}", render_snapshot(&controller.settled().await, format)?);
        }

        Ok(())
    }
}

/// Build a controller from config
pub fn build_controller(config: &ViewerConfig) -> Result<PaginationController> {
    let provider = config.provider()?;
    Ok(PaginationController::new(
        Arc::new(provider),
        PaginationParams::first(config.page_size),
        config.ordering,
    ))
}

/// Page a browse command leads to from `state`, if any.
///
/// Previous/next only work from a loaded page whose control is enabled;
/// explicit page numbers always go through.
fn next_page(state: &FetchState, command: BrowseCommand) -> Option<u32> {
    match command {
        BrowseCommand::Page(page) => Some(page),
        BrowseCommand::Next | BrowseCommand::Prev => {
            let nav = Navigation::from_result(state.result()?);
            match command {
                BrowseCommand::Next if nav.next_enabled => Some(nav.next_target),
                BrowseCommand::Prev if nav.prev_enabled => Some(nav.prev_target),
                _ => None,
            }
        }
        BrowseCommand::Retry | BrowseCommand::Quit => None,
    }
}
