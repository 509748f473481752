use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{BrowseCommand, ListCommand};
use crate::config::Config;

/// Kalamna - admin console for the support chatbot dashboard
#[derive(Parser)]
#[command(
    name = "kalamna",
    version,
    about = "Admin console for the Kalamna support chatbot dashboard",
    long_about = r#"Browse the Kalamna dashboard lists (employees, invitations, knowledge base,
chat sessions) from the terminal.

Examples:
  kalamna list knowledge                      # First page of the knowledge base
  kalamna list sessions --page 3 --per-page 5 # Jump to a page
  kalamna list knowledge --kind faq --search refund
  kalamna browse employees                    # Interactive browser"#
)]
pub struct Cli {
    /// Configuration file (defaults to ./.kalamna.json, ./kalamna.json, then the user config dir)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of a collection
    List(ListCommand),

    /// Page through a collection interactively
    Browse(BrowseCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        let config = Config::init(self.config.as_deref()).await?;
        debug!("Configuration initialized");

        match self.command {
            Commands::List(list_cmd) => list_cmd.execute(&config).await,
            Commands::Browse(browse_cmd) => {
                info!("Starting interactive mode");
                browse_cmd.execute(&config).await?;
                info!("Application finished");
                Ok(())
            }
        }
    }
}
