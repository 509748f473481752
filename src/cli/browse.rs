use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use crate::config::Config;
use crate::dashboard::{fixtures, source, CollectionKind, ListView, Record};
use crate::tui::{self, App};

/// Page through a collection interactively
#[derive(Args)]
pub struct BrowseCommand {
    /// Collection to browse
    #[arg(value_enum)]
    pub collection: CollectionKind,

    /// Rows per page (overrides the configuration)
    #[arg(short = 'n', long = "per-page")]
    pub per_page: Option<usize>,
}

impl BrowseCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        debug!("Executing browse command for {}", self.collection);

        match self.collection {
            CollectionKind::Employees => self.browse(config, fixtures::employees).await,
            CollectionKind::Invitations => self.browse(config, fixtures::invitations).await,
            CollectionKind::Knowledge => self.browse(config, fixtures::knowledge_entries).await,
            CollectionKind::Sessions => self.browse(config, fixtures::chat_sessions).await,
        }
    }

    async fn browse<T: Record>(&self, config: &Config, fixtures: fn() -> Vec<T>) -> Result<()> {
        // Load before touching the terminal so fetch errors print normally
        let source = source::open_source(config, self.collection, fixtures);
        info!("Fetching {} from {}", self.collection, source.describe());
        let items = source.fetch_collection().await?;

        let view = ListView::new(items, self.per_page.unwrap_or(config.items_per_page))?
            .with_max_visible_pages(config.max_visible_pages);
        let mut app = App::new(self.collection.title(), view);

        tui::run(&mut app).await
    }
}
