use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use serde_json::{json, Value};
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::dashboard::{fixtures, source, CollectionKind, ListView, Record, VisiblePage};
use crate::pagination::PageToken;

/// Gap between table columns
const COLUMN_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print one page of a collection
#[derive(Args)]
pub struct ListCommand {
    /// Collection to list
    #[arg(value_enum)]
    pub collection: CollectionKind,

    /// Page to show; out-of-range pages are clamped
    #[arg(short = 'p', long = "page", default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Rows per page (overrides the configuration)
    #[arg(short = 'n', long = "per-page")]
    pub per_page: Option<usize>,

    /// Only show records containing this text
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Only show records of this kind (role, status or entry type)
    #[arg(short = 'k', long = "kind")]
    pub kind: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ListCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        debug!("Executing list command for {}", self.collection);

        let output = match self.collection {
            CollectionKind::Employees => self.render(config, fixtures::employees).await?,
            CollectionKind::Invitations => self.render(config, fixtures::invitations).await?,
            CollectionKind::Knowledge => self.render(config, fixtures::knowledge_entries).await?,
            CollectionKind::Sessions => self.render(config, fixtures::chat_sessions).await?,
        };

        println!("{}", output);
        Ok(())
    }

    async fn render<T: Record>(&self, config: &Config, fixtures: fn() -> Vec<T>) -> Result<String> {
        let source = source::open_source(config, self.collection, fixtures);
        info!("Fetching {} from {}", self.collection, source.describe());
        let items = source.fetch_collection().await?;

        let mut view = self.build_view(items, config)?;
        let page = view.page();
        debug!(
            "Showing page {} of {} ({} items)",
            page.window.current_page, page.window.total_pages, page.total_items
        );

        Ok(match self.format {
            OutputFormat::Text => format_text(self.collection.title(), &page),
            OutputFormat::Json => serde_json::to_string_pretty(&format_json(&page)?)?,
        })
    }

    fn build_view<T: Record>(&self, items: Vec<T>, config: &Config) -> Result<ListView<T>> {
        let per_page = self.per_page.unwrap_or(config.items_per_page);
        let mut view =
            ListView::new(items, per_page)?.with_max_visible_pages(config.max_visible_pages);

        if let Some(kind) = &self.kind {
            let kind = kind.to_lowercase();
            if !T::kinds().iter().any(|known| *known == kind) {
                return Err(anyhow!(
                    "Unknown kind '{}' for {}. Expected one of: {}",
                    kind,
                    self.collection,
                    T::kinds().join(", ")
                ));
            }
            view.set_kind_filter(Some(&kind));
        }
        if let Some(search) = &self.search {
            view.set_search(search);
        }

        view.go_to_page(self.page);
        Ok(view)
    }
}

/// Render a page as an aligned text table with a pagination footer
pub fn format_text<T: Record>(title: &str, page: &VisiblePage<'_, T>) -> String {
    let mut lines = vec![title.to_string()];

    if page.items.is_empty() {
        lines.push("No items found.".to_string());
        return lines.join("\n");
    }

    let headers: Vec<String> = T::headers().iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = page.items.iter().map(|item| item.columns()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    lines.push(format_row(&headers, &widths));
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));

    let window = &page.window;
    lines.push(format!(
        "Page {} of {} ({}-{} of {} items)",
        window.current_page,
        window.total_pages,
        window.start_index + 1,
        window.end_index,
        page.total_items
    ));
    if window.needs_pagination() {
        lines.push(format_page_sequence(&page.pages, window.current_page));
    }

    lines.join("\n")
}

/// Page buttons as text, current page in brackets: `1 … 4 [5] 6 … 10`
pub fn format_page_sequence(pages: &[PageToken], current_page: usize) -> String {
    pages
        .iter()
        .map(|token| match token {
            PageToken::Page(page) if *page == current_page => format!("[{}]", page),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let padding = width - cell.width() + COLUMN_GAP;
            line.push_str(&" ".repeat(padding));
        }
    }
    line
}

/// Page as a JSON document
pub fn format_json<T: Record>(page: &VisiblePage<'_, T>) -> Result<Value> {
    let pages: Vec<Value> = page
        .pages
        .iter()
        .map(|token| match token {
            PageToken::Page(page) => json!(page),
            PageToken::Ellipsis => json!(token.to_string()),
        })
        .collect();

    Ok(json!({
        "page": page.window.current_page,
        "per_page": page.items_per_page,
        "total_items": page.total_items,
        "total_pages": page.window.total_pages,
        "pages": pages,
        "items": serde_json::to_value(&page.items)?,
    }))
}
