//! Pagination controls rendered from a page window and its page sequence.

use crate::pagination::{PageToken, PageWindow};
use crate::tui::styles::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Styling configuration for pagination
#[derive(Debug, Clone)]
pub struct PaginationStyling {
    /// Style for current page
    pub current_page_style: Style,

    /// Style for other pages
    pub page_style: Style,

    /// Style for navigation arrows
    pub navigation_style: Style,

    /// Style for disabled arrows and ellipses
    pub disabled_style: Style,

    /// Style for the summary text
    pub text_style: Style,
}

impl PaginationStyling {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            current_page_style: Style::default()
                .bg(theme.primary)
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
            page_style: Style::default().fg(theme.text),
            navigation_style: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            disabled_style: theme.dim_style(),
            text_style: theme.dim_style(),
        }
    }
}

/// Navigation line: `‹  1  …  4  5  6  …  10  ›`
///
/// Returns an empty line when everything fits on one page.
pub fn page_buttons(
    window: &PageWindow,
    pages: &[PageToken],
    styling: &PaginationStyling,
) -> Line<'static> {
    if !window.needs_pagination() {
        return Line::default();
    }

    let arrow_style = |enabled: bool| {
        if enabled {
            styling.navigation_style
        } else {
            styling.disabled_style
        }
    };

    let mut spans = vec![Span::styled("‹ ", arrow_style(window.has_previous()))];
    for token in pages {
        let style = match token {
            PageToken::Page(page) if *page == window.current_page => styling.current_page_style,
            PageToken::Page(_) => styling.page_style,
            PageToken::Ellipsis => styling.disabled_style,
        };
        spans.push(Span::styled(format!(" {} ", token), style));
    }
    spans.push(Span::styled(" ›", arrow_style(window.has_next())));

    Line::from(spans)
}

/// Summary line: `Page 2 of 3 (11-20 of 23 items)`
pub fn summary(window: &PageWindow, total_items: usize, styling: &PaginationStyling) -> Line<'static> {
    let text = if total_items == 0 {
        "No items found".to_string()
    } else {
        format!(
            "Page {} of {} ({}-{} of {} items)",
            window.current_page,
            window.total_pages,
            window.start_index + 1,
            window.end_index,
            total_items
        )
    };
    Line::from(Span::styled(text, styling.text_style))
}
