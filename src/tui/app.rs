use crate::dashboard::{ListView, Record};
use crate::tui::components::{pagination, PaginationStyling};
use crate::tui::keys::{Action, KeyMap};
use crate::tui::{events::Event, styles::Theme, Frame};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use tracing::debug;

/// Pages skipped by PageUp / PageDown
const JUMP_PAGES: i64 = 5;

/// Input mode of the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a page number
    GoTo(String),
    /// Typing a search query; the filter follows every keystroke
    Search(String),
}

/// Interactive browser over one dashboard collection
pub struct App<T: Record> {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Title shown on the table border
    title: String,

    view: ListView<T>,

    mode: Mode,

    show_help: bool,

    /// Status message to display
    status_message: Option<String>,

    key_map: KeyMap,

    theme: Theme,

    styling: PaginationStyling,
}

impl<T: Record> App<T> {
    /// Create a new application instance
    pub fn new(title: impl Into<String>, view: ListView<T>) -> Self {
        let theme = Theme::default();
        Self {
            should_quit: false,
            title: title.into(),
            view,
            mode: Mode::Normal,
            show_help: false,
            status_message: None,
            key_map: KeyMap::default(),
            styling: PaginationStyling::from_theme(&theme),
            theme,
        }
    }

    pub fn view(&self) -> &ListView<T> {
        &self.view
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Handle incoming events; returns true when the app should exit
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            Event::Resize(width, height) => debug!("Terminal resized to {}x{}", width, height),
            Event::Tick => {}
        }
        Ok(self.should_quit)
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::GoTo(_) => self.handle_goto_key_event(key),
            Mode::Search(_) => self.handle_search_key_event(key),
            Mode::Normal => {
                if let Some(action) = self.key_map.action(&key) {
                    self.status_message = None;
                    self.perform(action);
                }
            }
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = !self.show_help,
            Action::PreviousPage => {
                self.view.previous_page();
            }
            Action::NextPage => {
                self.view.next_page();
            }
            Action::FirstPage => {
                self.view.first_page();
            }
            Action::LastPage => {
                self.view.last_page();
            }
            Action::JumpBack => {
                let target = self.view.current_page() as i64 - JUMP_PAGES;
                self.view.go_to_page(target);
            }
            Action::JumpForward => {
                let target = self.view.current_page() as i64 + JUMP_PAGES;
                self.view.go_to_page(target);
            }
            Action::SelectPrevious => self.view.select_previous(),
            Action::SelectNext => self.view.select_next(),
            Action::GoTo => self.mode = Mode::GoTo(String::new()),
            Action::Search => self.mode = Mode::Search(self.view.search().to_string()),
            Action::CycleKind => {
                self.view.cycle_kind_filter();
                self.status_message = Some(match self.view.kind_filter() {
                    Some(kind) => format!("Showing {} only", kind),
                    None => "Showing all kinds".to_string(),
                });
            }
            Action::Delete => self.delete_selected(),
        }
    }

    /// Handle keyboard input for "Go to page" mode
    fn handle_goto_key_event(&mut self, key: KeyEvent) {
        let Mode::GoTo(input) = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                match input.parse::<i64>() {
                    Ok(page) => {
                        self.view.go_to_page(page);
                    }
                    Err(_) => self.status_message = Some("Enter a page number".to_string()),
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    /// Handle keyboard input for search mode
    fn handle_search_key_event(&mut self, key: KeyEvent) {
        let Mode::Search(query) = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => query.push(c),
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Esc => query.clear(),
            _ => return,
        }

        let query = query.clone();
        self.view.set_search(&query);
        if key.code == KeyCode::Esc {
            self.mode = Mode::Normal;
        }
    }

    /// Scrolling pages through the list
    fn handle_mouse_event(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.view.previous_page();
            }
            MouseEventKind::ScrollDown => {
                self.view.next_page();
            }
            _ => {}
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.view.selected().map(|item| item.id().to_string()) else {
            return;
        };
        if self.view.remove(&id).is_some() {
            debug!("Deleted {} from {}", id, self.title);
            self.status_message = Some(format!("Deleted {}", id));
        }
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Page buttons
                Constraint::Length(1), // Status bar
            ])
            .split(frame.size());

        self.render_table(frame, chunks[0]);
        self.render_status_bar(frame, chunks[2]);

        let page = self.view.page();
        let buttons = pagination::page_buttons(&page.window, &page.pages, &self.styling);
        frame.render_widget(Paragraph::new(buttons), chunks[1]);

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let selected = self.view.selected_index();
        let title = match self.view.kind_filter() {
            Some(kind) => format!(" {} [{}] ", self.title, kind),
            None => format!(" {} ", self.title),
        };
        let page = self.view.page();

        let header = Row::new(T::headers().iter().map(|h| Cell::from(*h)))
            .style(self.theme.header_style());
        let rows: Vec<Row> = page
            .items
            .iter()
            .map(|item| Row::new(item.columns()))
            .collect();
        let widths: Vec<Constraint> = T::headers()
            .iter()
            .map(|_| Constraint::Ratio(1, T::headers().len() as u32))
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(self.theme.border_style()),
            )
            .style(self.theme.text_style())
            .highlight_style(self.theme.selection_style());

        let mut state = TableState::default();
        if !page.items.is_empty() {
            state.select(Some(selected));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    /// Render the status bar
    fn render_status_bar(&mut self, frame: &mut Frame, area: Rect) {
        let line = match &self.mode {
            Mode::GoTo(input) => Line::from(vec![
                Span::styled("Go to page: ", self.theme.text_style()),
                Span::styled(format!("{}_", input), self.theme.input_style()),
            ]),
            Mode::Search(query) => Line::from(vec![
                Span::styled("Search: ", self.theme.text_style()),
                Span::styled(format!("{}_", query), self.theme.input_style()),
            ]),
            Mode::Normal => match &self.status_message {
                Some(message) => Line::from(Span::styled(message.clone(), self.theme.text_style())),
                None => {
                    let page = self.view.page();
                    pagination::summary(&page.window, page.total_items, &self.styling)
                }
            },
        };

        frame.render_widget(
            Paragraph::new(line).style(self.theme.status_bar_style()),
            area,
        );
    }

    /// Render help overlay
    fn render_help_overlay(&self, frame: &mut Frame) {
        let help_text = self.key_map.help_text();
        let height = help_text.lines().count() as u16 + 2;
        let help_area = centered_rect(44, height, frame.size());

        let help_paragraph = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "))
            .style(self.theme.help_style());

        frame.render_widget(Clear, help_area);
        frame.render_widget(help_paragraph, help_area);
    }
}

/// Create a centered rectangle with given width and height
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}
