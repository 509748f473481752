//! Kalamna admin console: dashboard list views backed by a shared
//! pagination engine, exposed through a CLI and a terminal browser.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod pagination;
pub mod tui;

pub use pagination::{
    build_page_sequence, compute_window, go_to_page, next_page, previous_page, PageState,
    PageToken, PageWindow, PaginationError,
};
