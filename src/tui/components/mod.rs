//! Reusable widgets for the list browser.

pub mod pagination;

pub use pagination::PaginationStyling;
