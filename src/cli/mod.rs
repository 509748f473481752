mod browse;
mod list;
mod root;

pub use browse::BrowseCommand;
pub use list::ListCommand;
pub use root::Cli;
