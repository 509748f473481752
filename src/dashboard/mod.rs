//! Dashboard list screens: record types, their data sources and the list
//! view that pages through them.

pub mod fixtures;
pub mod records;
pub mod source;
pub mod view;

pub use records::{ChatSession, Employee, Invitation, KnowledgeEntry};
pub use source::{CollectionSource, JsonFileSource, MockSource, SourceError};
pub use view::{ListView, VisiblePage};

use clap::ValueEnum;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{self, Debug};

/// Base trait for records that can be listed in a dashboard table
pub trait Record: Debug + Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Column titles, in the order `columns` returns cells
    fn headers() -> &'static [&'static str];

    /// Unique identifier for the record
    fn id(&self) -> &str;

    /// Table cells for this record
    fn columns(&self) -> Vec<String>;

    /// Lower-cased text matched by the search box
    fn search_text(&self) -> String;

    /// Category matched by the kind filter
    fn kind(&self) -> Option<&'static str> {
        None
    }

    /// Every category the kind filter can cycle through
    fn kinds() -> &'static [&'static str] {
        &[]
    }
}

/// The collections the dashboard can list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollectionKind {
    Employees,
    Invitations,
    Knowledge,
    Sessions,
}

impl CollectionKind {
    /// File stem used for on-disk collections
    pub fn file_stem(&self) -> &'static str {
        match self {
            CollectionKind::Employees => "employees",
            CollectionKind::Invitations => "invitations",
            CollectionKind::Knowledge => "knowledge",
            CollectionKind::Sessions => "sessions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CollectionKind::Employees => "Employees",
            CollectionKind::Invitations => "Invitations",
            CollectionKind::Knowledge => "Knowledge Base",
            CollectionKind::Sessions => "Chat Sessions",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
