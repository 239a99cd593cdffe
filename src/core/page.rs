//! The two pages: titles and tricks. Metadata, embedded sample data, and database loading.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::config::Config;
use crate::core::database::{Database, DatabaseError};

/// Author shown in page metadata.
pub const AUTHOR: &str = "Daniil Orain";

/// A classification page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Titles,
    Tricks,
}

/// Error resolving or loading a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Unknown page '{0}' (expected 'titles' or 'tricks')")]
    Unknown(String),
    #[error("{page} database: {source}")]
    Database {
        page: Page,
        #[source]
        source: DatabaseError,
    },
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Titles, Page::Tricks];

    /// Identifier used on the command line, in routes, and for data file names.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Titles => "titles",
            Page::Tricks => "tricks",
        }
    }

    /// Heading and document title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Titles => "YouTube Titles",
            Page::Tricks => "Marketing Tricks",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Page::Titles => "Classification of YouTube videos titles that showed prominence",
            Page::Tricks => {
                "Classification of common marketing tricks and patterns for educational awareness"
            }
        }
    }

    /// Notice shown under the heading.
    pub fn disclaimer(self) -> Option<&'static str> {
        match self {
            Page::Titles => None,
            Page::Tricks => Some(
                "These examples are provided for educational purposes only, to help people \
                 recognize persuasive tactics and avoid being misled.",
            ),
        }
    }

    /// Path the page is served under.
    pub fn route(self) -> &'static str {
        match self {
            Page::Titles => "/titles",
            Page::Tricks => "/tricks",
        }
    }

    /// File name looked up in the configured data directory.
    pub fn data_file_name(self) -> String {
        format!("{}.json", self.slug())
    }

    /// The other page (Tab in the browser).
    pub fn next(self) -> Page {
        match self {
            Page::Titles => Page::Tricks,
            Page::Tricks => Page::Titles,
        }
    }

    fn embedded_json(self) -> &'static str {
        match self {
            Page::Titles => include_str!("../../data/titles.json"),
            Page::Tricks => include_str!("../../data/tricks.json"),
        }
    }

    /// Load the page database. Precedence: explicit `data_file`, then
    /// `<data_dir>/<slug>.json` if it exists, then the embedded copy.
    pub fn load_database(
        self,
        data_file: Option<&Path>,
        config: &Config,
    ) -> Result<Database, PageError> {
        let wrap = |source| PageError::Database { page: self, source };
        if let Some(path) = data_file {
            log::info!("Loading {} from {}", self, path.display());
            return Database::load(path).map_err(wrap);
        }
        if let Some(dir) = &config.data_dir {
            let path = dir.join(self.data_file_name());
            if path.is_file() {
                log::info!("Loading {} from {}", self, path.display());
                return Database::load(&path).map_err(wrap);
            }
            log::debug!("{} not found, using embedded data", path.display());
        }
        Database::from_json(self.embedded_json()).map_err(wrap)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PageError::Unknown(s.to_string()))
    }
}
