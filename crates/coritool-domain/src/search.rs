//! Web-search model: engine categories and result items

use std::fmt;

/// Curated search-engine category
///
/// Each category maps to one configured custom search engine. A category
/// without a configured engine is simply skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchCategory {
    /// Investigative journalism and anti-corruption outlets
    Investigative,
    /// General news media
    Media,
    /// Official government sources
    Official,
    /// International organisations and press
    International,
    /// Regional outlets
    Regional,
    /// Business registries and company data aggregators
    Business,
}

impl SearchCategory {
    /// All categories, in configuration order
    pub const ALL: [SearchCategory; 6] = [
        SearchCategory::Investigative,
        SearchCategory::Media,
        SearchCategory::Official,
        SearchCategory::International,
        SearchCategory::Regional,
        SearchCategory::Business,
    ];

    /// Get the category tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchCategory::Investigative => "investigative",
            SearchCategory::Media => "media",
            SearchCategory::Official => "official",
            SearchCategory::International => "international",
            SearchCategory::Regional => "regional",
            SearchCategory::Business => "business",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single web-search result
///
/// Only the title and snippet feed the heuristics; the link is carried for
/// the detailed report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchItem {
    /// Result title
    pub title: String,

    /// Result snippet
    pub snippet: String,

    /// Result URL, if the engine returned one
    pub link: Option<String>,
}

impl SearchItem {
    /// Create an item from a title and snippet
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: None,
        }
    }

    /// Lower-cased `title + " " + snippet`, the text every keyword scan reads
    pub fn haystack(&self) -> String {
        format!("{} {}", self.title, self.snippet).to_lowercase()
    }
}
