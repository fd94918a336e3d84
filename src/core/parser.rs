//! Poster filename parser.
//!
//! Extracts the catalog search query and release year from poster names such as
//! `Alien (1979).jpg` or `Severance (2022) - Season 2.png`.

use serde::{Deserialize, Serialize};

/// Search terms extracted from a movie poster file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// Text before the first `(`, trimmed. Empty when nothing usable precedes it.
    pub query: String,
    /// First parenthesized 4-digit year, kept as text.
    pub year: Option<String>,
}

impl ParsedName {
    /// Whether the name produced something worth searching for.
    pub fn is_searchable(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Series grouping key extracted from a poster file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    /// `NAME (YEAR)` prefix, including the year.
    pub key: String,
    /// The 4-digit year captured from the prefix.
    pub year: String,
}

/// Parse a movie poster file name.
///
/// A name without any `(` yields an empty query so the caller can skip it
/// without touching the network.
pub fn parse_movie_name(file_name: &str) -> ParsedName {
    let query = match file_name.split_once('(') {
        Some((before, _)) => before.trim().to_string(),
        None => String::new(),
    };

    let year = regex::Regex::new(r"\((\d{4})\)")
        .ok()
        .and_then(|re| re.captures(file_name))
        .map(|caps| caps[1].to_string());

    ParsedName { query, year }
}

/// Parse a series poster file name into its `NAME (YEAR)` grouping key.
///
/// Returns `None` when the name does not start with `<name> (<year>)`.
pub fn parse_series_name(file_name: &str) -> Option<SeriesKey> {
    let re = regex::Regex::new(r"^(.*? \((\d{4})\))").ok()?;
    let caps = re.captures(file_name)?;
    Some(SeriesKey {
        key: caps[1].to_string(),
        year: caps[2].to_string(),
    })
}

/// Series search term: the grouping key without its trailing ` (YEAR)`.
pub fn series_query(series_key: &str) -> String {
    regex::Regex::new(r"\s*\(\d{4}\)$")
        .map(|re| re.replace(series_key, "").trim().to_string())
        .unwrap_or_else(|_| series_key.trim().to_string())
}

/// Year component of a `YYYY-MM-DD` release date.
pub fn release_year(release_date: Option<&str>) -> Option<String> {
    release_date
        .and_then(|date| date.split('-').next())
        .map(str::trim)
        .filter(|year| !year.is_empty())
        .map(str::to_string)
}
