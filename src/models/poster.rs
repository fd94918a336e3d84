//! Poster file models.

use crate::core::parser::{self, ParsedName};
use crate::utils::fs as fs_utils;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An unsorted movie poster and the search terms taken from its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePoster {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name without path.
    pub file_name: String,
    /// Parsed query and year.
    pub parsed: ParsedName,
}

impl MoviePoster {
    pub fn from_path(path: &Path) -> Self {
        let file_name = fs_utils::file_name(path);
        let parsed = parser::parse_movie_name(&file_name);
        Self {
            path: path.to_path_buf(),
            file_name,
            parsed,
        }
    }
}

/// Series posters sharing one `NAME (YEAR)` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesGroup {
    /// `NAME (YEAR)` prefix shared by every file.
    pub key: String,
    /// Year of the first file in path order.
    pub year: String,
    /// Files in the group, sorted by path.
    pub files: Vec<PathBuf>,
}

impl SeriesGroup {
    /// Search term sent to the series catalog.
    pub fn query(&self) -> String {
        parser::series_query(&self.key)
    }
}
