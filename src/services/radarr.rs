//! Radarr library client.

use super::arr::ArrClient;
use super::catalog::MovieLibrary;
use crate::models::config::ServiceConfig;
use crate::Result;
use serde::Deserialize;

/// One movie from `GET /movie`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryMovie {
    pub tmdb_id: u64,
    pub title: Option<String>,
    /// Absolute movie folder.
    pub path: Option<String>,
    /// Root folder the movie folder lives in.
    pub root_folder_path: Option<String>,
}

/// Radarr API client.
pub struct RadarrClient {
    inner: ArrClient,
}

impl RadarrClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: ArrClient::new("Radarr", config),
        }
    }

    /// Check that Radarr is reachable.
    pub async fn verify(&self) -> Result<bool> {
        self.inner.verify().await
    }
}

impl MovieLibrary for RadarrClient {
    async fn library_movies(&self) -> Result<Vec<LibraryMovie>> {
        self.inner.get_json("movie").await
    }
}

/// Find the library entry for a TMDB id.
pub fn find_by_tmdb_id(movies: &[LibraryMovie], tmdb_id: u64) -> Option<&LibraryMovie> {
    movies.iter().find(|m| m.tmdb_id == tmdb_id)
}
