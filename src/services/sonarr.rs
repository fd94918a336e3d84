//! Sonarr series lookup client.

use super::arr::ArrClient;
use super::catalog::SeriesCatalog;
use crate::models::config::ServiceConfig;
use crate::Result;
use serde::Deserialize;

/// One result of `GET /series/lookup`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLookupItem {
    pub title: String,
    /// First-air year; Sonarr reports 0 when unknown.
    #[serde(default)]
    pub year: Option<u32>,
    pub overview: Option<String>,
    /// Library folder, present once the series is added to Sonarr.
    pub path: Option<String>,
    pub tvdb_id: Option<u64>,
}

impl SeriesLookupItem {
    /// Year as text, `None` when Sonarr does not know it.
    pub fn year_text(&self) -> Option<String> {
        self.year.filter(|y| *y > 0).map(|y| y.to_string())
    }
}

/// Sonarr API client.
pub struct SonarrClient {
    inner: ArrClient,
}

impl SonarrClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: ArrClient::new("Sonarr", config),
        }
    }

    /// Check that Sonarr is reachable.
    pub async fn verify(&self) -> Result<bool> {
        self.inner.verify().await
    }
}

impl SeriesCatalog for SonarrClient {
    async fn lookup_series(&self, term: &str) -> Result<Vec<SeriesLookupItem>> {
        self.inner
            .get_json(&format!("series/lookup?term={}", urlencoding::encode(term)))
            .await
    }
}
