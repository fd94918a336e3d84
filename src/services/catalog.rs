//! Catalog service interfaces.
//!
//! The resolver and orchestrator only see these traits; the `reqwest`
//! clients in the sibling modules implement them, and tests substitute fakes.

use super::radarr::LibraryMovie;
use super::sonarr::SeriesLookupItem;
use super::tmdb::MovieSearchPage;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Paginated movie search.
#[allow(async_fn_in_trait)]
pub trait MovieCatalog {
    /// Fetch one page (1-based) of search results.
    async fn search_movies(&self, query: &str, page: u32) -> Result<MovieSearchPage>;
}

/// Single-shot series lookup.
#[allow(async_fn_in_trait)]
pub trait SeriesCatalog {
    /// Look up series matching `term`. All results come back in one response.
    async fn lookup_series(&self, term: &str) -> Result<Vec<SeriesLookupItem>>;
}

/// Library manager holding the on-disk layout of movies.
#[allow(async_fn_in_trait)]
pub trait MovieLibrary {
    /// Every movie the library manager knows about.
    async fn library_movies(&self) -> Result<Vec<LibraryMovie>>;
}

/// Error body shapes used by TMDB (`status_message`) and the *arr apps (`message`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
    message: Option<String>,
}

/// Best-effort human readable message from an error response body.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.status_message.or(parsed.message) {
            return msg;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Unknown error".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

/// Decode a JSON body into a typed schema, reporting mismatches as schema errors.
pub(crate) fn decode<T: DeserializeOwned>(service: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Schema {
        service,
        message: e.to_string(),
    })
}

/// Check the status of a response and decode its body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    resp: reqwest::Response,
) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(Error::CatalogRequest {
            service,
            message: format!("{} - {}", status.as_u16(), error_message(&body)),
        });
    }

    decode(service, &body)
}
