//! TMDB API client.

use super::catalog::{self, MovieCatalog};
use crate::models::config::TmdbConfig;
use crate::Result;
use serde::Deserialize;

const SERVICE: &str = "TMDB";

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

/// One page of movie search results.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSearchPage {
    #[serde(default = "first_page")]
    pub page: u32,
    pub results: Vec<MovieSearchItem>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

/// Movie search item.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSearchItem {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

impl MovieSearchItem {
    /// Release year from `release_date`, if known.
    pub fn release_year(&self) -> Option<String> {
        crate::core::parser::release_year(self.release_date.as_deref())
    }
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Build URL with the api_key and language parameters.
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        format!(
            "{}/{}?api_key={}&language={}{}",
            self.config.service.base_url,
            path,
            self.config.service.api_key,
            self.config.language,
            extra_params
        )
    }

    /// Verify API key is valid.
    pub async fn verify_api_key(&self) -> Result<bool> {
        let url = format!(
            "{}/authentication?api_key={}",
            self.config.service.base_url, self.config.service.api_key
        );

        match self.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Search for movies, one page at a time.
    pub async fn search_movie(&self, query: &str, page: u32) -> Result<MovieSearchPage> {
        let url = self.build_url(
            "search/movie",
            &format!("&query={}&page={}", urlencoding::encode(query), page),
        );

        tracing::debug!("TMDB search: '{}' page {}", query, page);
        let resp = self.client.get(&url).send().await?;
        catalog::read_json(SERVICE, resp).await
    }
}

impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MovieSearchPage> {
        self.search_movie(query, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::ServiceConfig;

    fn client() -> TmdbClient {
        TmdbClient::new(TmdbConfig {
            service: ServiceConfig {
                api_key: "abc".to_string(),
                base_url: "https://api.themoviedb.org/3".to_string(),
            },
            language: "en-US".to_string(),
        })
    }

    #[test]
    fn test_build_url() {
        let url = client().build_url("search/movie", "&query=Blade%20Runner&page=2");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?api_key=abc&language=en-US&query=Blade%20Runner&page=2"
        );
    }

    #[test]
    fn test_search_page_schema() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 78, "title": "Blade Runner", "release_date": "1982-06-25", "overview": "..."},
                {"id": 335984, "title": "Blade Runner 2049", "release_date": ""}
            ],
            "total_pages": 3,
            "total_results": 45
        }"#;
        let page: MovieSearchPage = catalog::decode(SERVICE, body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].release_year().as_deref(), Some("1982"));
        assert_eq!(page.results[1].release_year(), None);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_search_page_requires_results() {
        assert!(catalog::decode::<MovieSearchPage>(SERVICE, r#"{"page": 1}"#).is_err());
    }
}
