//! Shared HTTP plumbing for Sonarr and Radarr.
//!
//! Both apps expose the same v3 API conventions: an `X-Api-Key` header and
//! JSON bodies under the configured base URL.

use super::catalog;
use crate::models::config::ServiceConfig;
use crate::Result;
use serde::de::DeserializeOwned;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for a Sonarr/Radarr style API.
pub struct ArrClient {
    service: &'static str,
    config: ServiceConfig,
    client: reqwest::Client,
}

impl ArrClient {
    pub fn new(service: &'static str, config: ServiceConfig) -> Self {
        Self {
            service,
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Service name used in logs and errors.
    pub fn service(&self) -> &'static str {
        self.service
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!("{} GET {}", self.service, url);
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;
        catalog::read_json(self.service, resp).await
    }

    /// Check that the API answers with the configured key.
    pub async fn verify(&self) -> Result<bool> {
        let resp = self
            .client
            .get(self.build_url("system/status"))
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await;

        match resp {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = ArrClient::new(
            "Sonarr",
            ServiceConfig {
                api_key: "k".to_string(),
                base_url: "http://localhost:8989/api/v3".to_string(),
            },
        );
        assert_eq!(
            client.build_url("series/lookup?term=Severance"),
            "http://localhost:8989/api/v3/series/lookup?term=Severance"
        );
        assert_eq!(client.service(), "Sonarr");
    }
}
