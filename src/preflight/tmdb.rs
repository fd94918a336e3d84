//! TMDB API preflight check.

use super::CheckResult;
use crate::services::tmdb::TmdbClient;

/// Check if TMDB API is accessible.
pub async fn check(client: &TmdbClient) -> CheckResult {
    match client.verify_api_key().await {
        Ok(true) => CheckResult::ok("TMDB API", "connected"),
        Ok(false) => CheckResult::fail(
            "TMDB API",
            "invalid API key or unreachable",
            "Check [tmdb] api_key and base_url in config.toml",
        ),
        Err(_) => CheckResult::fail(
            "TMDB API",
            "connection failed",
            "Check your network connection",
        ),
    }
}
