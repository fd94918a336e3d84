//! Sonarr/Radarr preflight check.

use super::CheckResult;
use crate::Result;

/// Turn a `system/status` probe into a check result.
pub fn check(name: &str, verified: Result<bool>) -> CheckResult {
    match verified {
        Ok(true) => CheckResult::ok(name, "connected"),
        Ok(false) => CheckResult::fail(
            name,
            "invalid API key or unreachable",
            "Check api_key and base_url (including /api/v3) in config.toml",
        ),
        Err(_) => CheckResult::fail(name, "connection failed", "Check your network connection"),
    }
}
