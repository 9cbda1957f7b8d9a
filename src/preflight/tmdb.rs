//! TMDB API preflight check.

use super::CheckResult;
use crate::models::config::TmdbConfig;
use crate::services::tmdb::TmdbClient;

/// Check that the credential is configured and accepted by TMDB.
pub async fn check(config: &TmdbConfig) -> CheckResult {
    match TmdbClient::with_reqwest(config.clone()) {
        Ok(client) => match client.verify_api_key().await {
            Ok(true) => CheckResult::ok("TMDB API", "connected"),
            Ok(false) => CheckResult::fail(
                "TMDB API",
                "invalid API key",
                "Check your TMDB_API_KEY environment variable",
            ),
            Err(e) => {
                tracing::debug!("TMDB preflight request failed: {}", e);
                CheckResult::fail(
                    "TMDB API",
                    "connection failed",
                    "Check your network connection",
                )
            }
        },
        Err(_) => CheckResult::fail(
            "TMDB API",
            "API key not configured",
            "Set TMDB_API_KEY environment variable",
        ),
    }
}
