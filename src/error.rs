//! Error types for the movie browser.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie browser.
#[derive(Error, Debug)]
pub enum Error {
    // Credential errors
    #[error("TMDB API key not configured. Set TMDB_API_KEY environment variable")]
    TmdbApiKeyMissing,

    // Provider status errors. The messages are shown to the user verbatim.
    #[error("Failed to fetch movie details.")]
    MovieDetailsFailed { status: u16 },

    #[error("Failed to fetch credits.")]
    CreditsFailed { status: u16 },

    #[error("TMDB search failed with status {status}")]
    TmdbSearchError { status: u16 },

    // Response schema errors
    #[error("Unexpected {endpoint} response: {reason}")]
    Parse { endpoint: &'static str, reason: String },

    // Navigation errors
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    // Config errors
    #[error("Invalid config file: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Wrap a schema mismatch for the named endpoint.
    pub fn parse(endpoint: &'static str, err: serde_json::Error) -> Self {
        Error::Parse {
            endpoint,
            reason: err.to_string(),
        }
    }
}
