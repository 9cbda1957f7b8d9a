//! TMDB API client.

use crate::models::config::TmdbConfig;
use crate::models::movie::{Credits, MovieDetail, MovieSummary, SearchResponse};
use crate::services::transport::{HttpResponse, ReqwestTransport, Transport};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Image size token understood by the TMDB image host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Original,
    W500,
    W200,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Original => "original",
            ImageSize::W500 => "w500",
            ImageSize::W200 => "w200",
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a full image URL from a path fragment.
pub fn image_url(image_base_url: &str, size: ImageSize, path: &str) -> String {
    format!("{}/{}{}", image_base_url.trim_end_matches('/'), size, path)
}

/// TMDB API client.
///
/// The credential is fixed at construction; every request embeds it in the
/// query string.
#[derive(Clone)]
pub struct TmdbClient {
    config: TmdbConfig,
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.config.base_url)
            .field("language", &self.config.language)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    /// Create a new TMDB client over the given transport.
    pub fn new(config: TmdbConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            config,
            api_key,
            transport,
        })
    }

    /// Create a client over a `reqwest` transport.
    pub fn with_reqwest(config: TmdbConfig) -> Result<Self> {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let transport = ReqwestTransport::new(timeout)?;
        Self::new(config, Arc::new(transport))
    }

    /// Image host base URL.
    pub fn image_base_url(&self) -> &str {
        &self.config.image_base_url
    }

    /// Build URL with the api_key parameter.
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        format!(
            "{}/{}?api_key={}{}",
            self.config.base_url.trim_end_matches('/'),
            path,
            urlencoding::encode(&self.api_key),
            extra_params
        )
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {}", self.redact(url));
        let resp = self.transport.get(url).await?;
        tracing::debug!("{} <- {}", resp.status, self.redact(url));
        Ok(resp)
    }

    fn redact(&self, url: &str) -> String {
        url.replace(&*urlencoding::encode(&self.api_key), "***")
    }

    /// Verify API key is valid.
    pub async fn verify_api_key(&self) -> Result<bool> {
        let url = self.build_url("authentication", "");
        Ok(self.get(&url).await?.is_success())
    }

    /// Search for movies by title. Returns the first results page.
    pub async fn search_movie(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let url = self.build_url(
            "search/movie",
            &format!("&query={}", urlencoding::encode(query)),
        );
        let resp = self.get(&url).await?;
        if !resp.is_success() {
            return Err(Error::TmdbSearchError {
                status: resp.status,
            });
        }
        let parsed: SearchResponse = parse_body("search", &resp)?;
        Ok(parsed.results)
    }

    /// Get movie details.
    pub async fn get_movie_details(&self, movie_id: u64) -> Result<MovieDetail> {
        let url = self.build_url(
            &format!("movie/{}", movie_id),
            &format!("&language={}", self.config.language),
        );
        let resp = self.get(&url).await?;
        if !resp.is_success() {
            return Err(Error::MovieDetailsFailed {
                status: resp.status,
            });
        }
        parse_body("movie details", &resp)
    }

    /// Get movie cast credits.
    pub async fn get_movie_credits(&self, movie_id: u64) -> Result<Credits> {
        let url = self.build_url(
            &format!("movie/{}/credits", movie_id),
            &format!("&language={}", self.config.language),
        );
        let resp = self.get(&url).await?;
        if !resp.is_success() {
            return Err(Error::CreditsFailed {
                status: resp.status,
            });
        }
        parse_body("credits", &resp)
    }
}

fn parse_body<T: DeserializeOwned>(endpoint: &'static str, resp: &HttpResponse) -> Result<T> {
    serde_json::from_str(&resp.body).map_err(|e| Error::parse(endpoint, e))
}
