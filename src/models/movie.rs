//! Movie data models.
//!
//! These are the response schemas for the three TMDB endpoints the browser
//! consumes. `id` and `title` are required; everything else is optional on
//! the wire and falls back to a placeholder when rendered.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Search endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// First page of results. Absent means no results.
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

/// A movie as listed in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// TMDB ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Release date (YYYY-MM-DD).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Poster path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl MovieSummary {
    /// Release year, if the release date parses.
    pub fn year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }
}

/// Full movie details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// TMDB ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Overview/synopsis. May be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    /// Release date (YYYY-MM-DD).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Poster path fragment.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop path fragment.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Genres in provider order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    /// Runtime in minutes. Zero means unknown.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Average rating (0-10).
    #[serde(default)]
    pub vote_average: Option<f32>,
}

impl MovieDetail {
    /// Runtime in minutes, treating zero as unknown.
    pub fn known_runtime(&self) -> Option<u32> {
        self.runtime.filter(|&minutes| minutes > 0)
    }

    /// Release year, if the release date parses.
    pub fn year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }
}

/// Genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Credits endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    /// Movie ID the credits belong to.
    #[serde(default)]
    pub id: Option<u64>,
    /// Cast in billing order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CreditEntry>,
}

/// One cast member's role in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    /// Cast slot identifier.
    pub cast_id: u64,
    /// Character name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub character: String,
    /// Performer name.
    pub name: String,
    /// Profile image path fragment.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Parse the year out of an ISO release date.
pub fn release_year(date: Option<&str>) -> Option<i32> {
    parse_release_date(date?).map(|d| d.year())
}

/// Parse an ISO release date. Empty strings are treated as absent.
pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

// TMDB sends `null` for some fields that are documented as strings or arrays.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
