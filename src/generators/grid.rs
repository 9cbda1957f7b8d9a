//! Search results grid.

use super::text::{format_year, truncate, NO_POSTER};
use crate::core::router::Route;
use crate::core::search::SearchState;
use crate::models::movie::MovieSummary;
use crate::services::tmdb::{image_url, ImageSize};
use crate::Result;

const TITLE_WIDTH: usize = 38;

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Simple,
    Json,
}

/// One result card: everything the grid shows for a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub title: String,
    pub year: String,
    /// Poster URL, or `None` when a placeholder is shown.
    pub poster: Option<String>,
    /// Route to the movie's detail screen.
    pub link: Route,
}

impl ResultCard {
    pub fn new(movie: &MovieSummary, image_base_url: &str) -> Self {
        Self {
            title: movie.title.clone(),
            year: format_year(movie.year()),
            poster: movie
                .poster_path
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| image_url(image_base_url, ImageSize::W500, p)),
            link: Route::Movie(movie.id),
        }
    }

    pub fn poster_or_placeholder(&self) -> &str {
        self.poster.as_deref().unwrap_or(NO_POSTER)
    }
}

/// Build the cards for a result list, in order.
pub fn result_cards(results: &[MovieSummary], image_base_url: &str) -> Vec<ResultCard> {
    results
        .iter()
        .map(|movie| ResultCard::new(movie, image_base_url))
        .collect()
}

/// Render the search screen for the given state.
pub fn render_search(
    state: &SearchState,
    format: OutputFormat,
    image_base_url: &str,
) -> Result<String> {
    if state.loading {
        return Ok("Searching...".to_string());
    }
    match format {
        OutputFormat::Table => Ok(render_table(&state.query, &state.results, image_base_url)),
        OutputFormat::Simple => Ok(render_simple(&state.results, image_base_url)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&state.results)?),
    }
}

/// Render results as a numbered table.
pub fn render_table(query: &str, results: &[MovieSummary], image_base_url: &str) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let mut out = Vec::new();
    out.push(format!("Found {} results for \"{}\":", results.len(), query));
    out.push(String::new());
    out.push(format!(
        " {:>4} | {:>4} | {:<40} | {:<14} | {}",
        "#", "Year", "Title", "Link", "Poster"
    ));
    out.push("-".repeat(100));

    for (i, card) in result_cards(results, image_base_url).iter().enumerate() {
        out.push(format!(
            " {:>4} | {:>4} | {:<40} | {:<14} | {}",
            i + 1,
            card.year,
            truncate(&card.title, TITLE_WIDTH),
            card.link.to_string(),
            card.poster_or_placeholder()
        ));
    }

    out.join("\n")
}

/// Render results one per line.
pub fn render_simple(results: &[MovieSummary], image_base_url: &str) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    result_cards(results, image_base_url)
        .iter()
        .map(|card| {
            format!(
                "{} ({}) {} {}",
                card.title,
                card.year,
                card.link,
                card.poster_or_placeholder()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
