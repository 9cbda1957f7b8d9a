//! Search command implementation.

use super::wait_with_spinner;
use crate::core::search::SearchController;
use crate::generators::grid::{self, OutputFormat};
use crate::services::tmdb::TmdbClient;
use crate::Result;
use colored::Colorize;

/// Search movies by title and print the results grid.
pub async fn search(client: TmdbClient, query: &str, format: OutputFormat) -> Result<()> {
    let controller = SearchController::new(client.clone());

    let Some(handle) = controller.submit(query) else {
        println!("{}", "Nothing to search for.".yellow());
        return Ok(());
    };

    if format == OutputFormat::Json {
        handle.wait().await;
    } else {
        wait_with_spinner(handle, &format!("Searching for \"{}\"...", query)).await;
    }

    let state = controller.state();
    let out = grid::render_search(&state, format, client.image_base_url())?;
    if state.results.is_empty() && format != OutputFormat::Json {
        println!("{}", out.yellow());
    } else {
        println!("{}", out);
    }

    Ok(())
}
