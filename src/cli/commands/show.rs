//! Show and open command implementations.

use super::{browse, wait_with_spinner};
use crate::core::detail::{DetailController, DetailPhase};
use crate::core::router::Route;
use crate::generators::detail;
use crate::services::tmdb::TmdbClient;
use crate::Result;
use colored::Colorize;

/// Fetch and print a movie's details and cast.
pub async fn show(client: TmdbClient, movie_id: u64) -> Result<()> {
    let controller = DetailController::new(client.clone());
    let handle = controller.load(movie_id);
    wait_with_spinner(handle, &format!("Loading movie {}...", movie_id)).await;

    print_detail(&controller, &client);
    Ok(())
}

/// Open a route path.
pub async fn open(client: TmdbClient, route: &str) -> Result<()> {
    match Route::parse(route)? {
        Route::Search => browse::browse(client, Route::Search).await,
        Route::Movie(id) => show(client, id).await,
    }
}

/// Print the detail screen in its current phase.
pub(crate) fn print_detail(controller: &DetailController, client: &TmdbClient) {
    let state = controller.state();
    let out = detail::render_detail(&state, client.image_base_url());
    match state.phase() {
        DetailPhase::Error(_) => println!("{}", out.red()),
        DetailPhase::Ready { .. } => println!("{}", out),
        DetailPhase::Loading | DetailPhase::Empty => {}
    }
}
