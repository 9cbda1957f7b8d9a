//! Interactive browse command.
//!
//! Type a title to search, `#N` to open the N-th result, a route such as
//! `/movie/603` to navigate directly, `b` to go back from a movie, `r` to
//! reload it and `q` to quit.

use super::show::print_detail;
use super::wait_with_spinner;
use crate::core::detail::DetailController;
use crate::core::router::Route;
use crate::core::search::SearchController;
use crate::generators::grid::{self, OutputFormat};
use crate::services::tmdb::TmdbClient;
use crate::Result;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Back,
    Reload,
    Help,
    /// Open the N-th (1-based) result of the last search.
    Pick(usize),
    Navigate(Route),
    Search(String),
    Nothing,
}

impl Input {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        Ok(match line {
            "" => Input::Nothing,
            "q" | ":q" | "quit" => Input::Quit,
            "b" | "back" => Input::Back,
            "r" | "reload" => Input::Reload,
            "?" | "help" => Input::Help,
            _ if line.starts_with('#') => match line[1..].trim().parse::<usize>() {
                Ok(n) if n > 0 => Input::Pick(n),
                _ => Input::Search(line.to_string()),
            },
            _ if line.starts_with('/') => Input::Navigate(Route::parse(line)?),
            _ => Input::Search(line.to_string()),
        })
    }
}

/// Run the interactive browser starting at `start`.
pub async fn browse(client: TmdbClient, start: Route) -> Result<()> {
    let search = SearchController::new(client.clone());
    let detail = DetailController::new(client.clone());
    let mut route = start;

    print_help();
    if let Route::Movie(id) = route {
        open_movie(&detail, &client, id).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", prompt(route).bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let input = match Input::parse(&line) {
            Ok(input) => input,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match (route, input) {
            (_, Input::Quit) => break,
            (_, Input::Nothing) => {}
            (_, Input::Help) => print_help(),
            (_, Input::Navigate(Route::Search)) | (Route::Movie(_), Input::Back) => {
                route = Route::Search;
                print_search(&search, &client)?;
            }
            (_, Input::Navigate(Route::Movie(id))) => {
                route = Route::Movie(id);
                open_movie(&detail, &client, id).await;
            }
            (Route::Movie(_), Input::Reload) => {
                if let Some(handle) = detail.reload() {
                    wait_with_spinner(handle, "Reloading...").await;
                    print_detail(&detail, &client);
                }
            }
            (Route::Search, Input::Pick(n)) => {
                match search.state().results.get(n - 1) {
                    Some(movie) => {
                        route = Route::Movie(movie.id);
                        open_movie(&detail, &client, movie.id).await;
                    }
                    None => println!("{}", format!("No result #{}", n).yellow()),
                }
            }
            (Route::Search, Input::Search(query)) => {
                if let Some(handle) = search.submit(&query) {
                    wait_with_spinner(handle, &format!("Searching for \"{}\"...", query)).await;
                    print_search(&search, &client)?;
                }
            }
            (Route::Search, Input::Back | Input::Reload) => {}
            (Route::Movie(_), Input::Search(_) | Input::Pick(_)) => {
                println!("{}", "Press b to go back to search.".yellow());
            }
        }
    }

    Ok(())
}

/// Mount the detail screen for `id`. Every navigation refetches.
async fn open_movie(detail: &DetailController, client: &TmdbClient, id: u64) {
    let handle = detail.load(id);
    wait_with_spinner(handle, &format!("Loading movie {}...", id)).await;
    print_detail(detail, client);
}

fn print_search(search: &SearchController, client: &TmdbClient) -> Result<()> {
    let state = search.state();
    if state.query.is_empty() {
        return Ok(());
    }
    let out = grid::render_search(&state, OutputFormat::Table, client.image_base_url())?;
    println!("{}", out);
    Ok(())
}

fn prompt(route: Route) -> String {
    match route {
        Route::Search => "search>".to_string(),
        Route::Movie(id) => format!("movie/{}>", id),
    }
}

fn print_help() {
    println!("{}", "Movie Browser".bold().cyan());
    println!("  <title>      search movies");
    println!("  #N           open the N-th result");
    println!("  /movie/<id>  open a movie by TMDB ID");
    println!("  b            back to search");
    println!("  r            reload the current movie");
    println!("  q            quit");
    println!();
}
