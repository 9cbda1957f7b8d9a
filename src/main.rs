//! Movie Browser CLI
//!
//! A terminal movie search and detail browser backed by TMDB.

use clap::Parser;
use movie_browser::cli::{
    args::{Cli, Commands},
    commands::{browse, search, show},
};
use movie_browser::core::router::Route;
use movie_browser::models::config::{self, Config};
use movie_browser::preflight;
use movie_browser::services::tmdb::TmdbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // The credential is read once here and injected into the client
    let config = config::load_config()?;

    if !cli.skip_preflight {
        run_preflight_checks(&config).await?;
    }

    let client = TmdbClient::with_reqwest(config.tmdb)?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Search { query, format } => {
            search::search(client, &query, format).await?;
        }

        Commands::Show { id } => {
            show::show(client, id).await?;
        }

        Commands::Open { route } => {
            show::open(client, &route).await?;
        }

        Commands::Browse => {
            browse::browse(client, Route::Search).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_browser=debug")
    } else {
        EnvFilter::new("movie_browser=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
