//! Command line argument definitions.

use crate::generators::grid::OutputFormat;
use clap::{Parser, Subcommand};

/// Movie Browser - Search TMDB and browse movie details
#[derive(Parser, Debug)]
#[command(name = "movie-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search movies by title
    Search {
        /// Title to search for
        #[arg(value_name = "QUERY")]
        query: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show a movie's details and cast
    Show {
        /// TMDB movie ID
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Open a route, e.g. / or /movie/603
    Open {
        /// Route path
        #[arg(value_name = "ROUTE")]
        route: String,
    },

    /// Browse interactively (default)
    Browse,
}
