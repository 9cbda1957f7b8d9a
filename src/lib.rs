//! Movie Browser Library
//!
//! Search TMDB by title and browse a movie's details and cast.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;

pub use error::{Error, Result};
