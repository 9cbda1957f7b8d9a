//! External service clients.

pub mod tmdb;
pub mod transport;
