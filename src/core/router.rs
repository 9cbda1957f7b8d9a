//! Navigation routes.
//!
//! `/` hosts the search screen and `/movie/{id}` the detail screen.

use crate::{Error, Result};

/// A navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Search,
    Movie(u64),
}

impl Route {
    /// Parse a route path. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        if path.is_empty() || path == "/" {
            return Ok(Route::Search);
        }

        let re = regex::Regex::new(r"^/movie/(\d+)/?$")
            .map_err(|e| Error::other(e.to_string()))?;
        let id = re
            .captures(path)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .ok_or_else(|| Error::InvalidRoute(path.to_string()))?;

        Ok(Route::Movie(id))
    }

    /// Detail identifier carried by the route.
    pub fn movie_id(&self) -> Option<u64> {
        match self {
            Route::Search => None,
            Route::Movie(id) => Some(*id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Search => write!(f, "/"),
            Route::Movie(id) => write!(f, "/movie/{}", id),
        }
    }
}

impl std::str::FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}
