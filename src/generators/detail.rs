//! Movie detail view.

use super::text::{
    format_rating, format_release_date, format_runtime, NOT_AVAILABLE, NO_PHOTO, NO_POSTER,
};
use crate::core::detail::{DetailPhase, DetailState};
use crate::models::movie::{Credits, MovieDetail};
use crate::services::tmdb::{image_url, ImageSize};

/// Cast entries shown before collapsing the rest.
pub const CAST_LIMIT: usize = 10;

/// Back action offered with errors.
pub const BACK_ACTION: &str = "[b] Back to search";

/// Render the detail screen for the given state.
pub fn render_detail(state: &DetailState, image_base_url: &str) -> String {
    match state.phase() {
        DetailPhase::Loading => "Loading...".to_string(),
        DetailPhase::Error(message) => format!("{}\n\n{}", message, BACK_ACTION),
        DetailPhase::Empty => String::new(),
        DetailPhase::Ready { movie, credits } => render_movie(movie, credits, image_base_url),
    }
}

/// Render the full view of a movie and its cast.
pub fn render_movie(
    movie: &MovieDetail,
    credits: Option<&Credits>,
    image_base_url: &str,
) -> String {
    let mut out = Vec::new();

    let heading = match movie.year() {
        Some(year) => format!("{} ({})", movie.title, year),
        None => movie.title.clone(),
    };
    out.push(heading.clone());
    out.push("=".repeat(heading.chars().count()));

    out.push(format!(
        "Released: {}",
        format_release_date(movie.release_date.as_deref())
    ));
    out.push(format!("Runtime:  {}", format_runtime(movie.known_runtime())));
    out.push(format!("Rating:   {}", format_rating(movie.vote_average)));

    let genres = if movie.genres.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push(format!("Genres:   {}", genres));

    out.push(format!(
        "Poster:   {}",
        image_or(image_base_url, ImageSize::W500, movie.poster_path.as_deref(), NO_POSTER)
    ));
    out.push(format!(
        "Backdrop: {}",
        image_or(
            image_base_url,
            ImageSize::Original,
            movie.backdrop_path.as_deref(),
            NOT_AVAILABLE
        )
    ));

    out.push(String::new());
    out.push("Overview".to_string());
    if movie.overview.trim().is_empty() {
        out.push("  No overview available.".to_string());
    } else {
        out.push(format!("  {}", movie.overview.trim()));
    }

    out.push(String::new());
    out.push("Cast".to_string());
    match credits.map(|c| c.cast.as_slice()) {
        Some(cast) if !cast.is_empty() => {
            for entry in cast.iter().take(CAST_LIMIT) {
                let character = if entry.character.trim().is_empty() {
                    NOT_AVAILABLE
                } else {
                    entry.character.as_str()
                };
                out.push(format!(
                    "  {} as {}  {}",
                    entry.name,
                    character,
                    image_or(
                        image_base_url,
                        ImageSize::W200,
                        entry.profile_path.as_deref(),
                        NO_PHOTO
                    )
                ));
            }
            if cast.len() > CAST_LIMIT {
                out.push(format!("  ... and {} more", cast.len() - CAST_LIMIT));
            }
        }
        _ => out.push("  No cast information.".to_string()),
    }

    out.join("\n")
}

fn image_or(image_base_url: &str, size: ImageSize, path: Option<&str>, fallback: &str) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(p) => image_url(image_base_url, size, p),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::movie::CreditEntry;

    const IMAGES: &str = "https://image.tmdb.org/t/p";

    fn matrix() -> MovieDetail {
        serde_json::from_str(
            r#"{
                "id": 603,
                "title": "The Matrix",
                "overview": "Set in the 22nd century.",
                "release_date": "1999-03-31",
                "poster_path": "/p.jpg",
                "backdrop_path": null,
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
                "runtime": 136,
                "vote_average": 8.2
            }"#,
        )
        .unwrap()
    }

    fn cast(n: u64) -> Credits {
        Credits {
            id: Some(603),
            cast: (0..n)
                .map(|i| CreditEntry {
                    cast_id: i,
                    character: format!("Role {}", i),
                    name: format!("Actor {}", i),
                    profile_path: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_ready_view() {
        let out = render_movie(&matrix(), Some(&cast(2)), IMAGES);
        assert!(out.starts_with("The Matrix (1999)"));
        assert!(out.contains("Released: March 31, 1999"));
        assert!(out.contains("Runtime:  136 minutes"));
        assert!(out.contains("Genres:   Action, Science Fiction"));
        assert!(out.contains("https://image.tmdb.org/t/p/w500/p.jpg"));
        assert!(out.contains("Backdrop: N/A"));
        assert!(out.contains("Actor 1 as Role 1  [no photo]"));
    }

    #[test]
    fn test_zero_runtime_renders_not_available() {
        let mut movie = matrix();
        movie.runtime = Some(0);
        let out = render_movie(&movie, None, IMAGES);
        assert!(out.contains("Runtime:  N/A"));
        assert!(!out.contains("0 minutes"));
        assert!(out.contains("No cast information."));
    }

    #[test]
    fn test_long_cast_is_collapsed() {
        let out = render_movie(&matrix(), Some(&cast(13)), IMAGES);
        assert!(out.contains("Actor 9 as Role 9"));
        assert!(!out.contains("Actor 10 as"));
        assert!(out.contains("... and 3 more"));
    }

    #[test]
    fn test_error_phase_offers_back_action() {
        let state = DetailState {
            error: Some("Failed to fetch credits.".to_string()),
            ..Default::default()
        };
        assert_eq!(
            render_detail(&state, IMAGES),
            "Failed to fetch credits.\n\n[b] Back to search"
        );
    }

    #[test]
    fn test_empty_phase_renders_nothing() {
        assert_eq!(render_detail(&DetailState::default(), IMAGES), "");
    }
}
