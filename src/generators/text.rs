//! Field formatting with placeholder fallbacks.

use crate::models::movie::parse_release_date;

/// Placeholder for unknown values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown where a poster image would be.
pub const NO_POSTER: &str = "[no poster]";

/// Placeholder shown where a profile photo would be.
pub const NO_PHOTO: &str = "[no photo]";

/// Format a runtime in minutes. Zero or absent is unknown.
pub fn format_runtime(runtime: Option<u32>) -> String {
    match runtime {
        Some(minutes) if minutes > 0 => format!("{} minutes", minutes),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format an average rating out of ten.
pub fn format_rating(vote_average: Option<f32>) -> String {
    match vote_average {
        Some(avg) if avg.is_finite() => format!("{:.1}/10", avg),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format a release date as "March 31, 1999". Unparseable dates are shown
/// as sent; absent or empty ones as N/A.
pub fn format_release_date(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => parse_release_date(raw)
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a year, or N/A.
pub fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Truncate to `max` characters, ending in "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let keep = max.saturating_sub(3);
        format!("{}...", s.chars().take(keep).collect::<String>())
    } else {
        s.to_string()
    }
}
