//! Text views for the two screens.

pub mod detail;
pub mod grid;
pub mod text;
