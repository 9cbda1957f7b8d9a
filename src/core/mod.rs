//! Core screen logic.

pub mod detail;
pub mod router;
pub mod search;
pub mod task;
