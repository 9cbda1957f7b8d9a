//! CLI command implementations.

pub mod browse;
pub mod search;
pub mod show;

use crate::core::task::{TaskHandle, TaskOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Show a spinner until the task settles.
pub(crate) async fn wait_with_spinner(handle: TaskHandle, message: &str) -> TaskOutcome {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = handle.wait().await;
    pb.finish_and_clear();
    outcome
}
