//! Search screen controller.

use crate::core::task::{TaskHandle, TaskOutcome, TaskSlot};
use crate::models::movie::MovieSummary;
use crate::services::tmdb::TmdbClient;
use std::sync::{Arc, Mutex, MutexGuard};

/// Search screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Last submitted query text.
    pub query: String,
    /// Results of the last completed search.
    pub results: Vec<MovieSummary>,
    /// A search is in flight.
    pub loading: bool,
}

/// Owns the search screen state and issues one request per submission.
#[derive(Debug)]
pub struct SearchController {
    client: TmdbClient,
    state: Arc<Mutex<SearchState>>,
    tasks: TaskSlot,
}

impl SearchController {
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(SearchState::default())),
            tasks: TaskSlot::new(),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        lock(&self.state).clone()
    }

    /// Submit a search.
    ///
    /// Blank queries are ignored and return `None`. Otherwise prior results
    /// are cleared, loading is set and the request runs in the background;
    /// a later submission supersedes this one.
    pub fn submit(&self, query: &str) -> Option<TaskHandle> {
        if query.trim().is_empty() {
            return None;
        }

        let ticket = self.tasks.begin();
        {
            let mut state = lock(&self.state);
            state.query = query.to_string();
            state.results.clear();
            state.loading = true;
        }

        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let query = query.to_string();
        let task_ticket = ticket.clone();
        let fut = async move {
            let results = match client.search_movie(&query).await {
                Ok(results) => {
                    tracing::debug!("Search '{}' returned {} results", query, results.len());
                    results
                }
                Err(e) => {
                    tracing::warn!("Search '{}' failed: {}", query, e);
                    Vec::new()
                }
            };

            let mut guard = lock(&state);
            if !task_ticket.is_current() {
                tracing::debug!("Dropping superseded search '{}'", query);
                return TaskOutcome::Superseded;
            }
            guard.results = results;
            guard.loading = false;
            TaskOutcome::Applied
        };

        Some(self.tasks.spawn(&ticket, fut))
    }

    /// Submit a search and wait for it to settle.
    pub async fn search(&self, query: &str) -> SearchState {
        if let Some(handle) = self.submit(query) {
            handle.wait().await;
        }
        self.state()
    }
}

fn lock(state: &Mutex<SearchState>) -> MutexGuard<'_, SearchState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}
