//! Detail screen controller.

use crate::core::task::{TaskHandle, TaskOutcome, TaskSlot};
use crate::models::movie::{Credits, MovieDetail};
use crate::services::tmdb::TmdbClient;
use crate::Result;
use std::sync::{Arc, Mutex, MutexGuard};

/// Detail screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    /// Identifier of the last trigger.
    pub movie_id: Option<u64>,
    pub movie: Option<MovieDetail>,
    pub credits: Option<Credits>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What the detail screen should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailPhase<'a> {
    /// Spinner only.
    Loading,
    /// Error message and a back action.
    Error(&'a str),
    /// Nothing.
    Empty,
    /// Full detail view.
    Ready {
        movie: &'a MovieDetail,
        credits: Option<&'a Credits>,
    },
}

impl DetailState {
    pub fn phase(&self) -> DetailPhase<'_> {
        if self.loading {
            return DetailPhase::Loading;
        }
        if let Some(ref error) = self.error {
            return DetailPhase::Error(error);
        }
        match self.movie {
            Some(ref movie) => DetailPhase::Ready {
                movie,
                credits: self.credits.as_ref(),
            },
            None => DetailPhase::Empty,
        }
    }
}

/// Owns the detail screen state. Each trigger fetches the movie and its
/// credits concurrently and stores both only if both succeed.
#[derive(Debug)]
pub struct DetailController {
    client: TmdbClient,
    state: Arc<Mutex<DetailState>>,
    tasks: TaskSlot,
}

impl DetailController {
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(DetailState::default())),
            tasks: TaskSlot::new(),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DetailState {
        lock(&self.state).clone()
    }

    /// Fetch the movie and credits for `movie_id`, superseding any load in
    /// flight. Always re-issues both requests; every navigation to a movie
    /// calls this. Switching to a different identifier drops the previous
    /// movie and credits.
    pub fn load(&self, movie_id: u64) -> TaskHandle {
        let ticket = self.tasks.begin();
        {
            let mut state = lock(&self.state);
            if state.movie_id != Some(movie_id) {
                state.movie = None;
                state.credits = None;
            }
            state.movie_id = Some(movie_id);
            state.loading = true;
            state.error = None;
        }

        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let task_ticket = ticket.clone();
        let fut = async move {
            let fetched = fetch_movie_and_credits(&client, movie_id).await;

            let mut guard = lock(&state);
            if !task_ticket.is_current() {
                tracing::debug!("Dropping superseded detail load for movie {}", movie_id);
                return TaskOutcome::Superseded;
            }
            match fetched {
                Ok((movie, credits)) => {
                    guard.movie = Some(movie);
                    guard.credits = Some(credits);
                }
                Err(e) => {
                    tracing::error!("Loading movie {} failed: {}", movie_id, e);
                    guard.error = Some(e.to_string());
                }
            }
            guard.loading = false;
            TaskOutcome::Applied
        };

        self.tasks.spawn(&ticket, fut)
    }

    /// Re-trigger the last loaded identifier.
    pub fn reload(&self) -> Option<TaskHandle> {
        let movie_id = lock(&self.state).movie_id?;
        Some(self.load(movie_id))
    }

    /// Load and wait for it to settle.
    pub async fn open(&self, movie_id: u64) -> DetailState {
        self.load(movie_id).wait().await;
        self.state()
    }
}

/// Issue both requests at once. The first failure settles the load without
/// waiting on the other request; when both fail in the same poll the movie
/// failure is reported.
async fn fetch_movie_and_credits(
    client: &TmdbClient,
    movie_id: u64,
) -> Result<(MovieDetail, Credits)> {
    futures::future::try_join(
        client.get_movie_details(movie_id),
        client.get_movie_credits(movie_id),
    )
    .await
}

fn lock(state: &Mutex<DetailState>) -> MutexGuard<'_, DetailState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}
