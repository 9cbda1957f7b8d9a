//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use movie_browser::models::config::TmdbConfig;
use movie_browser::services::tmdb::TmdbClient;
use movie_browser::services::transport::{HttpResponse, Transport};
use movie_browser::{Error, Result};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub const API_KEY: &str = "test-key";
pub const BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Clone)]
pub enum Reply {
    Respond(HttpResponse),
    Fail(String),
    /// Respond only after the gate is opened.
    Gated(Arc<Notify>, HttpResponse),
}

struct Rule {
    path: String,
    query_contains: Option<String>,
    reply: Reply,
}

/// Transport that answers by request path and records every URL.
#[derive(Default)]
pub struct ScriptedTransport {
    rules: Mutex<Vec<Rule>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer requests for `path` (e.g. `movie/603`). Replaces any earlier rule
    /// for the same path and query filter.
    pub fn on(&self, path: &str, reply: Reply) {
        self.add(path, None, reply);
    }

    /// Answer requests for `path` whose query string contains `fragment`.
    pub fn on_query(&self, path: &str, fragment: &str, reply: Reply) {
        self.add(path, Some(fragment.to_string()), reply);
    }

    fn add(&self, path: &str, query_contains: Option<String>, reply: Reply) {
        let mut rules = self.rules.lock().unwrap();
        rules.retain(|r| !(r.path == path && r.query_contains == query_contains));
        rules.push(Rule {
            path: path.to_string(),
            query_contains,
            reply,
        });
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|url| split_url(url).0 == path)
            .collect()
    }

    fn reply_for(&self, url: &str) -> Option<Reply> {
        let (path, query) = split_url(url);
        let rules = self.rules.lock().unwrap();
        rules
            .iter()
            .filter(|r| r.path == path)
            .find(|r| match r.query_contains {
                Some(ref fragment) => query.contains(fragment.as_str()),
                None => true,
            })
            .map(|r| r.reply.clone())
    }
}

fn split_url(url: &str) -> (&str, &str) {
    let rest = url.strip_prefix(BASE_URL).unwrap_or(url).trim_start_matches('/');
    match rest.split_once('?') {
        Some((path, query)) => (path, query),
        None => (rest, ""),
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.reply_for(url) {
            Some(Reply::Respond(resp)) => Ok(resp),
            Some(Reply::Fail(msg)) => Err(Error::other(msg)),
            Some(Reply::Gated(gate, resp)) => {
                gate.notified().await;
                Ok(resp)
            }
            None => Ok(HttpResponse::new(404, r#"{"status_code":34}"#)),
        }
    }
}

pub fn ok(body: &str) -> Reply {
    Reply::Respond(HttpResponse::new(200, body))
}

pub fn status(code: u16) -> Reply {
    Reply::Respond(HttpResponse::new(code, r#"{"status_message":"error"}"#))
}

pub fn client(transport: &Arc<ScriptedTransport>) -> TmdbClient {
    let transport: Arc<dyn Transport> = transport.clone();
    TmdbClient::new(TmdbConfig::with_api_key(API_KEY), transport).unwrap()
}

/// Let spawned tasks run until `done` holds or the budget runs out.
pub async fn settle_until<F: Fn() -> bool>(done: F) {
    for _ in 0..1000 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
    }
}
