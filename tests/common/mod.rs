//! Common test utilities for railgen CLI tests.
//!
//! This module provides:
//! - `StubServer`: an in-process axum license service on 127.0.0.1
//! - `run_railgen`: runs the binary isolated from the user's config

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use axum::{
    extract::{OriginalUri, Path as UrlPath, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

pub const API_PREFIX: &str = "/api/v1/license/";

pub const DOMAINS: &str = r#"[
    {"id": 1, "name": "General"},
    {"id": 2, "name": "Healthcare"}
]"#;

pub const SOURCES: &str = r#"[
    {"id": 1, "name": "RAIL Initiative"},
    {"id": 2, "name": "Community"}
]"#;

pub const RESTRICTIONS: &str = r#"[
    {"id": 1, "text": "Not to be used to harm people", "domain_id": 1, "source_id": 1},
    {"id": 2, "text": "Not to be used to deceive", "domain_id": 1, "source_id": 1},
    {"id": 7, "text": "Not to be used for mass surveillance", "domain_id": 1, "source_id": 2},
    {"id": 9, "text": "Not to be used for medical diagnosis", "domain_id": 2, "source_id": 2}
]"#;

/// Knobs for failure scenarios
#[derive(Debug, Clone)]
pub struct StubConfig {
    /// Status of `GET domain/`, which doubles as the availability probe
    pub probe_status: u16,
    pub submit_status: u16,
    pub submit_body: String,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            probe_status: 200,
            submit_status: 200,
            submit_body: r#"{"id": 41}"#.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string
    pub target: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct StubState {
    config: Arc<StubConfig>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubState {
    /// Handlers record before answering, so a finished client always sees
    /// its own requests.
    fn record(&self, method: &Method, uri: &OriginalUri, body: String) {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            target,
            body,
        });
    }
}

/// A panicking handler must not hide the requests recorded so far.
fn lock(requests: &Mutex<Vec<RecordedRequest>>) -> MutexGuard<'_, Vec<RecordedRequest>> {
    requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn start() -> Self {
        Self::start_with(StubConfig::default())
    }

    pub fn start_with(config: StubConfig) -> Self {
        // Bound before the server thread starts, so the port accepts
        // connections as soon as this returns.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        listener
            .set_nonblocking(true)
            .expect("non-blocking stub listener");
        let addr = listener.local_addr().expect("stub server address");

        let state = StubState {
            config: Arc::new(config),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = Arc::clone(&state.requests);
        let app = router(state);

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("stub listener");
                axum::serve(listener, app).await.expect("stub server");
            });
        });

        Self {
            base_url: format!("http://{}{}", addr, API_PREFIX),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn posts(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "POST")
            .collect()
    }
}

fn router(state: StubState) -> Router {
    Router::new()
        .route("/api/v1/license/", get(not_found).post(submit))
        .route("/api/v1/license/domain/", get(domains))
        .route("/api/v1/license/source/", get(sources))
        .route("/api/v1/license/restriction/", get(restrictions))
        .route("/api/v1/license/:id/generate", get(generate))
        .fallback(not_found)
        .with_state(state)
}

fn json_body(status: StatusCode, body: impl Into<String>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body.into()).into_response()
}

async fn domains(State(state): State<StubState>, method: Method, uri: OriginalUri) -> Response {
    state.record(&method, &uri, String::new());
    let status = StatusCode::from_u16(state.config.probe_status).expect("valid probe status");
    if status != StatusCode::OK {
        return (status, [(header::CONTENT_TYPE, "text/plain")], String::new()).into_response();
    }
    json_body(StatusCode::OK, DOMAINS)
}

async fn sources(State(state): State<StubState>, method: Method, uri: OriginalUri) -> Response {
    state.record(&method, &uri, String::new());
    json_body(StatusCode::OK, SOURCES)
}

async fn restrictions(
    State(state): State<StubState>,
    method: Method,
    uri: OriginalUri,
) -> Response {
    state.record(&method, &uri, String::new());
    json_body(StatusCode::OK, RESTRICTIONS)
}

async fn submit(
    State(state): State<StubState>,
    method: Method,
    uri: OriginalUri,
    body: String,
) -> Response {
    state.record(&method, &uri, body);
    let status = StatusCode::from_u16(state.config.submit_status).expect("valid submit status");
    json_body(status, state.config.submit_body.clone())
}

async fn generate(
    State(state): State<StubState>,
    method: Method,
    uri: OriginalUri,
    UrlPath(id): UrlPath<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.record(&method, &uri, String::new());
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return json_body(StatusCode::NOT_FOUND, r#"{"detail": "Not found."}"#);
    }
    let media = query.get("media_type").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("LICENSE {id} {media}\n"),
    )
        .into_response()
}

async fn not_found(State(state): State<StubState>, method: Method, uri: OriginalUri) -> Response {
    state.record(&method, &uri, String::new());
    json_body(StatusCode::NOT_FOUND, r#"{"detail": "Not found."}"#)
}

/// Run railgen in `cwd` with a private HOME so no user config leaks in.
pub fn run_railgen(cwd: &Path, base_url: &str, args: &[&str]) -> Output {
    let home = cwd.join(".home");
    std::fs::create_dir_all(&home).expect("create isolated home");

    Command::new(env!("CARGO_BIN_EXE_railgen"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", &home)
        .env("RAILGEN_API_URL", base_url)
        .env_remove("RAILGEN_LOCKED_SOURCE")
        .env_remove("RAILGEN_TIMEOUT_SECS")
        .env_remove("RAILGEN_LICENSE_TYPE")
        .env_remove("RAILGEN_MEDIA_TYPE")
        .env_remove("RAILGEN_LOG")
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env("no_proxy", "127.0.0.1,localhost")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("run railgen")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse NDJSON stdout into events.
pub fn events(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("stdout line is JSON"))
        .collect()
}
