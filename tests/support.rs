//! Common test support utilities and fixtures
//!
//! [`MockGitHub`] is a throwaway axum server on `127.0.0.1:0` that answers
//! every request with one canned response and records what it received.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::HeaderMap,
    response::Response,
};
use gh_client::{ClientConfig, GitHubClient};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Response the mock server returns for every request
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl MockResponse {
    /// JSON body with GitHub's content type
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            headers: vec![(
                "content-type".to_string(),
                "application/json; charset=utf-8".to_string(),
            )],
            body: body.to_string(),
        }
    }

    /// Plain text body
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: body.to_string(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct MockState {
    response: Arc<MockResponse>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockGitHub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGitHub {
    /// Start serving `response` on a random local port
    pub async fn start(response: MockResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = MockState {
            response: Arc::new(response),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("Mock server received no requests")
    }

    /// Client pointed at this server, with an explicit token (or none)
    pub fn client(&self, token: Option<&str>) -> GitHubClient {
        let mut config = ClientConfig::new().with_base_url(&self.base_url);
        if let Some(token) = token {
            config = config.with_token(token);
        }
        GitHubClient::with_config(config).expect("Failed to build client")
    }
}

async fn handle(State(state): State<MockState>, request: Request) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        headers: request.headers().clone(),
    });

    let mut builder = Response::builder().status(state.response.status);
    for (name, value) in &state.response.headers {
        builder = builder.header(name, value);
    }
    builder
        .body(Body::from(state.response.body.clone()))
        .expect("Invalid mock response")
}

/// Result of running the gh-client binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the gh-client binary against `base_url` with no token in its environment
pub async fn run_cli(args: &[&str], base_url: &str, envs: &[(&str, &str)]) -> CliOutput {
    let workdir = tempfile::TempDir::new().expect("Failed to create temp directory");
    run_cli_in(workdir.path(), args, base_url, envs).await
}

/// Like [`run_cli`], but with `workdir` as the working directory
pub async fn run_cli_in(
    workdir: &std::path::Path,
    args: &[&str],
    base_url: &str,
    envs: &[(&str, &str)],
) -> CliOutput {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_gh-client"));
    cmd.args(args)
        .current_dir(workdir)
        .env("GITHUB_API_URL", base_url)
        .env("NO_COLOR", "1")
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");
    for (name, value) in envs {
        cmd.env(name, value);
    }

    let output = cmd.output().await.expect("Failed to execute gh-client");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
