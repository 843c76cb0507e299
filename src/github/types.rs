//! GitHub API value types
//!
//! Responses are passed through untouched; the only structure imposed here is
//! the JSON/text split decided by the response content type.

use clap::ValueEnum;
use serde_json::Value;
use std::fmt;

/// Body of a successful API response
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `content-type` contained `application/json`
    Json(Value),
    /// Any other content type, returned as the raw body
    Text(String),
}

impl Payload {
    /// Borrow the JSON value, if the response was JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }
}

/// Issue state filter accepted by `GET /repos/{owner}/{repo}/issues`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

impl IssueState {
    /// Query parameter value sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
