//! GitHub API integration module
//!
//! A thin, read-only wrapper over a handful of GitHub REST endpoints.
//!
//! ## Architecture
//!
//! - [`client`]: HTTP session, request primitive and response classification
//! - [`auth`]: Bearer token handling
//! - [`error`]: The single [`GitHubError`] kind every call can fail with
//! - [`types`]: Response payloads and query enums
//! - `users`, `repositories`, `issues`: endpoint methods on [`GitHubClient`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gh_client::github::{GitHubClient, IssueState};
//!
//! # async fn example() -> Result<(), gh_client::github::GitHubError> {
//! let client = GitHubClient::new(Some("your_token".to_string()), None)?;
//! let issues = client
//!     .list_repo_issues("rust-lang", "rust", IssueState::Closed)
//!     .await?;
//! println!("{:?}", issues.as_json());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
mod issues;
mod repositories;
pub mod types;
mod users;

pub use auth::GitHubAuth;
pub use client::GitHubClient;
pub use error::GitHubError;
pub use types::{IssueState, Payload};

pub use crate::constants::github::{DEFAULT_PER_PAGE, DEFAULT_REPO_SORT, DEFAULT_USER_AGENT};
