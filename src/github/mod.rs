//! GitHub REST API access for the watcher.
//!
//! Provides the `IssueSource` capability trait and a reqwest-based client
//! authenticated with a personal access token.

mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod models;

pub use client::{GitHubClient, IssueSource};
pub use error::{FetchError, Result};
pub use models::Issue;
