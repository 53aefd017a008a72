//! The fetch-filter-notify poll loop.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;

use super::filter::filter_issues;
use super::notify::notify;
use crate::github::IssueSource;

/// Immutable per-process watch settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    /// Labels an issue must all carry to be fetched.
    pub labels: Vec<String>,
    /// Case-insensitive keywords matched against issue titles.
    pub keywords: Vec<String>,
    /// Delay between poll cycles.
    pub interval: Duration,
}

/// Runs the poll cycle against an issue source until shut down.
///
/// Holds no state across cycles: the same open matching issue is reported
/// again on every tick.
pub struct Poller<S> {
    source: S,
    settings: PollSettings,
}

impl<S: IssueSource> Poller<S> {
    pub fn new(source: S, settings: PollSettings) -> Self {
        Self { source, settings }
    }

    /// Run one fetch-filter-notify cycle.
    ///
    /// Fetch failures are absorbed here: one diagnostic line on stdout, and
    /// the caller tries again on the next tick.
    pub async fn tick(&self) {
        match self.source.fetch_open_issues(&self.settings.labels).await {
            Ok(issues) => {
                let matched = filter_issues(issues, &self.settings.keywords);
                if !matched.is_empty() {
                    notify(&matched);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "poll cycle failed");
                println!("Error fetching issues: {err}");
            }
        }
    }

    /// Run cycles on the configured interval until `shutdown` flips to true.
    ///
    /// The interval sleep races against the shutdown signal, so cancellation
    /// does not wait out the remainder of an interval. The receiver's channel
    /// closing also stops the loop.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        loop {
            self.tick().await;

            tokio::select! {
                _ = sleep(self.settings.interval) => {}
                _ = shutdown.wait_for(|stop| *stop) => {
                    tracing::debug!("shutdown requested, stopping watch loop");
                    return;
                }
            }
        }
    }
}
