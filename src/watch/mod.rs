//! Watch command: poll a repository for security-labeled issues.
//!
//! Each cycle fetches the open issues carrying the configured labels, keeps
//! the ones whose title matches a keyword, prints one line per match to
//! stdout, then sleeps for the configured interval. The loop never exits on
//! its own; Ctrl-C (or `--once`) stops it.

mod filter;
mod notify;
mod poller;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use tokio::sync::watch;

use crate::config::{self, Config};
use crate::github::GitHubClient;
use poller::{PollSettings, Poller};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct WatchArgs {
    /// Path to a config file (default: <config dir>/secwatch/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Repository owner or organization
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long)]
    pub repo: Option<String>,

    /// Seconds between poll cycles
    #[arg(long)]
    pub interval: Option<u64>,

    /// Required issue label (repeatable; replaces the configured set)
    #[arg(long = "label")]
    pub labels: Vec<String>,

    /// Title keyword to match (repeatable; replaces the configured set)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Run a single poll cycle and exit
    #[arg(long)]
    pub once: bool,
}

#[tokio::main]
pub async fn run(args: &WatchArgs) -> anyhow::Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let (owner, repo) = resolve_repository(args, &config)?;
    let token = config::resolve_token(&config)?;
    let settings = resolve_settings(args, &config);

    let client = GitHubClient::new(&owner, &repo, &token)?;
    let poller = Poller::new(client, settings);

    if args.once {
        poller.tick().await;
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    tracing::info!(%owner, %repo, "watching for security issues");
    poller.run(shutdown_rx).await;
    Ok(())
}

fn resolve_repository(args: &WatchArgs, config: &Config) -> anyhow::Result<(String, String)> {
    let owner = args
        .owner
        .clone()
        .or_else(|| config.repository.owner.clone())
        .context("no repository owner configured (set repository.owner or pass --owner)")?;
    let repo = args
        .repo
        .clone()
        .or_else(|| config.repository.repo.clone())
        .context("no repository name configured (set repository.repo or pass --repo)")?;
    Ok((owner, repo))
}

/// CLI flags override the config file; a repeated flag replaces the whole
/// configured set rather than appending to it.
fn resolve_settings(args: &WatchArgs, config: &Config) -> PollSettings {
    PollSettings {
        labels: if args.labels.is_empty() {
            config.watch.labels.clone()
        } else {
            args.labels.clone()
        },
        keywords: if args.keywords.is_empty() {
            config.watch.keywords.clone()
        } else {
            args.keywords.clone()
        },
        interval: Duration::from_secs(args.interval.unwrap_or(config.watch.interval_secs)),
    }
}
