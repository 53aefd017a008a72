mod cli;
mod config;
mod github;
mod watch;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Watch(args) => watch::run(&args)?,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "secwatch",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Diagnostics go to stderr via tracing; stdout is reserved for the
/// notification and error lines the watch loop prints.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
