use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::watch::WatchArgs;

#[derive(Parser)]
#[command(
    name = "secwatch",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Watch a repository for security-labeled issues
    Watch(WatchArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
