use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprinkler-plus",
    version,
    about = "Let sprinklers water garden pots and pet bowls"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the start-of-day pass over a world snapshot
    Run {
        /// World snapshot (.yaml or .json)
        #[arg(short, long)]
        world: PathBuf,

        /// Write the updated world here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate config (and a snapshot, if given) and list the rules
    Check {
        /// World snapshot to validate
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
    /// Interactively choose the options and write the config
    Init,
    /// Write the default config
    Reset,
}
