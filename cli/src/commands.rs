pub mod filter;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ipfilter_common::config::Config;

#[derive(Parser)]
#[command(name = "ipfilter")]
#[command(version)]
#[command(about = "Sorts IPv4 addresses and prints filtered views of them.")]
pub struct CommandLine {
    /// File with one address per line (reads standard input when omitted)
    pub input: Option<PathBuf>,
    /// Show more diagnostics on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only report fatal errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Exit with status 0 even if the input is malformed
    #[arg(long)]
    pub exit_zero: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            input: self.input,
            quiet: self.quiet,
            verbose: self.verbose,
            exit_zero: self.exit_zero,
        }
    }
}
