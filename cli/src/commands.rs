pub mod expand;

use clap::{ArgAction, Parser};
use ipexpand_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "ipexpand", version)]
#[command(about = "Expands CIDR blocks and dashed IPv4 ranges into addresses.")]
#[command(after_help = "Dashed ranges give each octet as N, N-M, -M, N- or -, e.g. 10.0.1-2.254-\n\
                        Put `--` before ranges that start with a dash: ipexpand -- -1.0.-.1")]
pub struct CommandLine {
    /// Ranges to expand, in CIDR (10.0.0.0/24) or dashed (10.0.0-3.1-) notation
    #[arg(value_name = "RANGE", allow_hyphen_values = true)]
    pub ranges: Vec<String>,

    /// Hide status lines (-q) and the summary (-qq)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show parser activity (-v) and state transitions (-vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Skip any range that would expand to more than N addresses
    #[arg(short, long, value_name = "N")]
    pub limit: Option<u64>,

    /// Print the number of addresses of each range instead of the addresses
    #[arg(short, long)]
    pub count: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            limit: self.limit,
            count_only: self.count,
        }
    }
}
