//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Show the User-Agent header the msrest pipeline attaches to requests.
///
/// Without `--url` the header is computed and printed. With `--url` one GET
/// request is sent through the pipeline and its status reported.
#[derive(Parser, Debug)]
#[command(name = "msrest-ua")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Runtime token in `name/version` form (repeatable, order preserved)
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Caller-supplied User-Agent; the filter leaves it unchanged
    #[arg(short = 'H', long)]
    pub user_agent: Option<String>,

    /// Send a GET request to this URL through the pipeline
    #[arg(long)]
    pub url: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file path (defaults to $XDG_CONFIG_HOME/msrest/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTTP connect timeout in seconds (1-3600)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: Option<u64>,

    /// HTTP read timeout in seconds, also bounding the whole request (1-3600)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub read_timeout: Option<u64>,
}
