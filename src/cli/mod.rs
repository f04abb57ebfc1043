//! CLI argument definitions.
//!
//! Flags are parsed by clap. Bare arguments are collected as-is into
//! [`Args::positional`] and classified later by [`crate::positional`], since
//! their meaning depends on their shape rather than their position.


use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Environment variable read when `--uri` is not given.
pub const URI_ENV: &str = "MONGODB_URI";

#[derive(Parser, Debug)]
#[command(
    name = "mongostat",
    author,
    version,
    about = "Monitor basic MongoDB server statistics",
    long_about = None,
    after_help = "\
Examples:
  mongostat                                  # localhost, one sample per second
  mongostat 5                                # sample every 5 seconds
  mongostat mongodb://db.example.com 2       # connect by URI, sample every 2 seconds
  mongostat --uri mongodb://db.example.com 2 # same, URI given by flag
  mongostat --host db.example.com --port 27018 -n 10")]
pub struct Args {
    /// MongoDB connection string
    #[arg(long, env = URI_ENV, value_name = "URI")]
    pub uri: Option<String>,

    /// Server to connect to
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Number of stats lines to print (0 for indefinite)
    #[arg(short = 'n', long)]
    pub rowcount: Option<u64>,

    /// Discover nodes and display stats for all
    #[arg(long, default_value_t = false)]
    pub discover: bool,

    /// Show all optional fields
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Output stat lines as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Don't output column headers
    #[arg(long = "noheaders", default_value_t = false)]
    pub no_headers: bool,

    /// Print sizes and time in human readable format
    #[arg(long = "humanReadable", default_value_t = true, action = ArgAction::Set)]
    pub human_readable: bool,

    /// Display stats in a non-scrolling interface
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    /// Fields to show, comma separated
    #[arg(short = 'o', value_name = "FIELDS")]
    pub columns: Option<String>,

    /// Fields to show in addition to the defaults, comma separated
    #[arg(short = 'O', value_name = "FIELDS")]
    pub append_columns: Option<String>,

    /// JSON file supplying defaults for --uri, --host, --port and --rowcount
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How to print the resolved options
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// More detailed log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, conflicts_with = "verbose", default_value_t = false)]
    pub quiet: bool,

    /// [URI] [SLEEPTIME]: connection string and/or polling interval in seconds
    #[arg(value_name = "ARGS")]
    pub positional: Vec<String>,
}

impl Args {
    /// Default tracing filter for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
