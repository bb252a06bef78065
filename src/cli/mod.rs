//! CLI argument parsing for scrollkeep
//!
//! Global flags: --state, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompressArgs, InitArgs, RecallArgs, ShowArgs, StatsArgs};
use parse::parse_format;
pub use scrollkeep_core::format::OutputFormat;

/// Scrollkeep - compress conversations into scrolls and recall them by relevance
#[derive(Parser, Debug)]
#[command(name = "scrollkeep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path of the JSON state file
    #[arg(long, global = true, env = "SCROLLKEEP_STATE")]
    pub state: Option<PathBuf>,

    /// TOML engine configuration overriding the persisted one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "scrollkeep_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty state file
    Init(InitArgs),

    /// Compress a conversation segment into a scroll and store it
    Compress(CompressArgs),

    /// Recall scrolls relevant to a query
    Recall(RecallArgs),

    /// List stored scrolls
    List,

    /// Show one scroll
    Show(ShowArgs),

    /// Show the theme codex
    Codex,

    /// Show store statistics
    Stats(StatsArgs),
}
