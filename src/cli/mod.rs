//! CLI definitions.

pub mod commands;
pub mod context;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quote-sync")]
#[command(author, version, about = "Local quote collection kept in sync with a remote endpoint")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a random quote
    Show(ShowArgs),
    /// Add a quote and submit it to the server
    Add(AddArgs),
    /// Run one sync pass against the server
    Sync,
    /// Sync periodically until interrupted
    Watch(WatchArgs),
    /// List categories
    Categories,
    /// Export all quotes as JSON
    Export(ExportArgs),
    /// Import quotes from a JSON file
    Import(ImportArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Only pick from this category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Show the last viewed quote again
    #[arg(long)]
    pub last: bool,
}

#[derive(clap::Args)]
pub struct AddArgs {
    /// Quote text
    #[arg(short, long)]
    pub text: String,

    /// Quote category
    #[arg(short = 'C', long)]
    pub category: String,
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Seconds between passes (defaults to sync.interval_secs)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ImportArgs {
    /// JSON file holding an array of {text, category}
    pub file: PathBuf,
}
