use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "site-utils")]
#[command(about = "Presentation helpers and settings checks for the blog")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Estimate reading time for a text or HTML file
    ReadingTime {
        /// File to analyze, or `-` for stdin
        file: PathBuf,

        /// Reading speed; falls back to the settings file, then 200
        #[arg(long)]
        wpm: Option<u32>,

        /// Path to TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a date the way post headers show it
    FormatDate {
        date: String,

        /// Print "Invalid Date" instead of failing on bad input
        #[arg(long)]
        lossy: bool,
    },

    /// Load and validate a settings file
    CheckConfig {
        #[arg(short, long, default_value = "site.toml")]
        config: PathBuf,
    },
}
