//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// wacloud - WhatsApp Cloud media client
#[derive(Parser, Debug)]
#[command(name = "wacloud")]
#[command(about = "Inspect, download and delete WhatsApp Cloud media", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the layered lookup)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show metadata for a media id
    Info {
        /// Media id
        media_id: String,

        /// Business phone account id the media belongs to
        #[arg(long)]
        phone_id: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Download media by id or direct URL
    Download {
        /// Media id, or an absolute http(s) URL
        target: String,

        /// Destination file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Check the content against the advertised SHA-256 digest
        #[arg(long)]
        verify: bool,
    },

    /// Delete media by id
    Delete {
        /// Media id
        media_id: String,
    },

    /// List supported media kinds
    Kinds,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
