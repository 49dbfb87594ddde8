//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the wacloud binary.

mod commands;
mod media;

pub use commands::{Cli, Commands, OutputFormat};
pub use media::{delete_media, download_media, list_kinds, load_config, show_info};
