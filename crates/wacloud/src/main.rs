//! wacloud CLI binary.
//!
//! This binary provides command-line access to the media endpoints:
//! - Show metadata for a media id
//! - Download media by id or URL
//! - Delete media by id

use clap::Parser;
use wacloud::{TracingConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, delete_media, download_media, list_kinds, load_config, show_info};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_tracing(&TracingConfig::new(cli.verbose, cli.json_logs))?;

    // Execute the requested command
    match cli.command {
        Commands::Kinds => list_kinds(),

        Commands::Info {
            media_id,
            phone_id,
            format,
        } => {
            let config = load_config(cli.config.as_deref())?;
            show_info(&config, &media_id, phone_id.as_deref(), format).await?;
        }

        Commands::Download {
            target,
            output,
            verify,
        } => {
            let config = load_config(cli.config.as_deref())?;
            download_media(&config, &target, output.as_deref(), verify).await?;
        }

        Commands::Delete { media_id } => {
            let config = load_config(cli.config.as_deref())?;
            delete_media(&config, &media_id).await?;
        }
    }

    Ok(())
}
