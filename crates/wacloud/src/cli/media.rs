//! Media command handlers.

use super::OutputFormat;
use std::path::Path;
use strum::IntoEnumIterator;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, instrument};
use wacloud::{
    ConfigError, JsonError, MediaClient, MediaKind, MediaMetadata, ReqwestTransport,
    TransportError, TransportErrorKind, WacloudConfig, WacloudResult, collect_bytes, write_to,
};

/// Load configuration from `path`, or from the layered lookup.
pub fn load_config(path: Option<&Path>) -> WacloudResult<WacloudConfig> {
    match path {
        Some(path) => {
            Ok(WacloudConfig::from_file(path)?.with_env_from(|key| std::env::var(key).ok()))
        }
        None => WacloudConfig::load(),
    }
}

fn client(config: &WacloudConfig) -> WacloudResult<MediaClient<ReqwestTransport>> {
    let settings = config.settings()?;
    match config.timeout() {
        Some(timeout) => MediaClient::with_timeout(settings, timeout),
        None => MediaClient::from_settings(settings),
    }
}

/// Print every media kind, one per line.
pub fn list_kinds() {
    for kind in MediaKind::iter() {
        println!("{}", kind);
    }
}

/// Print metadata for a media id.
#[instrument(skip(config))]
pub async fn show_info(
    config: &WacloudConfig,
    media_id: &str,
    phone_id: Option<&str>,
    format: OutputFormat,
) -> WacloudResult<()> {
    let client = client(config)?;
    let metadata = match phone_id {
        Some(phone_id) => client.fetch_metadata_for_account(phone_id, media_id).await?,
        None => client.fetch_metadata(media_id).await?,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&metadata)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_metadata(&metadata),
    }
    Ok(())
}

fn print_metadata(metadata: &MediaMetadata) {
    println!("Media {}", metadata.id());
    println!("{:-<60}", "");
    println!("MIME type: {}", metadata.mime_type());
    println!("Size:      {} bytes", metadata.file_size());
    println!("SHA-256:   {}", metadata.sha256());
    println!("URL:       {}", metadata.url());
}

/// Download media by id or URL into `output`, or stdout.
#[instrument(skip(config))]
pub async fn download_media(
    config: &WacloudConfig,
    target: &str,
    output: Option<&Path>,
    verify: bool,
) -> WacloudResult<()> {
    let direct = is_url(target);
    if direct && verify {
        return Err(ConfigError::new("--verify needs a media id; a URL carries no digest").into());
    }

    let client = client(config)?;

    let written = if direct {
        let stream = client.download(target).await?;
        let mut sink = open_sink(output).await?;
        write_to(stream, &mut sink).await?
    } else {
        let (metadata, stream) = client.download_media(target).await?;
        if verify {
            let bytes = collect_bytes(stream).await?;
            if !metadata.verify_content(&bytes) {
                return Err(TransportError::new(TransportErrorKind::Integrity(format!(
                    "expected sha256 {}",
                    metadata.sha256()
                )))
                .into());
            }
            let mut sink = open_sink(output).await?;
            sink.write_all(&bytes).await.map_err(write_error)?;
            sink.flush().await.map_err(write_error)?;
            bytes.len() as u64
        } else {
            let mut sink = open_sink(output).await?;
            write_to(stream, &mut sink).await?
        }
    };

    info!(bytes = written, "Download complete");
    Ok(())
}

/// Delete media by id.
#[instrument(skip(config))]
pub async fn delete_media(config: &WacloudConfig, media_id: &str) -> WacloudResult<()> {
    client(config)?.delete_by_id(media_id).await?;
    println!("Deleted {}", media_id);
    Ok(())
}

fn is_url(target: &str) -> bool {
    reqwest::Url::parse(target)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

async fn open_sink(output: Option<&Path>) -> WacloudResult<Box<dyn AsyncWrite + Unpin + Send>> {
    match output {
        Some(path) => {
            let file = tokio::fs::File::create(path).await.map_err(|e| {
                TransportError::new(TransportErrorKind::Write(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(tokio::io::stdout())),
    }
}

fn write_error(e: std::io::Error) -> TransportError {
    TransportError::new(TransportErrorKind::Write(e.to_string()))
}
