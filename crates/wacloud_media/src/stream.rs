//! Helpers for consuming download streams.

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use wacloud_error::{TransportError, TransportErrorKind, WacloudResult};
use wacloud_interface::ByteStream;

/// Drain a stream into memory.
///
/// # Errors
///
/// Returns the first error yielded by the stream.
pub async fn collect_bytes(mut stream: ByteStream) -> WacloudResult<Bytes> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk?);
    }
    Ok(buffer.freeze())
}

/// Copy a stream into a writer, returning the number of bytes written.
///
/// # Errors
///
/// Returns the first stream error, or a `TransportError` if writing fails.
pub async fn write_to<W>(mut stream: ByteStream, writer: &mut W) -> WacloudResult<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| TransportError::new(TransportErrorKind::Write(e.to_string())))?;
        written += chunk.len() as u64;
    }
    writer
        .flush()
        .await
        .map_err(|e| TransportError::new(TransportErrorKind::Write(e.to_string())))?;
    Ok(written)
}
