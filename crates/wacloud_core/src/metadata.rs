//! Server-returned media metadata.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize, de};
use sha2::{Digest, Sha256};

/// Metadata of an uploaded media object.
///
/// `file_size` is a byte count. The Graph API has been observed to send it both
/// as a JSON string (`"123"`) and as a JSON integer (`123`); either decodes to
/// `u64`, and serialization always emits an integer.
///
/// # Examples
///
/// ```
/// use wacloud_core::MediaMetadata;
///
/// let body = r#"{"messaging_product":"whatsapp","url":"https://x/y",
///     "mime_type":"image/jpeg","sha256":"abc","file_size":"123","id":"m1"}"#;
/// let metadata: MediaMetadata = serde_json::from_str(body).unwrap();
/// assert_eq!(metadata.id(), "m1");
/// assert_eq!(*metadata.file_size(), 123);
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters,
)]
#[builder(setter(into))]
#[serde(default)]
pub struct MediaMetadata {
    /// Messaging product tag (always "whatsapp" today)
    #[builder(default = "\"whatsapp\".to_string()")]
    messaging_product: String,
    /// Short-lived URL of the content
    url: String,
    /// MIME type of the content
    mime_type: String,
    /// Hex-encoded SHA-256 digest of the content
    #[builder(default)]
    sha256: String,
    /// Size of the content in bytes
    #[builder(default)]
    #[serde(deserialize_with = "deserialize_file_size")]
    file_size: u64,
    /// Platform-issued media identifier
    id: String,
}

impl MediaMetadata {
    /// Creates a new builder for `MediaMetadata`.
    pub fn builder() -> MediaMetadataBuilder {
        MediaMetadataBuilder::default()
    }

    /// Checks downloaded bytes against the advertised SHA-256 digest.
    ///
    /// Returns `false` when no digest was advertised.
    pub fn verify_content(&self, data: &[u8]) -> bool {
        if self.sha256.is_empty() {
            return false;
        }
        let mut hasher = Sha256::new();
        hasher.update(data);
        let actual = format!("{:x}", hasher.finalize());
        actual.eq_ignore_ascii_case(&self.sha256)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireFileSize {
    Number(u64),
    Text(String),
}

fn deserialize_file_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireFileSize::deserialize(deserializer)? {
        WireFileSize::Number(size) => Ok(size),
        WireFileSize::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid file_size {:?}: {}", text, e))),
    }
}
