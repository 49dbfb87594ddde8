//! Media kind enumeration.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Classification of media content carried alongside every reference.
///
/// The kind is supplied by the caller and never inferred from content.
///
/// # Examples
///
/// ```
/// use wacloud_core::MediaKind;
///
/// let kind: MediaKind = "sticker".parse().unwrap();
/// assert_eq!(kind, MediaKind::Sticker);
/// assert_eq!(kind.to_string(), "sticker");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Audio content (AAC, MP3, OGG/Opus, etc.)
    Audio,
    /// Document content (PDF, office formats, plain text)
    Document,
    /// Image content (JPEG, PNG)
    Image,
    /// Sticker content (WebP)
    Sticker,
    /// Video content (MP4, 3GPP)
    Video,
}

impl MediaKind {
    /// Wire representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
            MediaKind::Image => "image",
            MediaKind::Sticker => "sticker",
            MediaKind::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaKind::iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown media kind: {}", s))
    }
}
