//! Polymorphic media references.
//!
//! A piece of media can be addressed three ways: an inline payload, a remote
//! identifier issued by the platform, or a direct link to the content. All three
//! share a [`MediaKind`] and convert into each other without I/O, except for
//! identifier to link, which needs the metadata endpoint (see
//! `MediaClient::resolve_link` in `wacloud_media`).

use crate::MediaKind;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Payload of an inline reference.
///
/// The variant records whether the carried string is already a remote
/// identifier or raw content (typically a link).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlinePayload {
    /// Raw content, not known to be an identifier
    Content(String),
    /// A payload that is a platform-issued identifier
    Identifier(String),
}

impl InlinePayload {
    /// The carried string.
    pub fn as_str(&self) -> &str {
        match self {
            InlinePayload::Content(file) | InlinePayload::Identifier(file) => file,
        }
    }

    /// Whether the payload is a remote identifier.
    pub fn is_identifier(&self) -> bool {
        matches!(self, InlinePayload::Identifier(_))
    }
}

/// Where a media reference points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    /// Inline payload
    Inline(InlinePayload),
    /// Platform-issued identifier of previously uploaded media
    Identifier(String),
    /// Direct URL to the content
    Link(String),
}

/// A media item tagged with its kind.
///
/// # Examples
///
/// ```
/// use wacloud_core::{MediaKind, MediaReference};
///
/// let inline = MediaReference::inline(MediaKind::Image, "1234");
/// let id = inline.to_identifier().unwrap();
/// assert_eq!(id.file(), "1234");
/// assert_eq!(*id.kind(), MediaKind::Image);
///
/// let back = id.to_inline();
/// assert!(back.is_inline());
/// assert_eq!(back.file(), "1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MediaReference {
    /// Kind of media
    kind: MediaKind,
    /// Representation of the media
    source: MediaSource,
}

impl MediaReference {
    /// Creates a reference from a kind and source.
    pub fn new(kind: MediaKind, source: MediaSource) -> Self {
        Self { kind, source }
    }

    /// Inline reference carrying raw content.
    pub fn inline(kind: MediaKind, file: impl Into<String>) -> Self {
        Self::new(kind, MediaSource::Inline(InlinePayload::Content(file.into())))
    }

    /// Inline reference whose payload is already a remote identifier.
    pub fn inline_identifier(kind: MediaKind, id: impl Into<String>) -> Self {
        Self::new(kind, MediaSource::Inline(InlinePayload::Identifier(id.into())))
    }

    /// Remote identifier reference.
    pub fn identifier(kind: MediaKind, id: impl Into<String>) -> Self {
        Self::new(kind, MediaSource::Identifier(id.into()))
    }

    /// Remote link reference.
    pub fn link(kind: MediaKind, link: impl Into<String>) -> Self {
        Self::new(kind, MediaSource::Link(link.into()))
    }

    /// The carried string, whatever the representation.
    pub fn file(&self) -> &str {
        match &self.source {
            MediaSource::Inline(payload) => payload.as_str(),
            MediaSource::Identifier(id) => id,
            MediaSource::Link(link) => link,
        }
    }

    /// Whether this is an inline reference.
    pub fn is_inline(&self) -> bool {
        matches!(self.source, MediaSource::Inline(_))
    }

    /// Whether this is a remote identifier reference.
    pub fn is_identifier(&self) -> bool {
        matches!(self.source, MediaSource::Identifier(_))
    }

    /// Whether this is a remote link reference.
    pub fn is_link(&self) -> bool {
        matches!(self.source, MediaSource::Link(_))
    }

    /// Relabels the reference as a remote identifier.
    ///
    /// Inline payloads of either variant become identifiers. Returns `None` for
    /// links, since identifiers cannot be derived from links.
    pub fn to_identifier(&self) -> Option<Self> {
        match &self.source {
            MediaSource::Inline(payload) => {
                Some(Self::identifier(self.kind, payload.as_str()))
            }
            MediaSource::Identifier(_) => Some(self.clone()),
            MediaSource::Link(_) => None,
        }
    }

    /// Relabels the reference as a remote link.
    ///
    /// Inline payloads of either variant become links. Returns `None` for
    /// identifiers, which need a metadata lookup to learn their link.
    pub fn to_link(&self) -> Option<Self> {
        match &self.source {
            MediaSource::Inline(payload) => Some(Self::link(self.kind, payload.as_str())),
            MediaSource::Link(_) => Some(self.clone()),
            MediaSource::Identifier(_) => None,
        }
    }

    /// Relabels the reference as an inline payload, remembering whether it
    /// came from an identifier.
    pub fn to_inline(&self) -> Self {
        match &self.source {
            MediaSource::Inline(_) => self.clone(),
            MediaSource::Identifier(id) => Self::inline_identifier(self.kind, id.clone()),
            MediaSource::Link(link) => Self::inline(self.kind, link.clone()),
        }
    }

    /// The object embedded in outgoing payloads: `{"id": ...}` for
    /// identifiers, `{"link": ...}` for everything else.
    pub fn to_object(&self) -> MediaObject {
        match &self.source {
            MediaSource::Identifier(id) | MediaSource::Inline(InlinePayload::Identifier(id)) => {
                MediaObject::Id { id: id.clone() }
            }
            MediaSource::Link(link) | MediaSource::Inline(InlinePayload::Content(link)) => {
                MediaObject::Link { link: link.clone() }
            }
        }
    }
}

/// Wire object for a media reference inside an API payload.
///
/// # Examples
///
/// ```
/// use wacloud_core::{MediaKind, MediaReference};
///
/// let object = MediaReference::identifier(MediaKind::Video, "987").to_object();
/// let json = serde_json::to_string(&object).unwrap();
/// assert_eq!(json, r#"{"id":"987"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaObject {
    /// Identifier form
    Id {
        /// Platform-issued media identifier
        id: String,
    },
    /// Link form
    Link {
        /// Direct URL to the content
        link: String,
    },
}
