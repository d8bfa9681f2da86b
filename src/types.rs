//! Core types for threadbind

use serde::{Deserialize, Serialize};

/// Unique identifier for a status (one message in a reply thread)
///
/// Wire ids are decimal strings too wide for the f64-safe integer range of
/// JSON, so the string form is authoritative end to end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(pub String);

impl StatusId {
    /// Create a new StatusId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StatusId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for StatusId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for StatusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One message in a reply thread, as returned by the status-lookup call
///
/// `in_reply_to` links a reply to its parent, forming a singly-linked chain
/// that ends at the thread root (the one status with no parent).
#[derive(Clone, Debug, Deserialize)]
pub struct Status {
    /// Status identifier
    #[serde(rename = "id_str")]
    pub id: StatusId,

    /// Parent reference; `None` on the thread root
    #[serde(default, rename = "in_reply_to_status_id_str")]
    pub in_reply_to: Option<StatusId>,

    /// Media attachment envelope; statuses without media omit it entirely
    #[serde(default)]
    pub extended_entities: MediaEntities,
}

impl Status {
    /// Photo attachments on this status, in attachment order.
    ///
    /// Non-photo media (video, animated GIFs, anything the API adds later)
    /// is filtered out here.
    pub fn photos(&self) -> impl Iterator<Item = &MediaAttachment> {
        self.extended_entities
            .media
            .iter()
            .filter(|m| m.kind == MediaKind::Photo)
    }
}

/// Envelope object holding a status's media attachment list
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MediaEntities {
    /// Attached media items
    #[serde(default)]
    pub media: Vec<MediaAttachment>,
}

/// A single media attachment on a status
#[derive(Clone, Debug, Deserialize)]
pub struct MediaAttachment {
    /// Direct URL of the media bytes
    pub media_url: String,

    /// Media kind tag
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// Media kinds the API can attach to a status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Still photo — the only kind collected
    Photo,
    /// Video clip
    Video,
    /// Animated GIF
    AnimatedGif,
    /// Any kind this build does not know about
    #[serde(other)]
    Other,
}
