//! File attachment carried by an inbound message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of file attached to a message. Only these three are relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Video,
    Audio,
    Document,
}

impl AttachmentKind {
    /// Lowercase label, also used as the prefix of synthesized file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Video => "video",
            AttachmentKind::Audio => "audio",
            AttachmentKind::Document => "document",
        }
    }

    /// Extension appended to synthesized names. Generic documents get none.
    pub fn default_extension(&self) -> Option<&'static str> {
        match self {
            AttachmentKind::Video => Some("mp4"),
            AttachmentKind::Audio => Some("mp3"),
            AttachmentKind::Document => None,
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attachment metadata extracted from the transport message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    /// Opaque handle the platform resolves to a download path (Telegram `file_id`).
    pub remote_id: String,
    /// Stable id of the file (Telegram `file_unique_id`).
    pub unique_id: String,
    /// Name supplied by the sender, if any.
    pub file_name: Option<String>,
}

impl Attachment {
    /// Name shown to the user and used in generated links: the supplied name, or
    /// `{kind}_{unique_id}` plus the kind's default extension.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        match self.kind.default_extension() {
            Some(ext) => format!("{}_{}.{}", self.kind, self.unique_id, ext),
            None => format!("{}_{}", self.kind, self.unique_id),
        }
    }
}
