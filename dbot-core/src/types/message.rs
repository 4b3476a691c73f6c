//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{attachment::Attachment, chat::Chat, user::User};

/// A single inbound message: sender, chat, text (or caption) and at most one relayable attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text, or the caption for media messages; empty when neither is present.
    pub content: String,
    /// Short label of what the message carries: "text", "video", "audio", "document" or "other".
    pub message_type: String,
    pub attachment: Option<Attachment>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns true if this is a text message starting with `/`. Media captions never count as commands.
    pub fn is_command(&self) -> bool {
        self.message_type == "text" && self.content.starts_with('/')
    }
}
