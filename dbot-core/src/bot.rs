//! Bot abstraction for replying to users and resolving file handles.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in dbot-telegram.
//! Tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Outbound operations a handler may perform against the messaging platform.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends plain text back to the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends MarkdownV2 text (already escaped) back to the chat the message came from, with link previews disabled.
    async fn reply_markdown(&self, message: &Message, text: &str) -> Result<()>;

    /// Exchanges a remote file handle for a server-relative download path.
    async fn resolve_file_path(&self, remote_id: &str) -> Result<String>;
}
