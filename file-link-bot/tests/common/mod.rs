//! Shared helpers for file-link-bot integration tests.
#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Attachment, AttachmentKind, Chat, Message, User};

pub const TEST_TOKEN: &str = "123456789:AAHtestTokenValue";
pub const TEST_BASE_URL: &str = "https://x.example";

pub fn text_message(content: &str) -> Message {
    message(content, None)
}

pub fn file_message(kind: AttachmentKind, file_name: Option<&str>, unique_id: &str) -> Message {
    message(
        "",
        Some(Attachment {
            kind,
            remote_id: format!("remote-{}", unique_id),
            unique_id: unique_id.to_string(),
            file_name: file_name.map(String::from),
        }),
    )
}

fn message(content: &str, attachment: Option<Attachment>) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 123,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: attachment
            .as_ref()
            .map(|a| a.kind.to_string())
            .unwrap_or_else(|| "text".to_string()),
        attachment,
        created_at: Utc::now(),
    }
}
