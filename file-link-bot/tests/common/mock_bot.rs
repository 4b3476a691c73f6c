//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Records every reply and getFile call so tests can assert on the reply text and on
//! whether the platform was contacted, without hitting Telegram.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Message, Result};
use std::sync::{Arc, Mutex};

/// How a reply was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyFormat {
    Plain,
    Markdown,
}

/// One recorded outbound message.
#[derive(Debug, Clone)]
pub struct SentReply {
    pub chat_id: i64,
    pub format: ReplyFormat,
    pub text: String,
}

/// Mock Bot whose getFile either returns a fixed path or fails with a fixed error text.
pub struct MockBot {
    file_path: std::result::Result<String, String>,
    markdown_error: Option<String>,
    resolved_ids: Mutex<Vec<String>>,
    sent: Mutex<Vec<SentReply>>,
}

impl MockBot {
    /// getFile succeeds with `file_path`.
    pub fn resolving(file_path: &str) -> Arc<Self> {
        Arc::new(Self {
            file_path: Ok(file_path.to_string()),
            markdown_error: None,
            resolved_ids: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        })
    }

    /// getFile fails with DbotError::FileLookup(`error`).
    pub fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            file_path: Err(error.to_string()),
            markdown_error: None,
            resolved_ids: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        })
    }

    /// getFile succeeds with `file_path` but every MarkdownV2 reply is rejected with DbotError::Bot(`error`).
    /// Rejected replies are not recorded.
    pub fn rejecting_markdown(file_path: &str, error: &str) -> Arc<Self> {
        Arc::new(Self {
            file_path: Ok(file_path.to_string()),
            markdown_error: Some(error.to_string()),
            resolved_ids: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        })
    }

    /// Remote ids passed to getFile, in call order.
    pub fn resolved_ids(&self) -> Vec<String> {
        self.resolved_ids.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }

    /// The only reply sent; panics if there is not exactly one.
    pub fn single_reply(&self) -> SentReply {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one reply, got {:?}", sent);
        sent[0].clone()
    }

    fn record(&self, chat_id: i64, format: ReplyFormat, text: &str) {
        self.sent.lock().unwrap().push(SentReply {
            chat_id,
            format,
            text: text.to_string(),
        });
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat.id, ReplyFormat::Plain, text);
        Ok(())
    }

    async fn reply_markdown(&self, message: &Message, text: &str) -> Result<()> {
        if let Some(error) = &self.markdown_error {
            return Err(DbotError::Bot(error.clone()));
        }
        self.record(message.chat.id, ReplyFormat::Markdown, text);
        Ok(())
    }

    async fn resolve_file_path(&self, remote_id: &str) -> Result<String> {
        self.resolved_ids.lock().unwrap().push(remote_id.to_string());
        self.file_path.clone().map_err(DbotError::FileLookup)
    }
}
