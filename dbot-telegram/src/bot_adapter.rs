//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]: plain and MarkdownV2 replies via sendMessage, path resolution via getFile.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Message, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, FileId, LinkPreviewOptions, ParseMode},
};
use tracing::{debug, instrument};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Error text with the bot token removed; the text may be shown to users and logged.
    fn redact(&self, err: impl ToString) -> String {
        let text = err.to_string();
        let token = self.bot.token();
        if token.is_empty() {
            text
        } else {
            text.replace(token, "***")
        }
    }
}

fn link_previews_disabled() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(self.redact(e)))?;
        Ok(())
    }

    async fn reply_markdown(&self, message: &Message, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(link_previews_disabled())
            .await
            .map_err(|e| DbotError::Bot(self.redact(e)))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn resolve_file_path(&self, remote_id: &str) -> Result<String> {
        let file = self
            .bot
            .get_file(FileId(remote_id.to_string()))
            .await
            .map_err(|e| DbotError::FileLookup(self.redact(e)))?;
        debug!(file_size = file.meta.size, "getFile resolved");
        Ok(file.path)
    }
}
