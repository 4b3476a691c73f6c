//! Turns a file message into streaming and download links on the external service.
//!
//! Flow: attachment present? → settings present? → getFile → source URL → [`LinkPair`] → MarkdownV2 reply.
//! Every failure ends in a reply to the user, including a rejected links message; only a failed plain
//! reply is returned as an error.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{
    Attachment, Bot, DbotError, Handler, HandlerError, HandlerResponse, Message, Result,
};
use tracing::{debug, error, info, instrument, warn};

use crate::links::{source_url, LinkPair, LinkSettings};
use crate::reply;

/// Terminal handler: always replies, so it always ends the chain.
pub struct FileLinkHandler {
    bot: Arc<dyn Bot>,
    settings: LinkSettings,
}

impl FileLinkHandler {
    pub fn new(bot: Arc<dyn Bot>, settings: LinkSettings) -> Self {
        Self { bot, settings }
    }

    /// Resolves the attachment on the platform and builds its links.
    /// Settings are checked first so a misconfigured bot never calls getFile.
    pub async fn build_links(&self, attachment: &Attachment) -> Result<LinkPair> {
        let base_url = self.settings.external_base_url()?;
        let token = self.settings.bot_token()?;

        let file_path = self.bot.resolve_file_path(&attachment.remote_id).await?;
        let src = source_url(self.settings.file_api_base(), token, &file_path);

        Ok(LinkPair::build(base_url, &attachment.display_name(), &src))
    }

    async fn reply_plain(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for FileLinkHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(attachment) = &message.attachment else {
            debug!(message_type = %message.message_type, "No file in message, sending guidance");
            return self.reply_plain(message, reply::GUIDANCE.to_string()).await;
        };

        match self.build_links(attachment).await {
            Ok(links) => {
                info!(
                    attachment_kind = %attachment.kind,
                    file_name = %links.file_name,
                    "Links generated"
                );
                let text = reply::links_message(&links);
                match self.bot.reply_markdown(message, &text).await {
                    Ok(()) => Ok(HandlerResponse::Reply(text)),
                    // e.g. "message is too long" for very long non-ASCII names
                    Err(e) => {
                        error!(error = %e, "Failed to send links reply");
                        self.reply_plain(message, reply::processing_error(&e)).await
                    }
                }
            }
            Err(DbotError::Handler(HandlerError::MissingSetting(setting))) => {
                warn!(setting = setting, "Required setting missing, refusing to build links");
                self.reply_plain(message, reply::config_error(setting)).await
            }
            Err(e) => {
                error!(
                    error = %e,
                    attachment_kind = %attachment.kind,
                    "Error processing file"
                );
                self.reply_plain(message, reply::processing_error(&e)).await
            }
        }
    }
}
