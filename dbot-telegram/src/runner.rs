//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain. Calls get_me first to populate bot_username.

use anyhow::Result;
use dbot_core::{HandlerChain, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL with the given teloxide Bot, HandlerChain, and bot_username cache.
/// Calls get_me() before starting and writes the username into bot_username; each message is converted to
/// core::Message and passed to chain.handle in its own task, so a failing or slow message never blocks polling.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands addressed as /cmd@bot will not match"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match &core_msg.attachment {
                Some(attachment) => info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    attachment_kind = %attachment.kind,
                    file_name = %attachment.display_name(),
                    "Received file message"
                ),
                None => info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_type = %core_msg.message_type,
                    "Received message"
                ),
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
