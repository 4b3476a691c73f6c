//! Wires config, the Telegram adapter and the handler chain, then runs the polling loop.

use anyhow::Result;
use dbot_core::{init_tracing, Bot, HandlerChain};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::config::LinkBotConfig;
use crate::handlers::{CommandHandler, FileLinkHandler};
use crate::links::LinkSettings;

/// Builds the chain: commands first, then the file link handler. Used by [`run_bot`] and by tests with a mock bot.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    settings: LinkSettings,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(bot.clone(), bot_username)))
        .add_handler(Arc::new(FileLinkHandler::new(bot, settings)))
}

/// Main entry: validate config, init logging, build the chain, then poll until the process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: LinkBotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file.as_str()))?;

    match config.external_base_url {
        Some(ref base) => info!(external_base_url = %base, "Streaming service configured"),
        None => warn!("EXTERNAL_BASE_URL is not set; file messages will get a configuration error reply"),
    }
    info!(
        telegram_api = %config.telegram.api_base_url(),
        log_file = %config.log_file,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot_username = Arc::new(RwLock::new(None));
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(bot, config.link_settings(), bot_username.clone());

    info!("Bot started, polling for updates");
    run_repl(teloxide_bot, handler_chain, bot_username).await
}
