//! `/start` and `/help`. Other commands are swallowed so they never reach the file handler.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::reply;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,
    #[command(description = "explain how to get links.")]
    Help,
}

impl Command {
    pub fn reply_text(&self) -> &'static str {
        match self {
            Command::Start => reply::WELCOME,
            Command::Help => reply::HELP,
        }
    }
}

/// Answers supported commands; `/cmd@other_bot` and unknown commands end the chain silently.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    /// `bot_username` is filled by the runner after getMe; until then only bare `/cmd` matches.
    pub fn new(bot: Arc<dyn Bot>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command() {
            return Ok(HandlerResponse::Ignore);
        }

        // Arguments (e.g. a /start deep-link payload) are ignored.
        let command_word = command_word(&message.content);
        let username = self.bot_username.read().await.clone().unwrap_or_default();
        match Command::parse(&command_word, &username) {
            Ok(command) => {
                debug!(command = ?command, "Answering command");
                let text = command.reply_text();
                self.bot.reply_to(message, text).await?;
                Ok(HandlerResponse::Reply(text.to_string()))
            }
            Err(e) => {
                let err = HandlerError::InvalidCommand(command_word);
                debug!(error = %err, reason = %e, "Ignoring unsupported command");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}

/// First word of the text with the command name lowercased; a `@botname` suffix is kept as sent.
fn command_word(content: &str) -> String {
    let word = content.split_whitespace().next().unwrap_or_default();
    match word.split_once('@') {
        Some((name, bot)) => format!("{}@{}", name.to_lowercase(), bot),
        None => word.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_word_lowercases_name_only() {
        assert_eq!(command_word("/Start ref123"), "/start");
        assert_eq!(command_word("/HELP@LinkBot"), "/help@LinkBot");
        assert_eq!(command_word("  /help  "), "/help");
    }

    #[test]
    fn test_mixed_case_commands_parse() {
        assert_eq!(Command::parse(&command_word("/START"), "linkbot").unwrap(), Command::Start);
        assert_eq!(
            Command::parse(&command_word("/Help@linkbot"), "linkbot").unwrap(),
            Command::Help
        );
    }
}
