//! # dbot-telegram
//!
//! Telegram layer for dbot: adapters, [`dbot_core::Bot`] implementation, connection config, REPL runner.
//! Handles only Telegram connectivity and handler-chain dispatch; link building lives in the application crate.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{mask_token, TelegramConfig, DEFAULT_TELEGRAM_API_URL};
pub use runner::run_repl;
