//! # file-link-bot
//!
//! Telegram bot that answers a video, audio or document with two links on an external streaming service:
//! `{base}/watch/{name}?file_url=...` and `{base}/download/{name}?file_url=...`, where `file_url` is the
//! Telegram download URL of the file. Built on dbot-core (handler chain) and dbot-telegram (transport).

pub mod cli;
pub mod config;
pub mod handlers;
pub mod links;
pub mod reply;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::LinkBotConfig;
pub use handlers::{Command, CommandHandler, FileLinkHandler};
pub use links::{
    encode_path_segment, encode_query_value, source_url, LinkPair, LinkSettings,
};
pub use runner::{build_handler_chain, run_bot};
