//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::LinkBotConfig;

#[derive(Parser)]
#[command(name = "file-link-bot")]
#[command(about = "Telegram bot that answers files with streaming and download links", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override BOT_TOKEN and EXTERNAL_BASE_URL).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        base_url: Option<String>,
    },
}

/// Load LinkBotConfig from environment with optional CLI overrides.
pub fn load_config(token: Option<String>, base_url: Option<String>) -> Result<LinkBotConfig> {
    LinkBotConfig::load(token, base_url)
}
