//! Application config: Telegram connection, external streaming service, log file. Loaded from env (after `.env`).

use anyhow::{bail, Context, Result};
use dbot_telegram::TelegramConfig;
use std::env;

use crate::links::LinkSettings;

pub const DEFAULT_LOG_FILE: &str = "logs/file-link-bot.log";

/// Full bot config. `Debug` masks the token (via [`TelegramConfig`]).
#[derive(Debug, Clone)]
pub struct LinkBotConfig {
    pub telegram: TelegramConfig,
    /// EXTERNAL_BASE_URL or VERCEL_BASE_URL; base of the streaming service. Unset is allowed at startup.
    pub external_base_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl LinkBotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN and `base_url` overrides EXTERNAL_BASE_URL.
    /// Fails only when no bot token is available.
    pub fn load(token: Option<String>, base_url: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let external_base_url = base_url
            .or_else(|| env::var("EXTERNAL_BASE_URL").ok())
            .or_else(|| env::var("VERCEL_BASE_URL").ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            external_base_url,
            log_file,
        })
    }

    /// Call after load() to fail fast on malformed URLs.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if let Some(ref base) = self.external_base_url {
            let url = url::Url::parse(base)
                .with_context(|| format!("EXTERNAL_BASE_URL is set but not a valid URL: {}", base))?;
            if !matches!(url.scheme(), "http" | "https") {
                bail!("EXTERNAL_BASE_URL must be an http(s) URL: {}", base);
            }
        }
        Ok(())
    }

    /// Settings handed to the link handler; files are fetched from the configured Bot API server.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings::new(
            Some(self.telegram.bot_token.clone()),
            self.external_base_url.clone(),
        )
        .with_file_api_base(self.telegram.api_base_url())
    }
}
