//! Minimal Telegram connectivity config: token and optional Bot API server URL.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;
use std::fmt;

/// Public Bot API server; also serves files under `/file/bot<token>/<path>`.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Masks a secret for safe logging: first 7 + "***" + last 4 chars; secrets of length <= 11 become "***".
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Telegram connection settings. `Debug` masks the token.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; one of them must be set and non-empty.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token and the public Bot API server.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Fails if TELEGRAM_API_URL is set but not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            reqwest::Url::parse(url_str).with_context(|| {
                format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )
            })?;
        }
        Ok(())
    }

    /// Base URL of the Bot API server, without trailing slash. File downloads live under it.
    pub fn api_base_url(&self) -> String {
        self.telegram_api_url
            .as_deref()
            .unwrap_or(DEFAULT_TELEGRAM_API_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Creates the teloxide Bot, pointed at the custom API server when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
