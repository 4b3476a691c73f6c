//! Link construction: Telegram file URL, the two encodings, and the streaming/download link pair.
//!
//! Two different encodings are used and must not be swapped:
//! - the source file URL is a query *value*, so it is form-urlencoded (space → `+`);
//! - the file name is a path *segment*, so it is percent-encoded (space → `%20`).

use std::fmt;

use dbot_core::HandlerError;
use dbot_telegram::{mask_token, DEFAULT_TELEGRAM_API_URL};
use url::form_urlencoded;

pub const WATCH_PATH: &str = "watch";
pub const DOWNLOAD_PATH: &str = "download";

/// Immutable settings the link handler needs, read once at startup.
#[derive(Clone)]
pub struct LinkSettings {
    bot_token: Option<String>,
    external_base_url: Option<String>,
    file_api_base: String,
}

impl fmt::Debug for LinkSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkSettings")
            .field("bot_token", &self.bot_token.as_deref().map(mask_token))
            .field("external_base_url", &self.external_base_url)
            .field("file_api_base", &self.file_api_base)
            .finish()
    }
}

impl LinkSettings {
    /// Empty strings count as unset. Files are served from the public Bot API server.
    pub fn new(bot_token: Option<String>, external_base_url: Option<String>) -> Self {
        Self {
            bot_token: bot_token.filter(|t| !t.trim().is_empty()),
            external_base_url: external_base_url
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
            file_api_base: DEFAULT_TELEGRAM_API_URL.to_string(),
        }
    }

    /// Serves files from another Bot API server (e.g. a self-hosted one).
    pub fn with_file_api_base(mut self, file_api_base: impl Into<String>) -> Self {
        self.file_api_base = file_api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn bot_token(&self) -> Result<&str, HandlerError> {
        self.bot_token
            .as_deref()
            .ok_or(HandlerError::MissingSetting("BOT_TOKEN"))
    }

    pub fn external_base_url(&self) -> Result<&str, HandlerError> {
        self.external_base_url
            .as_deref()
            .ok_or(HandlerError::MissingSetting("EXTERNAL_BASE_URL"))
    }

    pub fn file_api_base(&self) -> &str {
        &self.file_api_base
    }
}

/// Direct download URL of a Telegram file: `{api}/file/bot{token}/{path}`.
/// Contains the bot token; never log it.
pub fn source_url(file_api_base: &str, bot_token: &str, file_path: &str) -> String {
    format!("{}/file/bot{}/{}", file_api_base, bot_token, file_path)
}

/// Encodes a query-string value: everything but `[A-Za-z0-9*-._]` is escaped and spaces become `+`.
pub fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encodes a single path segment: everything but `[A-Za-z0-9-._~]` is escaped; spaces become `%20`.
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Streaming and download links for one file on the external service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPair {
    /// Unencoded name, as shown to the user.
    pub file_name: String,
    pub streaming_link: String,
    pub download_link: String,
}

impl LinkPair {
    /// Builds `{base}/watch/{name}?file_url={src}` and `{base}/download/{name}?file_url={src}`.
    pub fn build(external_base_url: &str, file_name: &str, source_url: &str) -> Self {
        let base = external_base_url.trim_end_matches('/');
        let name = encode_path_segment(file_name);
        let src = encode_query_value(source_url);
        let link = |verb: &str| format!("{}/{}/{}?file_url={}", base, verb, name, src);

        Self {
            file_name: file_name.to_string(),
            streaming_link: link(WATCH_PATH),
            download_link: link(DOWNLOAD_PATH),
        }
    }
}
