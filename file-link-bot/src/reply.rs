//! User-facing reply texts.

use std::fmt::Display;

use teloxide::utils::markdown;

use crate::links::LinkPair;

pub const WELCOME: &str = "Welcome! Send me a file and I will provide you with a streaming and download link \
from the external file streamer. Make sure to set the EXTERNAL_BASE_URL environment variable.";

pub const HELP: &str =
    "Just send me a file (video, audio, document) and I will generate the direct links for you.";

/// Sent for messages without a video, audio or document.
pub const GUIDANCE: &str = "Please send a file (video, audio, or document).";

/// Names the missing setting, e.g. `EXTERNAL_BASE_URL`.
pub fn config_error(setting: &str) -> String {
    format!(
        "Error: {} is not configured. Please set the environment variable.",
        setting
    )
}

pub fn processing_error(err: &dyn Display) -> String {
    format!("An error occurred while generating the links: {}", err)
}

/// MarkdownV2 body listing the file name and both links as code spans.
pub fn links_message(links: &LinkPair) -> String {
    format!(
        "{} {}\n\n{}\n{}\n\n{}\n{}\n\n{}",
        markdown::bold("File:"),
        markdown::code_inline(&links.file_name),
        markdown::bold("Streaming Link:"),
        markdown::code_inline(&links.streaming_link),
        markdown::bold("Download Link:"),
        markdown::code_inline(&links.download_link),
        markdown::escape("The streaming service fetches the file directly from Telegram's servers."),
    )
}
