//! Tests for [`file_link_bot::FileLinkHandler`] with a mock bot.
//!
//! Each test documents scenario and expected reply; the mock records replies and getFile calls.

mod common;

use common::mock_bot::{MockBot, ReplyFormat};
use common::{file_message, text_message, TEST_BASE_URL, TEST_TOKEN};
use dbot_core::{AttachmentKind, Handler, HandlerResponse};
use file_link_bot::reply::{self, links_message};
use file_link_bot::{encode_query_value, FileLinkHandler, LinkPair, LinkSettings};
use url::form_urlencoded;

fn settings() -> LinkSettings {
    LinkSettings::new(Some(TEST_TOKEN.to_string()), Some(TEST_BASE_URL.to_string()))
}

fn file_url_of(link: &str) -> String {
    let query = link.split_once('?').unwrap().1;
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "file_url")
        .map(|(_, v)| v.into_owned())
        .unwrap()
}

/// **Test: video without a name gets `video_{uniqueId}.mp4` links; reply is Markdown.**
#[tokio::test]
async fn video_without_name_gets_synthesized_links() {
    let bot = MockBot::resolving("videos/file_7.mp4");
    let handler = FileLinkHandler::new(bot.clone(), settings());

    let response = handler
        .handle(&file_message(AttachmentKind::Video, None, "abc123"))
        .await
        .unwrap();

    let source = "https://api.telegram.org/file/bot123456789:AAHtestTokenValue/videos/file_7.mp4";
    let expected = LinkPair::build(TEST_BASE_URL, "video_abc123.mp4", source);
    assert_eq!(
        expected.streaming_link,
        format!(
            "https://x.example/watch/video_abc123.mp4?file_url={}",
            encode_query_value(source)
        )
    );

    let sent = bot.single_reply();
    assert_eq!(sent.format, ReplyFormat::Markdown);
    assert_eq!(sent.chat_id, 456);
    assert_eq!(sent.text, links_message(&expected));
    assert_eq!(response, HandlerResponse::Reply(sent.text.clone()));
    assert_eq!(bot.resolved_ids(), vec!["remote-abc123"]);
}

/// **Test: a named document keeps its name, percent-encoded in the path; file_url decodes to the source URL.**
#[tokio::test]
async fn named_document_keeps_name() {
    let bot = MockBot::resolving("documents/file_9.pdf");
    let handler = FileLinkHandler::new(bot.clone(), settings());

    handler
        .handle(&file_message(AttachmentKind::Document, Some("Annual Report.pdf"), "d1"))
        .await
        .unwrap();

    let text = bot.single_reply().text;
    assert!(text.contains("`Annual Report.pdf`"));
    assert!(text.contains("https://x.example/download/Annual%20Report.pdf?file_url="));

    let links = handler
        .build_links(file_message(AttachmentKind::Document, Some("Annual Report.pdf"), "d1").attachment.as_ref().unwrap())
        .await
        .unwrap();
    assert_eq!(
        file_url_of(&links.download_link),
        "https://api.telegram.org/file/bot123456789:AAHtestTokenValue/documents/file_9.pdf"
    );
    assert!(!links.download_link.contains(TEST_TOKEN));
}

/// **Test: audio without a name gets `.mp3`; documents without a name get no extension.**
#[tokio::test]
async fn synthesized_names_per_kind() {
    let bot = MockBot::resolving("music/file_1.mp3");
    let handler = FileLinkHandler::new(bot.clone(), settings());

    let audio = handler
        .build_links(file_message(AttachmentKind::Audio, None, "u1").attachment.as_ref().unwrap())
        .await
        .unwrap();
    assert_eq!(audio.file_name, "audio_u1.mp3");

    let doc = handler
        .build_links(file_message(AttachmentKind::Document, None, "u2").attachment.as_ref().unwrap())
        .await
        .unwrap();
    assert_eq!(doc.file_name, "document_u2");
    assert!(doc.streaming_link.starts_with("https://x.example/watch/document_u2?file_url="));
}

/// **Test: plain text gets the guidance reply and no getFile call.**
#[tokio::test]
async fn text_message_gets_guidance() {
    let bot = MockBot::resolving("unused");
    let handler = FileLinkHandler::new(bot.clone(), settings());

    let response = handler.handle(&text_message("hello")).await.unwrap();

    let sent = bot.single_reply();
    assert_eq!(sent.format, ReplyFormat::Plain);
    assert_eq!(sent.text, "Please send a file (video, audio, or document).");
    assert_eq!(response, HandlerResponse::Reply(reply::GUIDANCE.to_string()));
    assert!(bot.resolved_ids().is_empty());
}

/// **Test: unset external base URL → configuration error reply naming the setting; no getFile call.**
#[tokio::test]
async fn missing_base_url_refuses_without_api_call() {
    let bot = MockBot::resolving("videos/file_7.mp4");
    let handler = FileLinkHandler::new(bot.clone(), LinkSettings::new(Some(TEST_TOKEN.to_string()), None));

    handler
        .handle(&file_message(AttachmentKind::Video, None, "abc123"))
        .await
        .unwrap();

    assert_eq!(
        bot.single_reply().text,
        "Error: EXTERNAL_BASE_URL is not configured. Please set the environment variable."
    );
    assert!(bot.resolved_ids().is_empty());
}

/// **Test: unset token → configuration error reply naming BOT_TOKEN; no getFile call.**
#[tokio::test]
async fn missing_token_refuses_without_api_call() {
    let bot = MockBot::resolving("videos/file_7.mp4");
    let handler = FileLinkHandler::new(
        bot.clone(),
        LinkSettings::new(None, Some(TEST_BASE_URL.to_string())),
    );

    handler
        .handle(&file_message(AttachmentKind::Audio, Some("a.mp3"), "u1"))
        .await
        .unwrap();

    assert_eq!(bot.single_reply().text, reply::config_error("BOT_TOKEN"));
    assert!(bot.resolved_ids().is_empty());
}

/// **Test: getFile failure → handler returns normally and the reply contains the literal error text.**
#[tokio::test]
async fn get_file_failure_is_reported_to_user() {
    let bot = MockBot::failing("Bad Request: file is too big");
    let handler = FileLinkHandler::new(bot.clone(), settings());

    let response = handler
        .handle(&file_message(AttachmentKind::Video, Some("big.mp4"), "big1"))
        .await;

    assert!(response.is_ok());
    let sent = bot.single_reply();
    assert_eq!(sent.format, ReplyFormat::Plain);
    assert!(sent
        .text
        .starts_with("An error occurred while generating the links: "));
    assert!(sent.text.contains("Bad Request: file is too big"));
    assert_eq!(bot.resolved_ids(), vec!["remote-big1"]);
}

/// **Test: a custom Bot API server is used as the file URL prefix.**
#[tokio::test]
async fn custom_file_api_base() {
    let bot = MockBot::resolving("videos/file_1.mp4");
    let handler = FileLinkHandler::new(
        bot.clone(),
        settings().with_file_api_base("http://localhost:8081"),
    );

    let links = handler
        .build_links(file_message(AttachmentKind::Video, None, "v1").attachment.as_ref().unwrap())
        .await
        .unwrap();

    assert_eq!(
        file_url_of(&links.streaming_link),
        "http://localhost:8081/file/bot123456789:AAHtestTokenValue/videos/file_1.mp4"
    );
}

/// **Test: Telegram rejects the links message (e.g. too long) → the user still gets a plain error reply.**
#[tokio::test]
async fn rejected_links_message_falls_back_to_plain_error() {
    let bot = MockBot::rejecting_markdown(
        "documents/file_4.pdf",
        "Bad Request: message is too long",
    );
    let handler = FileLinkHandler::new(bot.clone(), settings());
    let long_name = format!("{}.pdf", "文".repeat(255));

    let response = handler
        .handle(&file_message(AttachmentKind::Document, Some(&long_name), "long1"))
        .await
        .unwrap();

    let sent = bot.single_reply();
    assert_eq!(sent.format, ReplyFormat::Plain);
    assert_eq!(
        sent.text,
        "An error occurred while generating the links: Bot error: Bad Request: message is too long"
    );
    assert_eq!(response, HandlerResponse::Reply(sent.text.clone()));
    assert_eq!(bot.resolved_ids(), vec!["remote-long1"]);
}
