//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Attachment classification happens here: the first of video, audio, document present on the message wins.

use dbot_core::{Attachment, AttachmentKind, Chat, Message, ToCoreMessage, ToCoreUser, User};
use teloxide::types::FileMeta;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let attachment = self.attachment();
        let message_type = match (&attachment, self.0.text()) {
            (Some(a), _) => a.kind.as_str(),
            (None, Some(_)) => "text",
            (None, None) => "other",
        };

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::anonymous),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            content: self
                .0
                .text()
                .or_else(|| self.0.caption())
                .unwrap_or("")
                .to_string(),
            message_type: message_type.to_string(),
            attachment,
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Extracts the relayable attachment, checking video, then audio, then document.
    pub fn attachment(&self) -> Option<Attachment> {
        let msg = self.0;
        if let Some(video) = msg.video() {
            return Some(attachment(AttachmentKind::Video, &video.file, &video.file_name));
        }
        if let Some(audio) = msg.audio() {
            return Some(attachment(AttachmentKind::Audio, &audio.file, &audio.file_name));
        }
        msg.document()
            .map(|doc| attachment(AttachmentKind::Document, &doc.file, &doc.file_name))
    }

    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}

fn attachment(kind: AttachmentKind, file: &FileMeta, file_name: &Option<String>) -> Attachment {
    Attachment {
        kind,
        remote_id: file.id.0.clone(),
        unique_id: file.unique_id.0.clone(),
        file_name: file_name.clone().filter(|name| !name.is_empty()),
    }
}
