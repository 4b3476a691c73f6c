//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], [`HandlerChain`], message, user and attachment types,
//! and tracing initialization. Transport-agnostic; dbot-telegram supplies the Telegram side.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use chain::HandlerChain;
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Attachment, AttachmentKind, Chat, Handler, HandlerResponse, Message, ToCoreMessage,
    ToCoreUser, User,
};
