//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the text sent back so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Not for this handler, try next.
    Ignore,
    /// Stop the chain; the handler replied with this text.
    Reply(String),
}
