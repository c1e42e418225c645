//! What a handler tells the chain.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Handled partially; let the next handler look at it too.
    Continue,
    /// End dispatch without a reply.
    Stop,
    /// Not this handler's kind of message.
    Ignore,
    /// End dispatch. Holds the terminal reply text, visible to `after`.
    Reply(String),
}
