//! # handler-chain
//!
//! Ordered dispatch of one inbound message over a list of [`Handler`]s, in three phases:
//!
//! 1. `before` on every handler in registration order. A `false` ends dispatch with `Stop`.
//! 2. `handle` in order until a handler answers `Stop` or `Reply`. `Ignore` and `Continue` move on.
//! 3. `after` on every handler in reverse order, seeing the terminal response.
//!
//! Errors from any phase abort dispatch and are returned unchanged.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Cheap to clone; handlers are shared.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Dispatches one message. Returns `Continue` when every handler passed on it.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(message_id = %message.id, handlers = self.handlers.len(), "Dispatch started");

        for h in &self.handlers {
            if !h.before(message).await? {
                info!(handler = %h.name(), "Dispatch vetoed in before");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(handler = %h.name(), response = ?response, "Handler returned");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    debug!(handler = %h.name(), "Handler took the message");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        debug!(message_id = %message.id, response = ?final_response, "Dispatch finished");
        Ok(final_response)
    }
}
