//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::error::Result;

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// A unit of logic bound to one event shape.
///
/// The chain calls every `before` in order, then `handle` until one returns Stop or Reply,
/// then every `after` in reverse. Handlers that do not recognize a message return
/// [`HandlerResponse::Ignore`] from `handle`.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Name used in chain logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Return false to stop the chain before any handler runs.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Ignore)
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
