//! Errors shared by the transport, the handler chain and startup.
//!
//! Search provider failures are not here: handlers turn them into replies, so they never reach
//! the chain.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// The transport rejected or failed to deliver a reply.
    #[error("send failed: {0}")]
    Bot(String),

    /// A quoted message id that the transport cannot represent.
    #[error("invalid message id: {0:?}")]
    InvalidMessageId(String),

    /// Missing or malformed startup configuration. Fatal.
    #[error("configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
