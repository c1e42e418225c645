//! Bot commands recognized by the transport adapter.

use serde::{Deserialize, Serialize};

/// A command carried by an inbound message. Transport adapters parse it; handlers match on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotCommand {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// Any other command, or a known command addressed to another bot. Holds the command word without `/`.
    Other(String),
}
