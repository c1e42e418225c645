//! Outbound reply type.

use serde::{Deserialize, Serialize};

/// How the transport should interpret reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyFormat {
    Plain,
    /// Telegram-style HTML subset (`<b>`, `<a href>`, ...).
    Html,
}

/// Reply text plus formatting and an optional message to quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub format: ReplyFormat,
    /// Transport message id to quote.
    pub quote_message_id: Option<String>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Plain,
            quote_message_id: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Html,
            quote_message_id: None,
        }
    }

    /// Returns the reply quoting the given message id.
    pub fn quoting(mut self, message_id: impl Into<String>) -> Self {
        self.quote_message_id = Some(message_id.into());
        self
    }
}
