//! Converts teloxide types into core types.

use dbot_core::{BotCommand, Chat, Message, ToCoreMessage, ToCoreUser, User};
use teloxide::utils::command::parse_command;

/// Telegram user → core [`User`].
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

/// Telegram message → core [`Message`]. The second field is this bot's username, used to
/// tell `/start@this_bot` from `/start@other_bot`.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message, pub Option<&'a str>);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        let content = msg.text().unwrap_or("").to_string();
        let command = parse_bot_command(&content, self.1.unwrap_or(""));

        Message {
            id: msg.id.0.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: chat_type(&msg.chat).to_string(),
            },
            content,
            command,
            created_at: msg.date,
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

/// Classifies message text. Returns `None` for non-command text.
///
/// Commands addressed to another bot (`/start@other_bot`) become [`BotCommand::Other`] so no
/// handler answers them. Command names are matched case-insensitively.
pub fn parse_bot_command(text: &str, bot_username: &str) -> Option<BotCommand> {
    if !text.starts_with('/') {
        return None;
    }

    match parse_command(text, bot_username) {
        Some((name, _args)) => Some(match name.to_lowercase().as_str() {
            "start" => BotCommand::Start,
            "help" => BotCommand::Help,
            other => BotCommand::Other(other.to_string()),
        }),
        None => {
            let word = text
                .split_whitespace()
                .next()
                .unwrap_or("")
                .trim_start_matches('/');
            let name = word.split('@').next().unwrap_or("");
            Some(BotCommand::Other(name.to_lowercase()))
        }
    }
}
