//! Shared test doubles: a recording [`MockBot`], a scripted [`FakeSearch`], and message builders.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, BotCommand, Chat, DbotError, Message, Reply, Result, User};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use youtube_search::{SearchError, VideoResult, VideoSearch};

/// One recorded send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub chat_id: i64,
    pub reply: Reply,
}

/// Bot that records every reply instead of sending it. Optionally fails from the n-th send on.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentReply>>,
    fail_from: Option<usize>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends with index >= `n` (0-based) return `DbotError::Bot`.
    pub fn failing_from(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_from: Some(n),
        }
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|s| s.reply.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut sent = self.sent.lock().unwrap();
        if let Some(n) = self.fail_from {
            if sent.len() >= n {
                return Err(DbotError::Bot("Forbidden: bot was blocked by the user".to_string()));
            }
        }
        sent.push(SentReply {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}

/// What [`FakeSearch`] answers.
pub enum Script {
    Results(Vec<VideoResult>),
    Status(u16),
}

/// Search provider with a fixed answer that records queries and limits.
pub struct FakeSearch {
    script: Script,
    calls: AtomicUsize,
    queries: Mutex<Vec<(String, usize)>>,
}

impl FakeSearch {
    pub fn returning(results: Vec<VideoResult>) -> Self {
        Self::new(Script::Results(results))
    }

    pub fn failing(status: u16) -> Self {
        Self::new(Script::Status(status))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSearch for FakeSearch {
    async fn search(&self, query: &str, limit: usize) -> std::result::Result<Vec<VideoResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push((query.to_string(), limit));
        match &self.script {
            Script::Results(results) => Ok(results.iter().take(limit).cloned().collect()),
            Script::Status(code) => Err(SearchError::Status(*code)),
        }
    }
}

pub fn video(id: &str, title: &str, duration: &str) -> VideoResult {
    VideoResult {
        id: id.to_string(),
        title: title.to_string(),
        duration: Some(duration.to_string()),
    }
}

pub fn user(id: i64, first_name: &str) -> User {
    User {
        id,
        username: None,
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

pub fn message(user: User, chat_type: &str, content: &str, command: Option<BotCommand>) -> Message {
    Message {
        id: "100".to_string(),
        chat: Chat {
            id: 555,
            chat_type: chat_type.to_string(),
        },
        user,
        content: content.to_string(),
        command,
        created_at: Utc::now(),
    }
}

pub fn text_message(content: &str) -> Message {
    message(user(7, "Freddie"), "private", content, None)
}

pub fn command_message(user: User, command: BotCommand, text: &str) -> Message {
    message(user, "private", text, Some(command))
}
