//! Conversation log, persisted as `chat/main.json`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp;

/// The single conversation every project starts with
pub const MAIN_CONVERSATION_ID: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Caller-supplied; uniqueness is not checked
    pub id: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now(),
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Empty `main` conversation, created now
    pub fn new() -> Self {
        Self {
            conversation_id: MAIN_CONVERSATION_ID.to_string(),
            created_at: Utc::now(),
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
