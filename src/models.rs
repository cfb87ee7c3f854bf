// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Represents a message in the transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The scenario/level pair a chat exchange runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub scenario: String,
    pub level: String,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub scenario: String,
    pub level: String,
    pub message: String,
}

impl ChatRequest {
    pub fn new(context: &SessionContext, message: &str) -> Self {
        Self {
            scenario: context.scenario.clone(),
            level: context.level.clone(),
            message: message.to_string(),
        }
    }
}

/// Body returned by `POST /chat`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Body returned by `POST /reset`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResetAck {
    pub status: String,
}

/// Logs details of each API call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_carries_context() {
        let context = SessionContext {
            scenario: "ordering food".to_string(),
            level: "beginner".to_string(),
        };
        let request = ChatRequest::new(&context, "Hello");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"scenario": "ordering food", "level": "beginner", "message": "Hello"})
        );
    }

    #[test]
    fn test_chat_reply_audio_is_optional() {
        let reply: ChatReply = serde_json::from_value(json!({"response": "Hi there!"})).unwrap();
        assert_eq!(reply.audio, None);

        let reply: ChatReply =
            serde_json::from_value(json!({"response": "Hi", "audio": null})).unwrap();
        assert_eq!(reply.audio, None);

        let reply: ChatReply =
            serde_json::from_value(json!({"response": "Hi", "audio": "/audio/1.mp3"})).unwrap();
        assert_eq!(reply.audio.as_deref(), Some("/audio/1.mp3"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), json!("assistant"));
        assert_eq!(Role::User.to_string(), "user");
    }
}
