//! Text-generation oracle.
//!
//! Agents and the judge never talk to an LLM provider directly. They hold a
//! `&dyn Oracle` and send it a short list of role-tagged messages:
//!
//! ```text
//! Agent / Judge                Oracle                     Provider
//!      |                          |                           |
//!      |-- [system, user] ------->|                           |
//!      |                          |-- POST chat/completions ->|
//!      |                          |<-- choices[0].message ----|
//!      |<-- raw content ----------|                           |
//! ```
//!
//! Requests are awaited one at a time; there is no retry or fallback here.
//! A failed call surfaces as [`SimError::Network`](crate::SimError::Network)
//! or [`SimError::Oracle`](crate::SimError::Oracle) and aborts the run.
//!
//! Implementations:
//! - [`HttpOracle`]: OpenAI-compatible chat-completions endpoint
//! - [`DryRunOracle`]: offline placeholder replies

mod dry_run;
mod http;

pub use dry_run::DryRunOracle;
pub use http::HttpOracle;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system" or "user"
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// System instruction message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// User content message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// External text-generation service.
///
/// `complete` returns the first choice's content untrimmed; callers decide
/// how to clean it up.
pub trait Oracle: Send + Sync {
    /// Model identifier attached to each request
    fn model(&self) -> &str;

    /// Issue one completion request
    fn complete(&self, messages: Vec<ChatMessage>) -> BoxFuture<'_, Result<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let sys = ChatMessage::system("You are Guard 1");
        assert_eq!(sys.role, "system");
        assert_eq!(sys.content, "You are Guard 1");

        let user = ChatMessage::user("hello");
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
