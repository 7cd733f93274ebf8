//! Core identifier types used throughout the crate

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

fn timestamped(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: u32 = rand::thread_rng().gen_range(0..0x10000);
    format!("{}_{}_{:04x}", prefix, timestamp, suffix)
}

/// Unique identifier for negotiation sessions
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new unique session ID (timestamp plus entropy suffix)
    pub fn generate() -> Self {
        Self(timestamped("session"))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for messages within a session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Generate a new unique message ID
    pub fn generate() -> Self {
        Self(timestamped("msg"))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_creation() {
        let id1 = SessionId::generate();

        // IDs should start with "session_"
        assert!(id1.0.starts_with("session_"));

        let id2 = SessionId::generate();

        // IDs should be different (entropy suffix even within the same ms)
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_message_id_creation() {
        let id1 = MessageId::generate();
        let id2 = MessageId::generate();

        assert!(id1.0.starts_with("msg_"));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_serialization() {
        let session_id = SessionId::generate();
        let serialized = serde_json::to_string(&session_id).unwrap();
        let deserialized: SessionId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(session_id, deserialized);
    }

    #[test]
    fn test_display() {
        let id = SessionId("session_42".to_string());
        assert_eq!(id.to_string(), "session_42");
    }
}
