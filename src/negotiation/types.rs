//! Negotiation message and status types

use crate::types::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// What a message does in the negotiation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// A price put on the table
    Offer,
    /// A price moved in response to an offer
    Counter,
    /// Deal closed at the quoted price
    Accept,
    /// Deal refused outright
    Reject,
    /// Free text with no price attached
    Chat,
}

/// Session lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Terminal sessions accept no further messages
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Cancelled)
    }
}

/// A single turn in a negotiation, immutable once appended
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NegotiationMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Rupees. AI-side prices are stored already rounded to the whole rupee;
    /// user offers are stored as submitted.
    pub price: Option<f64>,
    pub kind: MessageKind,
}

impl NegotiationMessage {
    pub fn new(sender: Sender, text: String, price: Option<f64>, kind: MessageKind) -> Self {
        Self {
            id: MessageId::generate(),
            sender,
            text,
            timestamp: Utc::now(),
            price,
            kind,
        }
    }
}
