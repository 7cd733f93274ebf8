//! Negotiation session state

use crate::error::{MandiError, Result};
use crate::types::SessionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{NegotiationMessage, Sender, SessionStatus};

/// Share of market price the buyer opens at
pub const OPENING_RATIO: f64 = 0.85;

/// A bilateral haggling session between the user (seller) and the scripted
/// buyer. Messages are append-only and chronological; the market price is
/// fixed for the session's lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NegotiationSession {
    id: SessionId,
    commodity: String,
    market_price: f64,
    messages: Vec<NegotiationMessage>,
    status: SessionStatus,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl NegotiationSession {
    pub fn new(commodity: String, market_price: f64) -> Self {
        Self {
            id: SessionId::generate(),
            commodity,
            market_price,
            messages: Vec::new(),
            status: SessionStatus::Active,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    pub fn market_price(&self) -> f64 {
        self.market_price
    }

    pub fn messages(&self) -> &[NegotiationMessage] {
        &self.messages
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Append a message. Terminal sessions take no further turns.
    pub fn push(&mut self, message: NegotiationMessage) -> Result<()> {
        if self.status.is_terminal() {
            return Err(MandiError::SessionClosed(self.id.0.clone()));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Most recent AI-side price on the table. Falls back to the unrounded
    /// opening ratio of market price, though the opening offer means every
    /// session has at least one AI price in practice.
    pub fn last_ai_price(&self) -> f64 {
        self.messages
            .iter()
            .rev()
            .find_map(|m| match m.sender {
                Sender::Ai => m.price,
                Sender::User => None,
            })
            .unwrap_or(self.market_price * OPENING_RATIO)
    }

    /// Close the session as a done deal
    pub fn complete(&mut self) {
        self.status = SessionStatus::Completed;
        self.ended_at = Some(Utc::now());
    }

    /// Close the session on user-initiated walk-away
    pub fn cancel(&mut self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(MandiError::SessionClosed(self.id.0.clone()));
        }
        self.status = SessionStatus::Cancelled;
        self.ended_at = Some(Utc::now());
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == SessionStatus::Cancelled
    }
}
