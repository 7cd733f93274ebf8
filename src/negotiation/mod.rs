//! Scripted price negotiation between the user and a rule-based buyer

pub mod engine;
pub mod session;
pub mod types;

pub use engine::BargainEngine;
pub use session::{NegotiationSession, OPENING_RATIO};
pub use types::{MessageKind, NegotiationMessage, Sender, SessionStatus};
