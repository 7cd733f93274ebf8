//! Mandi negotiation library
//!
//! A rule-based price haggling engine for wholesale produce (mandi)
//! trading. The engine plays a scripted buyer: it opens below market,
//! counters offers by splitting the difference, and closes once the
//! seller's ask clears a fixed convergence threshold. Multilingual canned
//! text covers Hindi, English, Tamil, Telugu, and Kannada.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod locale;
pub mod negotiation;
pub mod types;

pub use error::{MandiError, Result};
pub use locale::Language;
pub use negotiation::{
    BargainEngine, MessageKind, NegotiationMessage, NegotiationSession, Sender, SessionStatus,
};
pub use types::{MessageId, SessionId};
