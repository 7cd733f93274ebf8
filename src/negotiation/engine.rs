//! Bargain engine managing all negotiation sessions
//!
//! The engine plays the buyer. It opens 15% under market, accepts any ask
//! that sits at least 5% above its own last price while staying under 95%
//! of market, and counters otherwise. Sessions live in memory for the
//! engine's lifetime.

use crate::error::{MandiError, Result};
use crate::locale::{self, Language};
use crate::types::SessionId;
use chrono::Utc;
use std::collections::HashMap;

use super::session::{NegotiationSession, OPENING_RATIO};
use super::types::{MessageKind, NegotiationMessage, Sender};

/// Asks above this share of market are rebuked as too high
const MARKET_CEILING_RATIO: f64 = 0.95;
/// Minimum uplift over the buyer's own last price to close the deal
const ACCEPT_RATIO: f64 = 1.05;
/// Uplift applied to the buyer's price when rebuking a too-high ask.
/// Moves the price up, away from a buyer's interest; kept as the original
/// product documented it.
const REBUKE_RATIO: f64 = 1.1;

/// Scripted buyer running bilateral price negotiations
pub struct BargainEngine {
    sessions: HashMap<SessionId, NegotiationSession>,
    language: Language,
}

impl BargainEngine {
    pub fn new() -> Self {
        Self::with_language(Language::default())
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            sessions: HashMap::new(),
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the language used for all subsequent replies
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Open a new session: the buyer bids 15% under market
    pub fn start_negotiation(
        &mut self,
        commodity: &str,
        market_price: f64,
    ) -> Result<&NegotiationSession> {
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(MandiError::InvalidMarketPrice(market_price));
        }

        let mut session = NegotiationSession::new(commodity.to_string(), market_price);
        let opening_price = (market_price * OPENING_RATIO).round();
        let text = locale::opening_offer(self.language, commodity, market_price, opening_price);

        session.push(NegotiationMessage::new(
            Sender::Ai,
            text,
            Some(opening_price),
            MessageKind::Offer,
        ))?;

        tracing::info!(
            "Opened negotiation {} for {} at ₹{} (market ₹{})",
            session.id(),
            commodity,
            opening_price,
            market_price
        );

        let id = session.id().clone();
        Ok(&*self.sessions.entry(id).or_insert(session))
    }

    /// Record a user turn and produce the buyer's reply
    pub fn process_user_message(
        &mut self,
        session_id: &SessionId,
        text: &str,
        price: Option<f64>,
    ) -> Result<NegotiationMessage> {
        let language = self.language;
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| MandiError::SessionNotFound(session_id.0.clone()))?;

        if session.status().is_terminal() {
            return Err(MandiError::SessionClosed(session_id.0.clone()));
        }

        let kind = match price {
            Some(_) => MessageKind::Offer,
            None => MessageKind::Chat,
        };
        session.push(NegotiationMessage::new(
            Sender::User,
            text.to_string(),
            price,
            kind,
        ))?;

        let last_ai_price = session.last_ai_price();
        let market_price = session.market_price();

        let (reply, deal_closed) = match price {
            None => {
                let canned = if locale::is_quality_query(language, text) {
                    locale::quality_remark(language)
                } else {
                    locale::chat_prompt(language)
                };
                (
                    NegotiationMessage::new(
                        Sender::Ai,
                        canned.to_string(),
                        None,
                        MessageKind::Chat,
                    ),
                    false,
                )
            }
            Some(user_price) if user_price <= market_price * MARKET_CEILING_RATIO => {
                if user_price >= last_ai_price * ACCEPT_RATIO {
                    let agreed = user_price.round();
                    (
                        NegotiationMessage::new(
                            Sender::Ai,
                            locale::acceptance(language, agreed),
                            Some(agreed),
                            MessageKind::Accept,
                        ),
                        true,
                    )
                } else {
                    let new_price = ((user_price + last_ai_price) / 2.0).round();
                    (
                        NegotiationMessage::new(
                            Sender::Ai,
                            locale::counter_offer(language, new_price),
                            Some(new_price),
                            MessageKind::Counter,
                        ),
                        false,
                    )
                }
            }
            Some(_) => {
                let new_price = (last_ai_price * REBUKE_RATIO).round();
                (
                    NegotiationMessage::new(
                        Sender::Ai,
                        locale::too_high(language, new_price, market_price),
                        Some(new_price),
                        MessageKind::Counter,
                    ),
                    false,
                )
            }
        };

        session.push(reply.clone())?;
        if deal_closed {
            session.complete();
            tracing::info!(
                "Negotiation {} completed at ₹{}",
                session_id,
                reply.price.unwrap_or_default()
            );
        }

        Ok(reply)
    }

    /// WhatsApp-ready summary of a session's latest buyer price
    pub fn whatsapp_message(&self, session: &NegotiationSession) -> String {
        let date = Utc::now().format("%d/%m/%Y").to_string();
        locale::whatsapp_summary(
            self.language,
            session.commodity(),
            session.last_ai_price(),
            &date,
        )
    }

    /// Mark a session cancelled; called by the presentation layer when the
    /// user walks away
    pub fn cancel_negotiation(&mut self, session_id: &SessionId) -> Result<()> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| MandiError::SessionNotFound(session_id.0.clone()))?;
        session.cancel()?;
        tracing::info!("Negotiation {} cancelled", session_id);
        Ok(())
    }

    /// Get a session
    pub fn get_session(&self, session_id: &SessionId) -> Option<&NegotiationSession> {
        self.sessions.get(session_id)
    }

    /// All sessions ever started on this engine
    pub fn sessions(&self) -> &HashMap<SessionId, NegotiationSession> {
        &self.sessions
    }
}

impl Default for BargainEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negotiation::types::SessionStatus;

    fn start(engine: &mut BargainEngine, commodity: &str, market: f64) -> SessionId {
        engine
            .start_negotiation(commodity, market)
            .unwrap()
            .id()
            .clone()
    }

    #[test]
    fn test_opening_price_is_85_percent_rounded() {
        let mut engine = BargainEngine::new();

        for (market, expected) in [(100.0, 85.0), (2200.0, 1870.0), (35.0, 30.0), (45.0, 38.0)] {
            let session = engine.start_negotiation("tomato", market).unwrap();
            let opening = &session.messages()[0];
            assert_eq!(opening.price, Some(expected), "market ₹{market}");
        }
    }

    #[test]
    fn test_first_message_is_ai_offer() {
        let mut engine = BargainEngine::new();
        let session = engine.start_negotiation("onion", 35.0).unwrap();

        let first = &session.messages()[0];
        assert_eq!(first.sender, Sender::Ai);
        assert_eq!(first.kind, MessageKind::Offer);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn test_rejects_non_positive_market_price() {
        let mut engine = BargainEngine::new();

        for bad in [0.0, -10.0, f64::NAN] {
            let result = engine.start_negotiation("tomato", bad);
            assert!(matches!(result, Err(MandiError::InvalidMarketPrice(_))));
        }
        assert!(engine.sessions().is_empty());
    }

    #[test]
    fn test_accept_when_ask_clears_both_thresholds() {
        // tomato at ₹100: opening ₹85. Ask ₹90: 90 <= 95 and 90 >= 89.25
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);

        let reply = engine.process_user_message(&id, "", Some(90.0)).unwrap();

        assert_eq!(reply.kind, MessageKind::Accept);
        assert_eq!(reply.price, Some(90.0));

        let session = engine.get_session(&id).unwrap();
        assert_eq!(session.status(), SessionStatus::Completed);
        assert!(session.ended_at().is_some());
    }

    #[test]
    fn test_counter_splits_the_difference() {
        // Ask ₹86: under the ceiling but short of 85 * 1.05 = 89.25
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);

        let reply = engine.process_user_message(&id, "", Some(86.0)).unwrap();

        assert_eq!(reply.kind, MessageKind::Counter);
        // round((86 + 85) / 2) = 86: near-convergence
        assert_eq!(reply.price, Some(86.0));
        assert_eq!(
            engine.get_session(&id).unwrap().status(),
            SessionStatus::Active
        );
    }

    #[test]
    fn test_convergence_then_accept() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);

        // Counter lands at ₹86; threshold is now 86 * 1.05 = 90.3
        engine.process_user_message(&id, "", Some(86.0)).unwrap();
        let reply = engine.process_user_message(&id, "", Some(91.0)).unwrap();

        assert_eq!(reply.kind, MessageKind::Accept);
        assert_eq!(reply.price, Some(91.0));
        assert!(engine.get_session(&id).unwrap().is_complete());
    }

    #[test]
    fn test_counter_above_market_moves_price_up() {
        // wheat at ₹2200: opening ₹1870, ceiling ₹2090. Ask ₹2150 is over
        // the ceiling; the buyer's price climbs to round(1870 * 1.1) = 2057.
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "wheat", 2200.0);

        let reply = engine.process_user_message(&id, "", Some(2150.0)).unwrap();

        assert_eq!(reply.kind, MessageKind::Counter);
        assert_eq!(reply.price, Some(2057.0));
        assert_eq!(
            engine.get_session(&id).unwrap().status(),
            SessionStatus::Active
        );
    }

    #[test]
    fn test_chat_without_price() {
        let mut engine = BargainEngine::with_language(Language::English);
        let id = start(&mut engine, "tomato", 100.0);

        let reply = engine
            .process_user_message(&id, "how is the quality?", None)
            .unwrap();
        assert_eq!(reply.kind, MessageKind::Chat);
        assert!(reply.price.is_none());
        assert_eq!(reply.text, "Quality is very good. Fresh stock.");

        let reply = engine.process_user_message(&id, "hello", None).unwrap();
        assert_eq!(reply.text, "Yes, tell me. What rate will you give?");
    }

    #[test]
    fn test_session_not_found() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);
        let before = engine.get_session(&id).unwrap().messages().len();

        let bogus = SessionId("session_missing".to_string());
        let result = engine.process_user_message(&bogus, "", Some(90.0));

        assert!(matches!(result, Err(MandiError::SessionNotFound(_))));
        // Nothing was appended anywhere
        assert_eq!(engine.sessions().len(), 1);
        assert_eq!(engine.get_session(&id).unwrap().messages().len(), before);
    }

    #[test]
    fn test_completed_session_rejects_turns() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);
        engine.process_user_message(&id, "", Some(90.0)).unwrap();

        let before = engine.get_session(&id).unwrap().messages().len();
        let result = engine.process_user_message(&id, "", Some(92.0));

        assert!(matches!(result, Err(MandiError::SessionClosed(_))));
        assert_eq!(engine.get_session(&id).unwrap().messages().len(), before);
    }

    #[test]
    fn test_get_session_does_not_mutate() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);
        engine.process_user_message(&id, "", Some(86.0)).unwrap();

        let first = serde_json::to_string(engine.get_session(&id).unwrap()).unwrap();
        let second = serde_json::to_string(engine.get_session(&id).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_turns_append_user_then_ai() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);

        engine.process_user_message(&id, "namaste", None).unwrap();
        let messages = engine.get_session(&id).unwrap().messages();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].kind, MessageKind::Chat);
        assert_eq!(messages[2].sender, Sender::Ai);
    }

    #[test]
    fn test_user_offer_recorded_as_offer_kind() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);

        engine.process_user_message(&id, "90 final", Some(90.0)).unwrap();
        let messages = engine.get_session(&id).unwrap().messages();

        assert_eq!(messages[1].kind, MessageKind::Offer);
        assert_eq!(messages[1].price, Some(90.0));
    }

    #[test]
    fn test_cancel_negotiation() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);

        engine.cancel_negotiation(&id).unwrap();
        assert!(engine.get_session(&id).unwrap().is_cancelled());

        // No turns after walking away
        let result = engine.process_user_message(&id, "", Some(90.0));
        assert!(matches!(result, Err(MandiError::SessionClosed(_))));
    }

    #[test]
    fn test_whatsapp_message_reflects_latest_price() {
        let mut engine = BargainEngine::with_language(Language::English);
        let id = start(&mut engine, "wheat", 2200.0);
        engine.process_user_message(&id, "", Some(2150.0)).unwrap();

        let session = engine.get_session(&id).unwrap();
        let text = engine.whatsapp_message(session);

        assert!(text.contains("wheat"));
        assert!(text.contains("₹2057"));
        assert!(text.contains("Mandi Deal"));
    }

    #[test]
    fn test_language_switch_changes_replies() {
        let mut engine = BargainEngine::new();
        let id = start(&mut engine, "tomato", 100.0);

        engine.set_language(Language::English);
        let reply = engine.process_user_message(&id, "", Some(86.0)).unwrap();
        assert!(reply.text.starts_with("How about"));
    }
}
