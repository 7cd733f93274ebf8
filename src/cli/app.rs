//! Mandi application wiring the engine to the terminal

use crate::catalog;
use crate::error::Result;
use crate::locale::Language;
use crate::negotiation::{BargainEngine, MessageKind};
use crate::types::SessionId;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Terminal front end for the bargain engine
pub struct MandiApp {
    engine: BargainEngine,
}

impl MandiApp {
    pub fn new(language: Language) -> Self {
        Self {
            engine: BargainEngine::with_language(language),
        }
    }

    pub fn engine(&self) -> &BargainEngine {
        &self.engine
    }

    /// Interactive haggle: lines that parse as numbers are offers, anything
    /// else is chat, `quit` or EOF walks away.
    pub async fn haggle(&mut self, commodity: &str, market_price: f64) -> Result<()> {
        let language = self.engine.language();
        let display = catalog::display_name(commodity, language);

        let session = self.engine.start_negotiation(commodity, market_price)?;
        let session_id = session.id().clone();
        println!("[{}] {}", display, session.messages()[0].text);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let Some(line) = lines.next_line().await? else {
                return self.walk_away(&session_id);
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input == "quit" || input == "q" {
                return self.walk_away(&session_id);
            }

            let price = input.parse::<f64>().ok();
            let reply = self.engine.process_user_message(&session_id, input, price)?;
            println!("{}", reply.text);

            if reply.kind == MessageKind::Accept {
                let session = self
                    .engine
                    .get_session(&session_id)
                    .ok_or_else(|| crate::MandiError::SessionNotFound(session_id.0.clone()))?;
                println!("\n{}", self.engine.whatsapp_message(session));
                return Ok(());
            }
        }
    }

    fn walk_away(&mut self, session_id: &SessionId) -> Result<()> {
        self.engine.cancel_negotiation(session_id)?;
        tracing::info!("Walked away from negotiation {}", session_id);
        Ok(())
    }

    /// Play a fixed offer sequence through one session; returns the final
    /// session as pretty JSON. Stops early once the buyer accepts.
    pub fn run_script(
        &mut self,
        commodity: &str,
        market_price: f64,
        offers: &[f64],
    ) -> Result<String> {
        let session_id = self
            .engine
            .start_negotiation(commodity, market_price)?
            .id()
            .clone();

        for &offer in offers {
            let reply = self
                .engine
                .process_user_message(&session_id, &format!("{offer}"), Some(offer))?;
            if reply.kind == MessageKind::Accept {
                break;
            }
        }

        let session = self
            .engine
            .get_session(&session_id)
            .ok_or_else(|| crate::MandiError::SessionNotFound(session_id.0.clone()))?;
        Ok(serde_json::to_string_pretty(session)?)
    }

    /// Catalog listing with localized names
    pub fn list_commodities(&self) -> String {
        let language = self.engine.language();
        catalog::COMMODITIES
            .iter()
            .map(|c| {
                format!(
                    "{} {} ({}) - per {}",
                    c.icon,
                    c.name(language),
                    c.id,
                    c.unit()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
