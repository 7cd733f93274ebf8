//! CLI command definitions

use crate::locale::Language;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mandi")]
#[command(about = "Mandi - multilingual price haggling for wholesale produce", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Haggle interactively over a commodity
    Haggle {
        /// Commodity to trade (e.g. tomato, wheat)
        #[arg(short, long)]
        commodity: String,

        /// Reference market price in rupees
        #[arg(short, long)]
        market_price: f64,

        /// Language code (hi, en, ta, te, kn)
        #[arg(short, long, default_value = "hi")]
        language: Language,
    },

    /// List known commodities
    Commodities {
        /// Language code (hi, en, ta, te, kn)
        #[arg(short, long, default_value = "hi")]
        language: Language,
    },

    /// Play a fixed sequence of offers through a session, print it as JSON
    Script {
        /// Commodity to trade
        #[arg(short, long)]
        commodity: String,

        /// Reference market price in rupees
        #[arg(short, long)]
        market_price: f64,

        /// Language code (hi, en, ta, te, kn)
        #[arg(short, long, default_value = "hi")]
        language: Language,

        /// Offers in rupees, played in order until the buyer accepts
        #[arg(short, long, required = true, num_args = 1..)]
        offer: Vec<f64>,
    },
}
