//! Mandi CLI binary

use clap::Parser;
use mandi::cli::{Cli, Commands, MandiApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Haggle {
            commodity,
            market_price,
            language,
        } => {
            tracing::info!(
                "Starting haggle for {} at market price ₹{}",
                commodity,
                market_price
            );
            let mut app = MandiApp::new(language);
            app.haggle(&commodity, market_price).await?;
        }

        Commands::Commodities { language } => {
            let app = MandiApp::new(language);
            println!("{}", app.list_commodities());
        }

        Commands::Script {
            commodity,
            market_price,
            language,
            offer,
        } => {
            let mut app = MandiApp::new(language);
            let json = app.run_script(&commodity, market_price, &offer)?;
            println!("{json}");
        }
    }

    Ok(())
}
