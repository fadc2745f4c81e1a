use clap::Parser;
use pokedeck::adapters::ConsoleDisplay;
use pokedeck::utils::{logger, validation::Validate};
use pokedeck::{CliConfig, ConfigProvider, DisplaySurface, HttpFetcher, Session};
use std::sync::Arc;
use tokio::task::JoinSet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pokedeck CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let fetcher = HttpFetcher::new(config.api_base_url());
    let display = ConsoleDisplay::new();
    let session = Arc::new(Session::new(fetcher, display, &config));

    // Draws run concurrently; cards land in resolution order, the same way
    // rapid clicks behave against a live service.
    let requested = config.card_count();
    let mut draws = JoinSet::new();
    for _ in 0..requested {
        let session = Arc::clone(&session);
        draws.spawn(async move { session.add().await });
    }
    while draws.join_next().await.is_some() {}

    let drawn = session.display().cards().len();
    if drawn == requested {
        println!("✅ Drew {} card(s)", drawn);
    } else {
        eprintln!(
            "⚠️ Drew {} of {} requested card(s); failures are in the log",
            drawn, requested
        );
        if drawn == 0 {
            std::process::exit(1);
        }
    }

    Ok(())
}
