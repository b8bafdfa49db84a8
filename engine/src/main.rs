//! Headless demo shell for the Stablefolio client engine.
//!
//! Wires the engine together the way a UI shell would (config, durable
//! session slot, token catalog, controller), then drives a short scripted
//! swap session and prints what a screen would render.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use engine::core::config::EngineConfig;
use engine::core::service::CatalogService;
use engine::portfolio;
use engine::services::catalog::StaticCatalog;
use engine::session::{SessionController, SessionKind};
use engine::storage::JsonFileStore;

const CONFIG_PATH: &str = "./stablefolio-config.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("engine=info")),
        )
        .init();

    let config_path = Path::new(CONFIG_PATH);
    let config = EngineConfig::load_or_default(config_path);
    if !config_path.exists() {
        if let Err(e) = config.save(config_path) {
            tracing::warn!(error = %e, "Failed to write default configuration");
        }
    }

    let catalog = StaticCatalog::new();
    let tokens = match catalog.fetch_tokens().await {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load token catalog");
            return;
        }
    };
    tracing::info!(token_count = tokens.len(), "Token catalog loaded");

    let store = Arc::new(JsonFileStore::new(config.session_path(SessionKind::Swap)));
    let controller = Arc::new(SessionController::new(SessionKind::Swap, store, &config));

    // Echo session events the way a screen would repaint from them
    let events = controller.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(?event, "Session changed");
        }
    });

    let mxns = tokens.iter().find(|t| t.symbol == "MXNs");
    let usdc = tokens.iter().find(|t| t.symbol == "USDC");
    let (Some(mxns), Some(usdc)) = (mxns, usdc) else {
        tracing::error!("Demo tokens missing from catalog");
        return;
    };

    controller.select_from_token(mxns.clone());
    controller.select_to_token(usdc.clone());
    controller.set_from_amount("1000");
    print_session(&controller);

    controller.switch_tokens();
    print_session(&controller);

    controller.set_half();
    controller.refresh_rate();
    print_session(&controller);

    // Let the background staleness check run for a moment
    controller.start();
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    controller.stop();

    let summary = portfolio::summarize(&tokens);
    tracing::info!(total_value = summary.total_value, "Portfolio valued");
    for position in &summary.positions {
        tracing::info!(
            symbol = %position.symbol,
            amount = position.amount,
            value = position.value,
            share = format!("{:.1}%", position.share * 100.0),
            "Position"
        );
    }
}

fn print_session(controller: &SessionController) {
    let session = controller.snapshot();
    let pair = format!(
        "{} -> {}",
        session
            .from_token
            .as_ref()
            .map(|t| t.symbol.as_str())
            .unwrap_or("-"),
        session
            .to_token
            .as_ref()
            .map(|t| t.symbol.as_str())
            .unwrap_or("-"),
    );
    tracing::info!(
        pair = %pair,
        from_amount = %session.from_amount,
        to_amount = %session.to_amount,
        rate = ?session.rate,
        updated = %session
            .last_updated
            .map(shared::utils::format_timestamp)
            .unwrap_or_else(|| "-".to_string()),
        "Session state"
    );
}
