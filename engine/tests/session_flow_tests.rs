//! End-to-end session scenarios against the public engine API.

use std::sync::Arc;

use engine::core::config::EngineConfig;
use engine::session::rates::RATE_JITTER;
use engine::session::{SessionController, SessionKind};
use engine::services::catalog::StaticCatalog;
use engine::storage::{JsonFileStore, MemoryStore, NullStore, SessionStore};
use shared::dto::token::Token;

fn token(symbol: &str) -> Token {
    StaticCatalog::tokens()
        .into_iter()
        .find(|t| t.symbol == symbol)
        .expect("token in static catalog")
}

fn controller_with(store: Arc<dyn SessionStore>) -> SessionController {
    SessionController::new(SessionKind::Swap, store, &EngineConfig::default())
}

fn parse(text: &str) -> f64 {
    text.parse().expect("derived amount parses")
}

#[test]
fn mxns_to_usdc_quote_lands_in_band() {
    let controller = controller_with(Arc::new(MemoryStore::new()));
    controller.select_from_token(token("MXNs"));
    controller.select_to_token(token("USDC"));
    controller.set_from_amount("1000");

    let session = controller.snapshot();
    let rate = session.rate.expect("rate for a complete pair");
    assert!((rate - 0.058).abs() <= 0.058 * RATE_JITTER);

    let derived = parse(&session.to_amount);
    assert!((derived - 58.0).abs() <= 58.0 * RATE_JITTER + 1e-6);
}

#[test]
fn switch_reverses_the_trade_without_resetting_it() {
    let controller = controller_with(Arc::new(MemoryStore::new()));
    controller.select_from_token(token("MXNs"));
    controller.select_to_token(token("USDC"));
    controller.set_from_amount("1000");

    let before = controller.snapshot();
    let rate = before.rate.unwrap();
    let derived = before.to_amount.clone();

    assert!(controller.switch_tokens());
    let after = controller.snapshot();

    assert_eq!(after.from_token.unwrap().symbol, "USDC");
    assert_eq!(after.to_token.unwrap().symbol, "MXNs");
    assert_eq!(after.from_amount, derived);
    assert_eq!(after.to_amount, "1000");

    let inverted = after.rate.unwrap();
    assert!((inverted - 1.0 / rate).abs() < 1e-9);
    assert!((inverted - 17.24).abs() <= 17.24 * (RATE_JITTER + 1e-3));
}

#[test]
fn invalid_amount_text_is_rejected_silently() {
    let controller = controller_with(Arc::new(MemoryStore::new()));
    controller.select_from_token(token("MXNs"));
    controller.select_to_token(token("USDC"));
    controller.set_from_amount("1000");

    assert!(!controller.set_from_amount("12.5.3"));
    assert!(!controller.set_from_amount("12a"));
    assert!(!controller.set_from_amount("-12"));

    assert_eq!(controller.snapshot().from_amount, "1000");
}

#[test]
fn clearing_the_amount_clears_the_derived_side() {
    let controller = controller_with(Arc::new(MemoryStore::new()));
    controller.select_from_token(token("MXNs"));
    controller.select_to_token(token("USDC"));
    controller.set_from_amount("1000");
    assert!(!controller.snapshot().to_amount.is_empty());

    assert!(controller.set_from_amount(""));
    let session = controller.snapshot();
    assert_eq!(session.from_amount, "");
    assert_eq!(session.to_amount, "");
}

#[test]
fn set_max_uses_the_full_holding() {
    let controller = controller_with(Arc::new(MemoryStore::new()));
    controller.select_from_token(token("MXNs"));
    controller.select_to_token(token("USDC"));

    assert!(controller.set_max());
    assert_eq!(controller.snapshot().from_amount, "100000");

    assert!(controller.set_half());
    assert_eq!(controller.snapshot().from_amount, "50000");
}

#[test]
fn reload_resumes_the_persisted_session() {
    let path = std::env::temp_dir().join(format!(
        "stablefolio-flow-test-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let (from_id, rate, from_amount) = {
        let store = Arc::new(JsonFileStore::new(&path));
        let controller = controller_with(store);
        controller.select_from_token(token("MXNs"));
        controller.select_to_token(token("USDC"));
        controller.set_from_amount("1000");
        let session = controller.snapshot();
        (
            session.from_token.unwrap().id,
            session.rate.unwrap(),
            session.from_amount,
        )
    };

    let store = Arc::new(JsonFileStore::new(&path));
    let controller = controller_with(store);
    let resumed = controller.snapshot();

    assert_eq!(resumed.from_token.unwrap().id, from_id);
    assert_eq!(resumed.to_token.unwrap().id, "usdc");
    assert_eq!(resumed.from_amount, from_amount);
    assert_eq!(resumed.rate, Some(rate));

    std::fs::remove_file(&path).ok();
}

#[test]
fn null_store_degrades_to_in_memory_only() {
    let controller = controller_with(Arc::new(NullStore::new()));
    controller.select_from_token(token("MXNs"));
    controller.select_to_token(token("USDC"));
    controller.set_from_amount("1000");

    // fully functional in memory
    let session = controller.snapshot();
    assert_eq!(session.from_amount, "1000");
    assert!(session.rate.is_some());

    // but nothing survives a "reload"
    let resumed = controller_with(Arc::new(NullStore::new()));
    assert!(resumed.snapshot().from_token.is_none());
}

#[test]
fn unwritable_slot_does_not_break_transitions() {
    let store = Arc::new(JsonFileStore::new("/proc/no-such-dir/session.json"));
    let controller = controller_with(store);

    controller.select_from_token(token("MXNs"));
    controller.select_to_token(token("USDC"));
    assert!(controller.set_from_amount("1000"));
    assert_eq!(controller.snapshot().from_amount, "1000");
}

#[test]
fn redeem_and_swap_sessions_use_distinct_slots() {
    let config = EngineConfig::default();
    assert_ne!(
        config.session_path(SessionKind::Swap),
        config.session_path(SessionKind::Redeem)
    );
}
