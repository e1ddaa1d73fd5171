// End-to-end tests for SessionDeck wiring
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::test_helpers::{make_response, make_session, wait_until, MockBridge, TEST_PID};
use crate::bridge::HostBridge;
use crate::config::DeckConfig;
use crate::deck::SessionDeck;
use crate::hotkey::HOTKEY_STORAGE_KEY;
use crate::overrides::OverrideKind;
use crate::session::SessionStatus;
use crate::storage::{KeyValueStore, MemoryStore};

fn test_config() -> DeckConfig {
    DeckConfig {
        poll_interval: Duration::from_secs(60),
        storage_dir: PathBuf::from("unused"),
        default_hotkey: "Option+Space".to_string(),
    }
}

fn deck_with(bridge: &Arc<MockBridge>, store: &Arc<MemoryStore>) -> SessionDeck {
    SessionDeck::with_store(
        Arc::clone(bridge) as Arc<dyn HostBridge>,
        Arc::clone(store) as Arc<dyn KeyValueStore>,
        test_config(),
    )
}

#[test]
fn test_start_registers_saved_hotkey_and_fetches() {
    let bridge = Arc::new(MockBridge::new());
    bridge.push_ok(make_response(vec![make_session("a", "alpha", SessionStatus::Waiting)]));
    let store = Arc::new(MemoryStore::new());
    store.set_item(HOTKEY_STORAGE_KEY, "Command+K").unwrap();
    let deck = deck_with(&bridge, &store);

    deck.start();

    assert_eq!(bridge.registered(), vec!["Command+K"]);
    assert!(wait_until(Duration::from_secs(2), || !deck.engine().is_loading()));
    assert_eq!(deck.engine().snapshot().waiting_count, 1);
    deck.shutdown();
    assert!(!deck.engine().is_polling());
}

#[test]
fn test_render_merges_overrides_into_snapshot() {
    let bridge = Arc::new(MockBridge::new());
    bridge.push_ok(make_response(vec![
        make_session("a", "alpha", SessionStatus::Waiting),
        make_session("b", "beta", SessionStatus::Idle),
    ]));
    let store = Arc::new(MemoryStore::new());
    let deck = deck_with(&bridge, &store);
    deck.engine().fetch();

    deck.rename("b", "Docs site").unwrap();
    deck.set_url("b", "docs.example.com").unwrap();

    let rows = deck.render(|view, rows| {
        assert!(!view.is_loading);
        rows.into_iter()
            .map(|row| {
                let href = row.href();
                (row.display_name, href)
            })
            .collect::<Vec<_>>()
    });
    assert_eq!(
        rows,
        vec![
            ("alpha".to_string(), None),
            ("Docs site".to_string(), Some("https://docs.example.com".to_string())),
        ]
    );
}

#[test]
fn test_rename_back_to_host_name_clears_override() {
    let bridge = Arc::new(MockBridge::new());
    bridge.push_ok(make_response(vec![make_session("a", "alpha", SessionStatus::Idle)]));
    let store = Arc::new(MemoryStore::new());
    let deck = deck_with(&bridge, &store);
    deck.engine().fetch();

    deck.rename("a", "Custom").unwrap();
    deck.rename("a", "alpha").unwrap();

    assert_eq!(deck.overrides().get(OverrideKind::Name, "a"), None);
}

#[test]
fn test_focus_by_id() {
    let bridge = Arc::new(MockBridge::new());
    bridge.push_ok(make_response(vec![make_session("a", "alpha", SessionStatus::Idle)]));
    let store = Arc::new(MemoryStore::new());
    let deck = deck_with(&bridge, &store);
    deck.engine().fetch();

    deck.focus("missing");
    deck.focus("a");

    assert_eq!(
        *bridge.focus_calls.lock().unwrap(),
        vec![(TEST_PID, "/Users/test/Projects/alpha".to_string())]
    );
}

#[test]
fn test_hotkey_settings_use_configured_default() {
    let bridge = Arc::new(MockBridge::new());
    let store = Arc::new(MemoryStore::new());
    let deck = deck_with(&bridge, &store);

    assert_eq!(deck.hotkey_settings().hotkey(), "Option+Space");
}

#[test]
fn test_file_backed_deck_persists_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = DeckConfig {
        storage_dir: dir.path().to_path_buf(),
        ..test_config()
    };
    let bridge: Arc<dyn HostBridge> = Arc::new(MockBridge::new());

    SessionDeck::new(Arc::clone(&bridge), config.clone())
        .set_url("a", "example.com")
        .unwrap();

    let reopened = SessionDeck::new(bridge, config);
    assert_eq!(
        reopened.overrides().get(OverrideKind::Url, "a").as_deref(),
        Some("example.com")
    );
}

#[test]
fn test_config_overrides() {
    let base = test_config();

    let config = base.clone().with_overrides(Some("500"), Some("/tmp/deck"));
    assert_eq!(config.poll_interval, Duration::from_millis(500));
    assert_eq!(config.storage_dir, PathBuf::from("/tmp/deck"));

    let ignored = base.clone().with_overrides(Some("0"), Some("  "));
    assert_eq!(ignored, base);

    let garbage = base.clone().with_overrides(Some("fast"), None);
    assert_eq!(garbage.poll_interval, base.poll_interval);
}

#[test]
fn test_default_config() {
    let config = DeckConfig::default();

    assert_eq!(config.poll_interval, Duration::from_millis(3000));
    assert_eq!(config.default_hotkey, "Option+Space");
    assert!(config.storage_dir.ends_with("session-deck"));
}
