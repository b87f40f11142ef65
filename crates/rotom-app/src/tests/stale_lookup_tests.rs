use std::sync::Arc;
use std::time::Duration;

use rotom_api::Catalog;
use rotom_config::Config;
use rotom_types::AppEvent;
use tokio::time::timeout;

use crate::events::search::handle_search;
use crate::state::AppState;
use crate::tests::stub::StubCatalog;

#[tokio::test]
async fn newer_search_wins_over_slow_older_one() {
    let mut stub = StubCatalog::new();
    stub.insert(25, "pikachu", &["electric"]);
    stub.insert(133, "eevee", &["normal"]);
    stub.delay("pikachu", Duration::from_millis(300));

    let catalog: Arc<dyn Catalog> = Arc::new(stub);
    let state = Arc::new(AppState::new(Config::new()));
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    // Older search, still in flight when the newer one starts.
    let slow = tokio::spawn({
        let state = Arc::clone(&state);
        let catalog = Arc::clone(&catalog);
        let tx = tx.clone();
        async move { handle_search(state, catalog, &tx, "pikachu".to_string()).await }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    handle_search(Arc::clone(&state), Arc::clone(&catalog), &tx, "eevee".to_string())
        .await
        .expect("search failed");

    let first = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout waiting for display event")
        .expect("channel closed");
    match first {
        AppEvent::ShowEntry { entry, .. } => assert_eq!(entry.name, "eevee"),
        other => panic!("expected ShowEntry, got {other:?}"),
    }

    // Let the slow lookup finish, then confirm it never reached the display.
    slow.await.expect("task panicked").expect("search failed");

    loop {
        match timeout(Duration::from_millis(100), rx.recv()).await {
            Ok(Ok(AppEvent::ShowEntry { entry, .. })) => {
                assert_ne!(entry.name, "pikachu", "stale lookup reached the display");
            }
            Ok(Ok(_)) => {}
            Ok(Err(_)) | Err(_) => break,
        }
    }
}

#[tokio::test]
async fn enrichments_carry_the_lookup_generation() {
    let mut stub = StubCatalog::new();
    stub.insert(25, "pikachu", &["electric"]);

    let catalog: Arc<dyn Catalog> = Arc::new(stub);
    let state = Arc::new(AppState::new(Config::new()));
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    handle_search(Arc::clone(&state), catalog, &tx, "pikachu".to_string())
        .await
        .expect("search failed");

    let mut saw_entry = None;
    let mut saw_occurrences = None;
    for _ in 0..3 {
        match timeout(Duration::from_secs(2), rx.recv()).await {
            Ok(Ok(AppEvent::ShowEntry { generation, .. })) => saw_entry = Some(generation),
            Ok(Ok(AppEvent::ShowOccurrences { generation, .. })) => {
                saw_occurrences = Some(generation);
            }
            Ok(Ok(AppEvent::ShowAbilities { .. })) => {}
            Ok(Ok(other)) => panic!("unexpected event: {other:?}"),
            Ok(Err(e)) => panic!("channel error: {e}"),
            Err(_) => break,
        }
    }

    let generation = saw_entry.expect("entry never displayed");
    assert_eq!(saw_occurrences, Some(generation));
    assert!(state.is_current(generation));
}

#[tokio::test]
async fn not_found_surfaces_as_status_message() {
    let catalog: Arc<dyn Catalog> = Arc::new(StubCatalog::new());
    let state = Arc::new(AppState::new(Config::new()));
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    handle_search(state, catalog, &tx, "doesnotexist".to_string())
        .await
        .expect("search failed");

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed");
    match event {
        AppEvent::Status(message) => assert_eq!(message, "Pokémon not found!"),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn generation_counter_is_monotonic() {
    let state = AppState::new(Config::new());

    let first = state.begin_lookup();
    let second = state.begin_lookup();

    assert!(second > first);
    assert!(!state.is_current(first));
    assert!(state.is_current(second));
}
