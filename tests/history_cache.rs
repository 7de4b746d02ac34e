mod common;

use std::cell::RefCell;

use leptos::prelude::{Dispose, GetUntracked, Owner, RwSignal};

use commit_composer::error::ErrorKind;
use commit_composer::state::{HistoryCache, HistoryState, SessionController, SessionState};

use common::{history_entry, limit, login_result, ScriptedApi};

#[tokio::test]
async fn test_starts_not_loaded_without_fetching() {
    let api = ScriptedApi::new();
    let cache = HistoryCache::detached(&api, limit(5));
    assert_eq!(cache.state(), HistoryState::NotLoaded);
    assert_eq!(api.history_calls(), 0);
}

#[tokio::test]
async fn test_empty_history_is_loaded() {
    let api = ScriptedApi::new().then_history(Ok(vec![]));
    let cache = HistoryCache::detached(&api, limit(5));

    assert!(cache.reveal().await);

    assert_eq!(cache.state(), HistoryState::Loaded(vec![]));
    assert_eq!(*api.history_limits.borrow(), vec![5]);
}

#[tokio::test]
async fn test_second_reveal_uses_cache() {
    let entries = vec![history_entry(2, "fix: b"), history_entry(1, "feat: a")];
    let api = ScriptedApi::new()
        .then_history(Ok(entries.clone()))
        .then_history(Ok(vec![]));
    let cache = HistoryCache::detached(&api, limit(5));

    assert!(cache.reveal().await);
    assert!(!cache.reveal().await);
    assert!(!cache.reveal().await);

    assert_eq!(api.history_calls(), 1);
    assert_eq!(cache.state(), HistoryState::Loaded(entries));
}

#[tokio::test]
async fn test_concurrent_reveals_issue_one_call() {
    let api = ScriptedApi::new().then_history(Ok(vec![history_entry(1, "feat: a")]));
    let cache = HistoryCache::detached(&api, limit(5));

    let (first, second) = tokio::join!(cache.reveal(), cache.reveal());

    assert!(first);
    assert!(!second);
    assert_eq!(api.history_calls(), 1);
}

#[tokio::test]
async fn test_order_is_kept_as_received() {
    // deliberately not newest-first
    let entries = vec![
        history_entry(3, "feat: c"),
        history_entry(9, "fix: z"),
        history_entry(1, "docs: a"),
    ];
    let api = ScriptedApi::new().then_history(Ok(entries));
    let cache = HistoryCache::detached(&api, limit(10));

    cache.reveal().await;

    let HistoryState::Loaded(loaded) = cache.state() else {
        panic!("expected Loaded");
    };
    let ids: Vec<i64> = loaded.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 9, 1]);
}

#[tokio::test]
async fn test_failed_load_can_be_retried() {
    let api = ScriptedApi::new()
        .then_history(Err(ErrorKind::Unreachable))
        .then_history(Ok(vec![history_entry(1, "feat: a")]));
    let cache = HistoryCache::detached(&api, limit(5));

    cache.reveal().await;
    assert_eq!(cache.state(), HistoryState::LoadFailed(ErrorKind::Unreachable));

    assert!(cache.reveal().await);
    assert_eq!(cache.state(), HistoryState::Loaded(vec![history_entry(1, "feat: a")]));
}

#[tokio::test]
async fn test_explicit_load_takes_limit() {
    let api = ScriptedApi::new().then_history(Ok(vec![]));
    let cache = HistoryCache::detached(&api, limit(5));

    assert!(cache.load(limit(20)).await);
    assert_eq!(*api.history_limits.borrow(), vec![20]);
}

#[tokio::test]
async fn test_reload_refetches_after_success() {
    let api = ScriptedApi::new()
        .then_history(Ok(vec![history_entry(1, "feat: a")]))
        .then_history(Ok(vec![history_entry(2, "fix: b"), history_entry(1, "feat: a")]));
    let cache = HistoryCache::detached(&api, limit(5));

    cache.reveal().await;
    assert!(cache.reload().await);

    assert_eq!(api.history_calls(), 2);
    let HistoryState::Loaded(entries) = cache.state() else {
        panic!("expected Loaded");
    };
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_reload_ignored_while_loading() {
    let api = ScriptedApi::new().then_history(Ok(vec![]));
    let cache = HistoryCache::detached(&api, limit(5));

    let (revealed, reloaded) = tokio::join!(cache.reveal(), cache.reload());

    assert!(revealed);
    assert!(!reloaded);
    assert_eq!(api.history_calls(), 1);
}

#[tokio::test]
async fn test_history_failure_leaves_session_alone() {
    let api = ScriptedApi::new()
        .then_analyze(Ok(login_result()))
        .then_history(Err(ErrorKind::remote("database is locked")));
    let session = SessionController::new(&api, RefCell::new(SessionState::Idle));
    let cache = HistoryCache::detached(&api, limit(5));

    session.on_analyze().await;
    cache.reveal().await;

    assert_eq!(session.state(), SessionState::Ready(login_result()));
    assert_eq!(
        cache.state(),
        HistoryState::LoadFailed(ErrorKind::Remote("database is locked".to_string()))
    );
}

#[tokio::test]
async fn test_session_failure_leaves_history_alone() {
    let api = ScriptedApi::new()
        .then_history(Ok(vec![history_entry(1, "feat: a")]))
        .then_analyze(Err(ErrorKind::Unreachable));
    let session = SessionController::detached(&api);
    let cache = HistoryCache::detached(&api, limit(5));

    cache.reveal().await;
    session.on_analyze().await;

    assert!(session.state().error().is_some());
    assert_eq!(cache.state(), HistoryState::Loaded(vec![history_entry(1, "feat: a")]));
}

#[tokio::test]
async fn test_entries_after_unmount_are_dropped() {
    let api = ScriptedApi::new().then_history(Ok(vec![history_entry(1, "feat: a")]));
    let owner = Owner::new();
    let state = owner.with(|| RwSignal::new(HistoryState::NotLoaded));
    let cache = HistoryCache::new(&api, state, limit(5));

    let (stored, ()) = tokio::join!(cache.reveal(), async { state.dispose() });

    assert!(!stored);
    assert_eq!(api.history_calls(), 1);
    assert_eq!(cache.state(), HistoryState::NotLoaded);
}

#[tokio::test]
async fn test_reveal_on_unmounted_panel_does_nothing() {
    let api = ScriptedApi::new();
    let owner = Owner::new();
    let state = owner.with(|| RwSignal::new(HistoryState::NotLoaded));
    let cache = HistoryCache::new(&api, state, limit(5));
    state.dispose();

    assert!(!cache.reveal().await);
    assert!(!cache.reload().await);
    assert_eq!(api.history_calls(), 0);
}

#[tokio::test]
async fn test_signal_backed_history_loads() {
    let api = ScriptedApi::new().then_history(Ok(vec![history_entry(2, "fix: b")]));
    let owner = Owner::new();
    let state = owner.with(|| RwSignal::new(HistoryState::NotLoaded));
    let cache = HistoryCache::new(&api, state, limit(3));

    assert!(cache.reveal().await);
    assert_eq!(state.get_untracked(), HistoryState::Loaded(vec![history_entry(2, "fix: b")]));
}
