//! Attendance (join/leave) contract tests

mod helpers;

use assert_matches::assert_matches;
use helpers::{event, profile, MemoryStore};
use realconnect::database::ProfileStore;
use realconnect::utils::errors::RealConnectError;

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    let host = profile(99, "Host");
    store.add_profile(host.clone());
    store.add_event(event(10, 99, "Mixer", 3), host);
    store.add_profile(profile(1, "User 1"));
    store
}

#[tokio::test]
async fn test_join_event_is_idempotent() {
    let store = seeded_store();

    let first = store.join_event(10, 1).await.unwrap();
    let second = store.join_event(10, 1).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.joined_at, second.joined_at);
    assert_eq!(store.get_event_attendees(10).await.unwrap().len(), 1);
    assert!(store.is_user_attending(10, 1).await.unwrap());
}

#[tokio::test]
async fn test_join_missing_event_is_not_found() {
    let store = seeded_store();
    let missing = store.join_event(404, 1).await;
    assert_matches!(
        missing,
        Err(RealConnectError::EventNotFound { event_id: 404 })
    );
}

#[tokio::test]
async fn test_leave_event_removes_attendance() {
    let store = seeded_store();
    store.join_event(10, 1).await.unwrap();

    assert!(store.leave_event(10, 1).await.unwrap());
    assert!(!store.is_user_attending(10, 1).await.unwrap());
    // Leaving again reports nothing to remove.
    assert!(!store.leave_event(10, 1).await.unwrap());
}
