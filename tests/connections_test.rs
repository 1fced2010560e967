//! Connection service integration tests

mod helpers;

use assert_matches::assert_matches;
use helpers::{event, profile, MemoryStore};
use realconnect::services::connection::ConnectionService;
use realconnect::utils::errors::RealConnectError;

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    let host = profile(99, "Host");
    store.add_profile(host.clone());
    store.add_event(event(10, 99, "Mixer", 3), host.clone());
    store.add_event(event(11, 99, "Dinner", 4), host);
    for id in 1..=3 {
        store.add_profile(profile(id, &format!("User {id}")));
    }
    store
}

#[tokio::test]
async fn test_create_connection_is_idempotent_and_direction_agnostic() {
    let service = ConnectionService::new(seeded_store());

    let first = service.create_connection(1, 2, 10).await.unwrap();
    let repeat = service.create_connection(1, 2, 10).await.unwrap();
    let reversed = service.create_connection(2, 1, 10).await.unwrap();

    assert_eq!(first.id, repeat.id);
    assert_eq!(first.id, reversed.id);
    // The original direction is preserved on the stored record.
    assert_eq!(reversed.from_user_id, 1);
    assert_eq!(reversed.to_user_id, 2);

    // Exactly one counterpart shows up for either endpoint.
    assert_eq!(service.list_connections(1).await.unwrap().len(), 1);
    assert_eq!(service.list_connections(2).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_connections_returns_other_endpoint() {
    let service = ConnectionService::new(seeded_store());
    service.create_connection(1, 2, 10).await.unwrap();
    service.create_connection(3, 1, 10).await.unwrap();

    let mut ids: Vec<i64> = service
        .list_connections(1)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3]);

    let ids: Vec<i64> = service
        .list_connections(2)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_same_pair_may_connect_at_different_events() {
    let service = ConnectionService::new(seeded_store());
    let at_mixer = service.create_connection(1, 2, 10).await.unwrap();
    let at_dinner = service.create_connection(2, 1, 11).await.unwrap();

    assert_ne!(at_mixer.id, at_dinner.id);
    assert_eq!(service.list_connections(1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_self_connection_is_rejected() {
    let service = ConnectionService::new(seeded_store());
    let result = service.create_connection(1, 1, 10).await;
    assert_matches!(result, Err(RealConnectError::InvalidInput(_)));
}
