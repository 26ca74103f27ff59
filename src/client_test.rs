use super::*;
use crate::session::SessionState;
use crate::token_store::MemoryTokenStore;

fn config() -> ClientConfig {
    ClientConfig::new("http://localhost:8000/api/v1")
}

#[tokio::test]
async fn fresh_client_starts_unauthenticated() {
    let client = RadarClient::with_token_store(&config(), Box::new(MemoryTokenStore::new())).unwrap();
    assert_eq!(client.session().state(), SessionState::Unauthenticated);
    assert!(!client.session().is_authenticated());
    assert!(client.session().current_user().is_none());
}

#[tokio::test]
async fn stored_token_starts_the_client_validating() {
    let store = MemoryTokenStore::with_token("persisted-tok");
    let client = RadarClient::with_token_store(&config(), Box::new(store)).unwrap();
    assert_eq!(client.session().state(), SessionState::Validating);
}

#[tokio::test]
async fn clones_share_one_session() {
    let store = MemoryTokenStore::with_token("persisted-tok");
    let client = RadarClient::with_token_store(&config(), Box::new(store)).unwrap();
    let observer = client.clone();
    let mut changes = observer.session().subscribe();

    client.session().logout();

    assert_eq!(observer.session().state(), SessionState::Unauthenticated);
    assert!(changes.has_changed().unwrap());
    assert_eq!(*changes.borrow_and_update(), SessionState::Unauthenticated);
}
