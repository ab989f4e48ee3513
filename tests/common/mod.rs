//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use character_browser::api::{
    CharacterApi, CharacterDetail, CharacterId, CharacterSummary, FetchError,
};
use character_browser::characters::{CharactersState, CharactersStore};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::{mpsc, oneshot};

pub const LUKE_LIST: &str = r#"{"characters":[{"id":1,"name":"Luke"}]}"#;

pub const VADER_DETAIL: &str = r#"{"character":{
    "name":"Darth Vader","birthYear":"41.9BBY","eyeColor":"yellow","gender":"male",
    "hairColor":"none","height":202,"mass":136,"skinColor":"white"}}"#;

pub fn luke() -> CharacterSummary {
    CharacterSummary {
        id: CharacterId::from(1),
        name: "Luke".to_string(),
    }
}

/// Create a temporary config file with the given contents.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Record every state the store publishes.
pub fn record_states(store: &CharactersStore) -> mpsc::UnboundedReceiver<CharactersState> {
    let (tx, rx) = mpsc::unbounded_channel();
    store.subscribe(move |state: &CharactersState| {
        let _ = tx.send(state.clone());
    });
    rx
}

/// Receive the next published state, failing the test after a second.
pub async fn next_state(rx: &mut mpsc::UnboundedReceiver<CharactersState>) -> CharactersState {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("no state published in time")
        .expect("store dropped")
}

type Pending<T> = oneshot::Receiver<Result<T, FetchError>>;

/// `CharacterApi` whose calls resolve only when the test says so.
///
/// Each `list_characters` call takes the next gate queued with
/// [`GatedApi::gate_list`]; resolving gates out of order simulates responses
/// arriving out of order.
#[derive(Default)]
pub struct GatedApi {
    list_gates: Mutex<VecDeque<Pending<Vec<CharacterSummary>>>>,
}

impl GatedApi {
    pub fn gate_list(&self) -> oneshot::Sender<Result<Vec<CharacterSummary>, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().push_back(rx);
        tx
    }
}

#[async_trait]
impl CharacterApi for GatedApi {
    async fn list_characters(&self) -> Result<Vec<CharacterSummary>, FetchError> {
        let gate = self
            .list_gates
            .lock()
            .pop_front()
            .expect("list_characters called without a gate");
        gate.await
            .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".into())))
    }

    async fn character(&self, id: &CharacterId) -> Result<CharacterDetail, FetchError> {
        Err(FetchError::Network(format!("no detail for {id}")))
    }
}

/// `CharacterApi` returning the same outcome every time.
pub struct FixedApi {
    pub list: Result<Vec<CharacterSummary>, FetchError>,
}

#[async_trait]
impl CharacterApi for FixedApi {
    async fn list_characters(&self) -> Result<Vec<CharacterSummary>, FetchError> {
        self.list.clone()
    }

    async fn character(&self, id: &CharacterId) -> Result<CharacterDetail, FetchError> {
        Err(FetchError::Network(format!("no detail for {id}")))
    }
}

pub fn fixed(list: Result<Vec<CharacterSummary>, FetchError>) -> Arc<dyn CharacterApi> {
    Arc::new(FixedApi { list })
}
