use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::error::FetchError;
use super::types::{CharacterDetail, CharacterId, CharacterSummary};
use super::CharacterApi;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct CharactersEnvelope {
    #[serde(default)]
    characters: Option<Vec<CharacterSummary>>,
}

#[derive(Deserialize)]
struct CharacterEnvelope {
    #[serde(default)]
    character: Option<CharacterDetail>,
}

/// [`CharacterApi`] backed by `reqwest`.
///
/// Single attempt per call: no retries and no request timeout.
pub struct HttpCharacterApi {
    client: Client,
    endpoint: String,
}

impl HttpCharacterApi {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.endpoint, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CharacterApi for HttpCharacterApi {
    async fn list_characters(&self) -> Result<Vec<CharacterSummary>, FetchError> {
        let envelope: CharactersEnvelope = self.get_json("/characters").await?;
        envelope
            .characters
            .ok_or_else(|| FetchError::missing_field("characters"))
    }

    async fn character(&self, id: &CharacterId) -> Result<CharacterDetail, FetchError> {
        let envelope: CharacterEnvelope = self.get_json(&format!("/characters/{}", id)).await?;
        envelope
            .character
            .ok_or_else(|| FetchError::missing_field("character"))
    }
}
