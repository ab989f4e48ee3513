//! Remote character API.
//!
//! The rest of the crate talks to the server only through [`CharacterApi`],
//! so workflows can run against the real HTTP client or a test double.

mod error;
mod http;
mod types;

use async_trait::async_trait;

pub use error::FetchError;
pub use http::HttpCharacterApi;
pub use types::{CharacterDetail, CharacterId, CharacterSummary, DisplayValue};

/// Read-only access to the character endpoints.
#[async_trait]
pub trait CharacterApi: Send + Sync {
    /// `GET <endpoint>/characters`, returning the `characters` field.
    async fn list_characters(&self) -> Result<Vec<CharacterSummary>, FetchError>;

    /// `GET <endpoint>/characters/:id`, returning the `character` field.
    async fn character(&self, id: &CharacterId) -> Result<CharacterDetail, FetchError>;
}
