//! Intents for the character detail view.

use crate::api::{CharacterDetail, CharacterId, FetchError};
use crate::mvi::Action;

#[derive(Debug, Clone)]
pub enum CharacterViewIntent {
    /// User navigated to `characters/:id`.
    Open { id: CharacterId },

    /// A detail request finished.
    Loaded {
        id: CharacterId,
        character: CharacterDetail,
    },

    /// A detail request failed.
    Failed { id: CharacterId, error: FetchError },

    /// User navigated away.
    Close,
}

impl Action for CharacterViewIntent {
    fn kind(&self) -> &'static str {
        match self {
            CharacterViewIntent::Open { .. } => "OPEN",
            CharacterViewIntent::Loaded { .. } => "LOADED",
            CharacterViewIntent::Failed { .. } => "FAILED",
            CharacterViewIntent::Close => "CLOSE",
        }
    }
}

impl CharacterViewIntent {
    pub fn from_outcome(id: CharacterId, outcome: Result<CharacterDetail, FetchError>) -> Self {
        match outcome {
            Ok(character) => CharacterViewIntent::Loaded { id, character },
            Err(error) => CharacterViewIntent::Failed { id, error },
        }
    }
}
