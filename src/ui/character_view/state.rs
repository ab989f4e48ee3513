//! State for the character detail view.

use crate::api::{CharacterDetail, CharacterId, FetchError};
use crate::mvi::State;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CharacterViewState {
    /// No detail route is active.
    #[default]
    Closed,

    /// Request for `id` is in flight.
    Loading { id: CharacterId },

    Loaded {
        id: CharacterId,
        character: CharacterDetail,
    },

    Failed { id: CharacterId, error: FetchError },
}

impl State for CharacterViewState {}

impl CharacterViewState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Id of the character currently shown (or being loaded).
    pub fn id(&self) -> Option<&CharacterId> {
        match self {
            Self::Closed => None,
            Self::Loading { id } | Self::Loaded { id, .. } | Self::Failed { id, .. } => Some(id),
        }
    }
}
