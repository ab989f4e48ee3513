//! State for the character list.

use serde::Serialize;

use crate::api::{CharacterSummary, FetchError};
use crate::mvi::State;

/// The shared character list record.
///
/// `loading == true` always comes with an empty list and no error; the
/// reducer discards everything when a fetch starts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CharactersState {
    pub characters: Vec<CharacterSummary>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl State for CharactersState {}

/// What the list view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing fetched yet, or the server returned an empty list.
    Empty,
    Loading,
    Failed,
    Loaded,
}

impl CharactersState {
    pub fn fetching() -> Self {
        Self {
            characters: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn loaded(characters: Vec<CharacterSummary>) -> Self {
        Self {
            characters,
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: FetchError) -> Self {
        Self {
            characters: Vec::new(),
            loading: false,
            error: Some(error),
        }
    }

    /// An empty list only means "failed" when `error` says so.
    pub fn status(&self) -> ListStatus {
        if self.loading {
            ListStatus::Loading
        } else if self.error.is_some() {
            ListStatus::Failed
        } else if self.characters.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Loaded
        }
    }
}
