//! Reducer for the character list.

use crate::mvi::Reducer;

use super::action::CharactersAction;
use super::state::CharactersState;

/// Character list state transitions.
///
/// Total and order-agnostic: whoever dispatches owns the sequencing.
pub struct CharactersReducer;

impl Reducer for CharactersReducer {
    type State = CharactersState;
    type Action = CharactersAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CharactersAction::Fetching => CharactersState::fetching(),
            CharactersAction::ResponseComplete { characters } => {
                CharactersState::loaded(characters)
            }
            CharactersAction::Failed { error } => CharactersState::failed(error),
            CharactersAction::Unrecognized => state,
        }
    }
}
