//! Reducer for the character detail view.

use crate::mvi::Reducer;

use super::intent::CharacterViewIntent;
use super::state::CharacterViewState;

pub struct CharacterViewReducer;

impl Reducer for CharacterViewReducer {
    type State = CharacterViewState;
    type Action = CharacterViewIntent;

    fn reduce(state: Self::State, intent: Self::Action) -> Self::State {
        match intent {
            CharacterViewIntent::Open { id } => CharacterViewState::Loading { id },

            // Results land whenever they arrive, even for a previously opened id.
            CharacterViewIntent::Loaded { id, character } => match state {
                CharacterViewState::Closed => CharacterViewState::Closed,
                _ => CharacterViewState::Loaded { id, character },
            },

            CharacterViewIntent::Failed { id, error } => match state {
                CharacterViewState::Closed => CharacterViewState::Closed,
                _ => CharacterViewState::Failed { id, error },
            },

            CharacterViewIntent::Close => CharacterViewState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CharacterDetail, CharacterId, DisplayValue, FetchError};

    fn detail(name: &str) -> CharacterDetail {
        CharacterDetail {
            name: Some(DisplayValue::Text(name.into())),
            ..CharacterDetail::default()
        }
    }

    #[test]
    fn open_starts_loading() {
        let state = CharacterViewReducer::reduce(
            CharacterViewState::Closed,
            CharacterViewIntent::Open {
                id: CharacterId::from(1),
            },
        );
        assert_eq!(
            state,
            CharacterViewState::Loading {
                id: CharacterId::from(1)
            }
        );
    }

    #[test]
    fn loaded_replaces_loading() {
        let state = CharacterViewState::Loading {
            id: CharacterId::from(1),
        };
        let state = CharacterViewReducer::reduce(
            state,
            CharacterViewIntent::Loaded {
                id: CharacterId::from(1),
                character: detail("Luke"),
            },
        );
        assert!(matches!(state, CharacterViewState::Loaded { ref character, .. } if *character == detail("Luke")));
    }

    #[test]
    fn late_result_for_previous_id_still_wins() {
        let state = CharacterViewState::Loading {
            id: CharacterId::from(2),
        };
        let state = CharacterViewReducer::reduce(
            state,
            CharacterViewIntent::Loaded {
                id: CharacterId::from(1),
                character: detail("Luke"),
            },
        );
        assert_eq!(state.id(), Some(&CharacterId::from(1)));
    }

    #[test]
    fn failure_is_shown() {
        let state = CharacterViewReducer::reduce(
            CharacterViewState::Loading {
                id: CharacterId::from(9),
            },
            CharacterViewIntent::Failed {
                id: CharacterId::from(9),
                error: FetchError::Status { status: 404 },
            },
        );
        assert!(matches!(state, CharacterViewState::Failed { .. }));
    }

    #[test]
    fn results_after_close_are_dropped() {
        let state = CharacterViewReducer::reduce(
            CharacterViewState::Closed,
            CharacterViewIntent::Loaded {
                id: CharacterId::from(1),
                character: detail("Luke"),
            },
        );
        assert_eq!(state, CharacterViewState::Closed);
    }

    #[test]
    fn close_hides_view() {
        let state = CharacterViewReducer::reduce(
            CharacterViewState::Loading {
                id: CharacterId::from(1),
            },
            CharacterViewIntent::Close,
        );
        assert_eq!(state, CharacterViewState::Closed);
    }
}
