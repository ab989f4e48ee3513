//! Actions for the character list.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{CharacterSummary, FetchError};
use crate::mvi::Action;

/// Messages the character list reducer understands.
///
/// On the wire an action is `{"type": KIND, "payload": ...}`. A `type` this
/// enum does not name decodes to [`CharactersAction::Unrecognized`] whatever
/// its payload, and reduces to the unchanged state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharactersAction {
    /// A list fetch has started.
    Fetching,

    /// The list fetch returned these characters.
    ResponseComplete { characters: Vec<CharacterSummary> },

    /// The list fetch failed.
    #[serde(rename = "ERROR")]
    Failed { error: FetchError },

    /// Any kind not listed above.
    Unrecognized,
}

/// Envelope every action travels in.
#[derive(Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct ResponseCompletePayload {
    characters: Vec<CharacterSummary>,
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: FetchError,
}

impl<'de> Deserialize<'de> for CharactersAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireAction::deserialize(deserializer)?;
        match wire.kind.as_str() {
            // FETCHING carries nothing; whatever came along is ignored.
            "FETCHING" => Ok(CharactersAction::Fetching),
            "RESPONSE_COMPLETE" => {
                let payload: ResponseCompletePayload =
                    serde_json::from_value(wire.payload).map_err(de::Error::custom)?;
                Ok(CharactersAction::ResponseComplete {
                    characters: payload.characters,
                })
            }
            "ERROR" => {
                let payload: ErrorPayload =
                    serde_json::from_value(wire.payload).map_err(de::Error::custom)?;
                Ok(CharactersAction::Failed {
                    error: payload.error,
                })
            }
            _ => Ok(CharactersAction::Unrecognized),
        }
    }
}

impl Action for CharactersAction {
    fn kind(&self) -> &'static str {
        match self {
            CharactersAction::Fetching => "FETCHING",
            CharactersAction::ResponseComplete { .. } => "RESPONSE_COMPLETE",
            CharactersAction::Failed { .. } => "ERROR",
            CharactersAction::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl From<Result<Vec<CharacterSummary>, FetchError>> for CharactersAction {
    fn from(outcome: Result<Vec<CharacterSummary>, FetchError>) -> Self {
        match outcome {
            Ok(characters) => CharactersAction::ResponseComplete { characters },
            Err(error) => CharactersAction::Failed { error },
        }
    }
}
