//! Workflows that load the character list.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{error, info, warn};

use crate::api::{CharacterApi, FetchError};
use crate::store::{Dispatcher, Thunk};

use super::action::CharactersAction;

/// Fetch the character list once.
///
/// Dispatches `FETCHING` synchronously, then issues the request on a tokio
/// task and dispatches `RESPONSE_COMPLETE` or `ERROR` when it settles. Outside
/// a tokio runtime the request cannot start and `ERROR` is dispatched right
/// away. Concurrent invocations are not coordinated: whichever finishes last
/// decides the final state.
pub fn fetch_characters(api: Arc<dyn CharacterApi>) -> Thunk<CharactersAction> {
    Thunk::new("fetch_characters", move |dispatch: Dispatcher<CharactersAction>| {
        dispatch.dispatch(CharactersAction::Fetching);

        let Ok(runtime) = Handle::try_current() else {
            error!("character list fetch dispatched outside a tokio runtime");
            dispatch.dispatch(CharactersAction::Failed {
                error: FetchError::NoRuntime,
            });
            return;
        };

        runtime.spawn(async move {
            let outcome = api.list_characters().await;
            match &outcome {
                Ok(characters) => info!(count = characters.len(), "character list loaded"),
                Err(error) => warn!(%error, "character list fetch failed"),
            }
            dispatch.dispatch(CharactersAction::from(outcome));
        });
    })
}

/// Thunk dispatched when the shell mounts.
///
/// Dispatches nothing unless `fetch_on_start` is set.
pub fn initial_load(api: Arc<dyn CharacterApi>, fetch_on_start: bool) -> Thunk<CharactersAction> {
    Thunk::new("initial_load", move |dispatch: Dispatcher<CharactersAction>| {
        if fetch_on_start {
            dispatch.dispatch(fetch_characters(api));
        }
    })
}
