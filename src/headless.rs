//! Line-oriented shell for scripts and CI: no terminal UI, JSON on stdout.

use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::api::{CharacterApi, CharacterId};
use crate::characters::{fetch_characters, CharactersState, CharactersStore};

/// Run the list workflow once, writing every state transition as a JSON line.
///
/// Returns the state the workflow settled in.
pub async fn run_list<W: Write>(
    api: Arc<dyn CharacterApi>,
    out: &mut W,
) -> anyhow::Result<CharactersState> {
    let store = CharactersStore::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    store.subscribe(move |state: &CharactersState| {
        let _ = tx.send(state.clone());
    });

    store.dispatcher().dispatch(fetch_characters(api));

    while let Some(state) = rx.recv().await {
        writeln!(out, "{}", serde_json::to_string(&state)?)?;
        if !state.loading {
            break;
        }
    }
    Ok(store.state())
}

/// Fetch one character and print it. Returns whether the fetch succeeded.
pub async fn run_character<W: Write>(
    api: Arc<dyn CharacterApi>,
    id: &CharacterId,
    out: &mut W,
) -> anyhow::Result<bool> {
    let (line, ok) = match api.character(id).await {
        Ok(character) => (json!({ "character": character }), true),
        Err(error) => (json!({ "error": error }), false),
    };
    writeln!(out, "{}", line)?;
    Ok(ok)
}
