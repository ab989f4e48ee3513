//! Character list feature.
//!
//! # Architecture
//!
//! - `action.rs` - closed action vocabulary (`FETCHING`, `RESPONSE_COMPLETE`, `ERROR`)
//! - `state.rs` - list state record
//! - `reducer.rs` - pure state transitions
//! - `fetch.rs` - thunks that talk to the API and dispatch lifecycle actions

mod action;
mod fetch;
mod reducer;
mod state;

pub use action::CharactersAction;
pub use fetch::{fetch_characters, initial_load};
pub use reducer::CharactersReducer;
pub use state::{CharactersState, ListStatus};

use crate::store::{Dispatcher, Store};

pub type CharactersStore = Store<CharactersReducer>;
pub type CharactersDispatcher = Dispatcher<CharactersAction>;
