//! Character detail view.
//!
//! The detail view keeps its own local state and does not go through the
//! shared character list store. Each time a different id is opened a new
//! request is issued; nothing stops an older request from landing later.
//!
//! # Architecture
//!
//! - `state.rs` - view state enum
//! - `intent.rs` - navigation and request outcomes
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::CharacterViewIntent;
pub use reducer::CharacterViewReducer;
pub use state::CharacterViewState;
