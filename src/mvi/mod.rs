//! Unidirectional data flow primitives.
//!
//! Every piece of state in the application follows the same loop:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced on every transition
//! - **Action**: plain-data message describing a requested change
//! - **Reducer**: pure function that computes the next state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
