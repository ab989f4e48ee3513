//! State container with thunk dispatch.
//!
//! A [`Store`] owns one state value and applies actions to it through a
//! [`Reducer`](crate::mvi::Reducer). Callers never touch the state directly;
//! they hold a [`Dispatcher`] which accepts either a plain action or a
//! [`Thunk`] that runs a workflow and dispatches actions as it goes.

mod container;
mod thunk;

pub use container::Store;
pub use thunk::{DispatchArg, Dispatcher, RawDispatch, Thunk};
