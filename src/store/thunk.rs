//! Thunk dispatch enhancer.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::mvi::Action;

/// The un-enhanced dispatch function: applies one plain action.
pub type RawDispatch<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Deferred unit of work that receives dispatch capability.
///
/// The thunk is consumed by the dispatch call that runs it. Whatever it
/// dispatches (nothing, once, many times, now or from a spawned task) is its
/// own business; the enhancer does not wait for it.
pub struct Thunk<A> {
    label: &'static str,
    body: Box<dyn FnOnce(Dispatcher<A>) + Send>,
}

impl<A> Thunk<A> {
    pub fn new<F>(label: &'static str, body: F) -> Self
    where
        F: FnOnce(Dispatcher<A>) + Send + 'static,
    {
        Self {
            label,
            body: Box::new(body),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<A> fmt::Debug for Thunk<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk").field("label", &self.label).finish()
    }
}

/// Everything that can be handed to [`Dispatcher::dispatch`].
#[derive(Debug)]
pub enum DispatchArg<A> {
    Action(A),
    Thunk(Thunk<A>),
}

impl<A: Action> From<A> for DispatchArg<A> {
    fn from(action: A) -> Self {
        DispatchArg::Action(action)
    }
}

impl<A> From<Thunk<A>> for DispatchArg<A> {
    fn from(thunk: Thunk<A>) -> Self {
        DispatchArg::Thunk(thunk)
    }
}

/// Enhanced dispatch handle.
///
/// Cheap to clone; every clone forwards to the same raw dispatch.
pub struct Dispatcher<A> {
    raw: RawDispatch<A>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            raw: Arc::clone(&self.raw),
        }
    }
}

impl<A: Action> Dispatcher<A> {
    /// Wrap a raw dispatch so it also accepts thunks.
    pub fn enhance(raw: RawDispatch<A>) -> Self {
        Self { raw }
    }

    /// Plain actions go straight to the raw dispatch. Thunks are run right
    /// away with this dispatcher and never reach the raw dispatch themselves.
    pub fn dispatch(&self, arg: impl Into<DispatchArg<A>>) {
        match arg.into() {
            DispatchArg::Action(action) => {
                debug!(target: "dispatch", kind = action.kind(), "action");
                (self.raw)(action);
            }
            DispatchArg::Thunk(thunk) => {
                debug!(target: "dispatch", thunk = thunk.label(), "thunk");
                (thunk.body)(self.clone());
            }
        }
    }
}
