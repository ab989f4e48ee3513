use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::trace;

use crate::mvi::Reducer;

use super::thunk::{Dispatcher, RawDispatch};

type Listener<S> = Box<dyn Fn(&S) + Send + Sync>;

struct Inner<S> {
    state: Mutex<S>,
    listeners: RwLock<Vec<Listener<S>>>,
}

impl<S: crate::mvi::State> Inner<S> {
    /// Reduce under the lock so each dispatch is applied atomically and
    /// listeners observe transitions in the order they happened.
    fn apply<R: Reducer<State = S>>(&self, action: R::Action) {
        let mut state = self.state.lock();
        let previous = std::mem::take(&mut *state);
        let snapshot = previous.clone();
        *state = R::reduce(previous, action);

        if *state == snapshot {
            trace!("state unchanged");
            return;
        }
        for listener in self.listeners.read().iter() {
            listener(&state);
        }
    }
}

/// Owns the application state for one reducer.
///
/// Clones share the same state. Listeners run while the state lock is held,
/// so a listener must not dispatch.
pub struct Store<R: Reducer> {
    inner: Arc<Inner<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer + 'static> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(initial),
                listeners: RwLock::new(Vec::new()),
            }),
            _reducer: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state.lock().clone()
    }

    /// Register a callback invoked with every new state.
    ///
    /// Dispatches that leave the state equal to its previous value are not
    /// reported.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        self.inner.listeners.write().push(Box::new(listener));
    }

    /// Dispatch that only understands plain actions.
    pub fn raw_dispatch(&self) -> RawDispatch<R::Action> {
        let inner = Arc::clone(&self.inner);
        Arc::new(move |action| inner.apply::<R>(action))
    }

    /// Dispatch that also accepts thunks.
    pub fn dispatcher(&self) -> Dispatcher<R::Action> {
        Dispatcher::enhance(self.raw_dispatch())
    }
}

impl<R: Reducer + 'static> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
