//! State container that owns one state value and applies its reducer.

use std::marker::PhantomData;

use super::{Intent, Reducer};

/// Capability to submit intents for processing.
///
/// Implemented by [`Store`] for direct, in-place reduction and by channel
/// senders that forward intents to the thread owning the store.
pub trait Dispatch<I: Intent> {
    fn dispatch(&mut self, intent: I);
}

type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Single owner of a state value.
///
/// The state can only change through [`Dispatch::dispatch`]; readers get a
/// shared reference. Subscribers run after every dispatch.
pub struct Store<R: Reducer> {
    state: R::State,
    subscribers: Vec<Subscriber<R::State>>,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Register a callback invoked with the new state after each dispatch.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Dispatch<R::Intent> for Store<R> {
    fn dispatch(&mut self, intent: R::Intent) {
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}
