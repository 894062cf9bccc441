//! Unidirectional state flow shared by every screen slice.
//!
//! ```text
//! key / response ──→ Intent ──→ Store ──reduce──→ State ──→ draw
//!        ↑                                                   │
//!        └───────────────────────────────────────────────────┘
//! ```
//!
//! A slice defines a state type, an intent enum and a reducer. Only the
//! reducer produces new states; views and dispatchers read or dispatch.

mod store;

pub use store::{Dispatch, Store};

/// A state delta: a user action or the result of a finished request.
pub trait Intent: Send + 'static {}

/// A snapshot a view can draw on its own.
///
/// `Default` is the initial value, which also lets reducers take the state
/// out of its owner with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function for one slice.
///
/// Intents that do not apply hand the input state back unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
