//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::ModelState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function of `(configuration, State, Intent) -> State`;
/// `self` carries immutable configuration such as a validation schema.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ModelState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}
