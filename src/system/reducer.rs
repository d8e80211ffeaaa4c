//! Reducer trait for the feedback loop.

use super::event::MachineEvent;
use super::state::MachineState;

/// Reducer transforms state based on events.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Event) -> State.
/// A (state, event) combination with no transition returns the input
/// state unchanged, never an error.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: MachineState;

    /// The event type this reducer handles.
    type Event: MachineEvent;

    /// Process an event and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, event: Self::Event) -> Self::State;
}
