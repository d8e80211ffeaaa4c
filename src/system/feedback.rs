//! Feedback trait: effect producers driven by state changes.

use async_trait::async_trait;

use super::event::MachineEvent;
use super::state::MachineState;

/// An effect producer re-evaluated against every committed state.
///
/// A feedback must guard on the state variant it cares about and return
/// an empty vector, with no side effect, when the guard does not match.
/// Any error raised while producing the effect must be converted into an
/// ordinary failure event inside `run`; the loop never sees an error.
#[async_trait]
pub trait Feedback: Send + Sync {
    /// The state type this feedback observes.
    type State: MachineState;

    /// The event type this feedback emits.
    type Event: MachineEvent;

    /// Observe the latest state and produce follow-up events.
    async fn run(&self, state: &Self::State) -> Vec<Self::Event>;
}
