//! Reducer for the detail machine.

use crate::system::Reducer;

use super::event::DetailEvent;
use super::state::DetailState;

/// Detail state transitions: `Idle → Loading → Loaded | Failed`, with an
/// explicit `Retry` back into `Loading`. No pagination branch.
pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Event = DetailEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            DetailEvent::Appeared => match state {
                DetailState::Idle(id) => DetailState::Loading(id),
                other => other,
            },

            DetailEvent::DetailLoaded(detail) => match state {
                DetailState::Loading(_) => DetailState::Loaded(detail),
                other => other,
            },

            DetailEvent::LoadFailed(error) => match state {
                DetailState::Loading(id) => DetailState::Failed { id, error },
                other => other,
            },

            DetailEvent::Retry => match state {
                DetailState::Failed { id, .. } => DetailState::Loading(id),
                other => other,
            },
        }
    }
}
