//! Reducer for the paginated list machine.

use crate::system::Reducer;

use super::event::ListEvent;
use super::state::ListState;

/// List state transitions.
///
/// Pure function — the catalog calls happen in the feedbacks around the
/// loop. Combinations outside the transition table return the input
/// state unchanged.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Event = ListEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            ListEvent::Appeared => match state {
                ListState::Idle => ListState::Loading,
                other => other,
            },

            ListEvent::ItemsLoaded { items, next_offset } => match state {
                ListState::Loading => ListState::Loaded { items, next_offset },
                ListState::Paginating {
                    items: mut accumulated,
                    ..
                } => {
                    // Append in arrival order, no de-duplication.
                    accumulated.extend(items);
                    ListState::Loaded {
                        items: accumulated,
                        next_offset,
                    }
                }
                other => other,
            },

            ListEvent::RequestMore { offset } => match state {
                ListState::Loaded { items, .. } => ListState::Paginating { items, offset },
                other => other,
            },

            ListEvent::LoadFailed(error) => match state {
                ListState::Loading | ListState::Paginating { .. } => ListState::Failed(error),
                other => other,
            },

            ListEvent::Retry => match state {
                ListState::Failed(_) => ListState::Loading,
                other => other,
            },
        }
    }
}
