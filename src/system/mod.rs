//! Feedback-loop state machine primitives.
//!
//! This module provides the generic machinery for unidirectional
//! data flow driven by external events and effectful feedbacks.
//!
//! # Architecture
//!
//! ```text
//! send(event) ──→ EventBus ──→ merged event stream ──→ Reducer ──→ State
//!                                      ↑                            │
//!                                      │         ┌── observers ←────┤
//!                                      └──── Feedbacks ←────────────┘
//! ```
//!
//! - **State**: immutable snapshot of where a machine currently is
//! - **Event**: user actions or effect results; the only inputs to a reducer
//! - **Reducer**: pure function that transforms state based on events
//! - **Feedback**: effect producer re-evaluated against every new state,
//!   gated by a guard on the state variant it cares about
//! - **System**: the loop that serializes events, commits states, and
//!   feeds feedback output back into the same stream

mod bus;
mod event;
mod feedback;
mod observe;
mod reducer;
mod runtime;
mod state;
mod store;

pub use bus::EventBus;
pub use event::MachineEvent;
pub use feedback::Feedback;
pub use observe::StateStream;
pub use reducer::Reducer;
pub use runtime::{System, SystemHandle};
pub use state::MachineState;
pub use store::Store;
