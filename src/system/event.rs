//! Base trait for events (user/effect inputs) in the feedback loop.

/// Marker trait for event objects.
///
/// Events represent:
/// - User actions (a screen appeared, more items requested)
/// - Effect results (a remote response arrived, a call failed)
///
/// Events carry only the data needed for a transition; they are
/// processed by reducers to produce new states.
pub trait MachineEvent: Clone + std::fmt::Debug + Send + 'static {}
