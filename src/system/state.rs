//! Base trait for machine state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to act on the machine's phase)
/// - Comparable (PartialEq for detecting committed changes)
pub trait MachineState: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
