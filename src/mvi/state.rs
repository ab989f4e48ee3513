//! Base trait for state records.

/// Marker trait for state objects.
///
/// States should be:
/// - Replaced, not mutated (Clone to hand out snapshots)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so observers can skip unchanged states)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
