//! Base trait for model state in MVI architecture.

/// Marker trait for model state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait ModelState: Clone + PartialEq + std::fmt::Debug + Send + 'static {}
