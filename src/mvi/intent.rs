//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing into a field, leaving a field, pressing submit)
/// - System events (submission results, expiry timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
