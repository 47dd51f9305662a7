//! Base trait for intents in MVI architecture.

/// Marker for a named event: a key press turned into a user intent, or a
/// display command queued by a view.
///
/// Presenters route them to views; reducers fold them into state.
pub trait Intent: Send + 'static {}
