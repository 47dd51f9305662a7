//! Base trait for UI state in MVI architecture.

/// Marker for state owned by the UI thread and rebuilt by a [`Reducer`].
///
/// `Default` is the state before anything has been displayed; `PartialEq`
/// lets callers skip redraws when a batch leaves the state unchanged.
///
/// [`Reducer`]: super::Reducer
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
