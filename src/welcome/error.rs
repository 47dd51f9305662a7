use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a [`WelcomeRepository`](super::WelcomeRepository).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to access wallet storage '{path}': {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by the onboarding presenter.
///
/// A detached view is not an error and never shows up here.
#[derive(Debug, Error)]
pub enum WelcomeError {
    /// The intent has no implementation yet.
    #[error("Feature not available: {feature}")]
    Unimplemented { feature: &'static str },

    /// Repository lookup failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl WelcomeError {
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, WelcomeError::Unimplemented { .. })
    }
}
