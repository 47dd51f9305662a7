//! In-memory repository for presenter tests.

#![allow(dead_code)]

use beam_welcome::welcome::{RepositoryError, WelcomeRepository};
use std::cell::Cell;
use std::io;
use std::path::PathBuf;

/// Answers `wallet_exists` from a fixed outcome and counts lookups.
pub struct FakeRepository {
    outcome: Option<bool>,
    lookups: Cell<usize>,
}

impl FakeRepository {
    pub fn present() -> Self {
        Self::with_outcome(Some(true))
    }

    pub fn missing() -> Self {
        Self::with_outcome(Some(false))
    }

    /// Every lookup fails with a storage error.
    pub fn failing() -> Self {
        Self::with_outcome(None)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    fn with_outcome(outcome: Option<bool>) -> Self {
        Self {
            outcome,
            lookups: Cell::new(0),
        }
    }
}

impl WelcomeRepository for FakeRepository {
    fn wallet_exists(&self) -> Result<bool, RepositoryError> {
        self.lookups.set(self.lookups.get() + 1);
        self.outcome.ok_or_else(|| RepositoryError::Storage {
            path: PathBuf::from("/fake/wallet.db"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "fake storage offline"),
        })
    }
}
