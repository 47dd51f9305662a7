//! Local wallet lookup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::contract::WelcomeRepository;
use super::error::RepositoryError;

/// Reports whether wallet storage exists at a fixed path.
///
/// Only presence is checked; the storage format is opaque here.
#[derive(Debug, Clone)]
pub struct LocalWalletRepository {
    storage_path: PathBuf,
}

impl LocalWalletRepository {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}

impl WelcomeRepository for LocalWalletRepository {
    fn wallet_exists(&self) -> Result<bool, RepositoryError> {
        match std::fs::metadata(&self.storage_path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(RepositoryError::Storage {
                path: self.storage_path.clone(),
                source,
            }),
        }
    }
}
