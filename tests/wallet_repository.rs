use beam_welcome::welcome::{LocalWalletRepository, WelcomeRepository};
use tempfile::TempDir;

#[test]
fn missing_path_means_no_wallet() {
    let dir = TempDir::new().expect("temp dir");
    let repository = LocalWalletRepository::new(dir.path().join("wallet.db"));

    assert!(!repository.wallet_exists().unwrap());
}

#[test]
fn existing_file_means_wallet() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("wallet.db");
    std::fs::write(&path, b"opaque").expect("write wallet");
    let repository = LocalWalletRepository::new(&path);

    assert!(repository.wallet_exists().unwrap());
    assert_eq!(repository.storage_path(), path.as_path());
}

#[test]
fn existing_directory_counts_as_wallet() {
    let dir = TempDir::new().expect("temp dir");
    let repository = LocalWalletRepository::new(dir.path());

    assert!(repository.wallet_exists().unwrap());
}
