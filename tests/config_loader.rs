use beam_welcome::config::{Config, ConfigError, KeyBindings, UiConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.wallet.storage_path.ends_with("beam-welcome/wallet.db"));
    assert_eq!(config.keys.create_wallet, 'c');
    assert_eq!(config.keys.generate_phrase, 'g');
    assert_eq!(config.keys.open_wallet, 'o');
    assert_eq!(config.keys.change_wallet, 'w');
    assert_eq!(config.keys.back, 'b');
    assert_eq!(config.keys.toggle_view, 'd');
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("beam-welcome/config.toml"));
}

/// An explicitly named file that does not exist must not fall back to defaults.
#[test]
fn test_missing_explicit_file_is_read_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("typo.toml");

    match Config::load_from(&missing) {
        Err(ConfigError::ReadError { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 100

[wallet]
storage_path = "/srv/beam/wallet.db"

[keys]
open_wallet = "x"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(
        config.wallet.storage_path,
        std::path::PathBuf::from("/srv/beam/wallet.db")
    );
    assert_eq!(config.keys.open_wallet, 'x');
    assert_eq!(config.keys.create_wallet, 'c');
}

#[test]
fn test_parse_error_names_path() {
    let (_dir, path) = write_config("[ui\ntick_rate_ms = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let config = Config {
        ui: UiConfig { tick_rate_ms: 0 },
        ..Config::default()
    };

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_duplicate_keys() {
    let config = Config {
        keys: KeyBindings {
            open_wallet: 'c',
            ..KeyBindings::default()
        },
        ..Config::default()
    };

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("more than once"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_quit_key() {
    let (_dir, path) = write_config("[keys]\nback = \"q\"\n");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("reserved for quit"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_log_file_from_config() {
    let (_dir, path) = write_config("[log]\nfile = \"/var/log/beam-welcome.log\"\n");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(
        config.log.file,
        Some(std::path::PathBuf::from("/var/log/beam-welcome.log"))
    );
}

#[test]
fn test_log_file_defaults_to_none() {
    assert!(Config::default().log.file.is_none());
}
