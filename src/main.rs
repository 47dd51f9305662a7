use anyhow::Context;
use beam_welcome::config::Config;
use beam_welcome::logging::{init_tracing, resolve_log_path, LOG_ENV_VAR};
use beam_welcome::welcome::LocalWalletRepository;
use clap::Parser;
use std::path::PathBuf;

/// Wallet onboarding screen.
#[derive(Debug, Parser)]
#[command(name = "beam-welcome", version, about)]
struct Args {
    /// Config file to use instead of the default location. Must exist.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Wallet storage path, overriding the config file.
    #[arg(long, value_name = "PATH")]
    wallet_path: Option<PathBuf>,

    /// Write logs to this file, overriding the config file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let log_path = resolve_log_path(
        args.log_file.as_deref(),
        config.log.file.as_deref(),
        std::env::var(LOG_ENV_VAR).ok(),
    );
    init_tracing(log_path.as_deref());
    tracing::info!(
        storage_path = %config.wallet.storage_path.display(),
        "configuration loaded"
    );

    let repository = LocalWalletRepository::new(config.wallet.storage_path.clone());
    beam_welcome::ui::run(&config, repository).context("terminal UI failed")?;
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!(
                "failed to load config from {}",
                Config::config_path().display()
            )
        })?,
    };
    if let Some(wallet_path) = &args.wallet_path {
        config.wallet.storage_path = wallet_path.clone();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_config, Args};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parse_defaults() {
        let args = Args::parse_from(["beam-welcome"]);
        assert!(args.config.is_none());
        assert!(args.wallet_path.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn parse_overrides() {
        let args = Args::parse_from([
            "beam-welcome",
            "--config",
            "/tmp/beam.toml",
            "--wallet-path",
            "/tmp/wallet.db",
            "--log-file",
            "/tmp/beam.log",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/beam.toml")));
        assert_eq!(args.wallet_path, Some(PathBuf::from("/tmp/wallet.db")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/beam.log")));
    }

    #[test]
    fn missing_explicit_config_fails_startup() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let missing = dir.path().join("typo.toml");
        let args = Args::parse_from([
            "beam-welcome".into(),
            "--config".into(),
            missing.clone().into_os_string(),
        ]);

        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn wallet_path_override_applies() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[wallet]\nstorage_path = \"/srv/a.db\"\n")
            .expect("write config");
        let args = Args::parse_from([
            "beam-welcome".into(),
            "--config".into(),
            config_path.into_os_string(),
            "--wallet-path".into(),
            std::ffi::OsString::from("/srv/b.db"),
        ]);

        let config = load_config(&args).unwrap();
        assert_eq!(config.wallet.storage_path, PathBuf::from("/srv/b.db"));
    }
}
