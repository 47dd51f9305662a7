use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file when neither CLI nor config does.
pub const LOG_ENV_VAR: &str = "BEAM_WELCOME_LOG";

/// Pick the log file: `--log-file` beats `[log] file`, which beats
/// `BEAM_WELCOME_LOG`. `None` keeps logging off.
pub fn resolve_log_path(
    cli: Option<&Path>,
    config: Option<&Path>,
    env: Option<String>,
) -> Option<PathBuf> {
    cli.or(config)
        .map(Path::to_path_buf)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// `{path}.{timestamp}.{pid}`, so concurrent instances never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Initialize file-only tracing at `log_path`.
///
/// Nothing is installed without a path: writing to stdout/stderr would
/// corrupt the TUI. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(log_path: Option<&Path>) {
    let Some(log_path) = log_path else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = unique_log_path(log_path, timestamp, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            unique_path.display()
        );
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
