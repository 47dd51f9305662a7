mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, KeyBindings, LogConfig, UiConfig, WalletConfig, QUIT_KEY};
