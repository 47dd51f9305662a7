use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub keys: KeyBindings,
    #[serde(default)]
    pub log: LogConfig,
}

/// File logging. Off unless a file is named here, on the CLI, or in
/// `BEAM_WELCOME_LOG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Where wallet storage lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Path whose presence means a wallet already exists.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
}

/// Single-character key bindings for the onboarding screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_create_wallet_key")]
    pub create_wallet: char,
    #[serde(default = "default_generate_phrase_key")]
    pub generate_phrase: char,
    #[serde(default = "default_open_wallet_key")]
    pub open_wallet: char,
    #[serde(default = "default_change_wallet_key")]
    pub change_wallet: char,
    /// Back to the welcome screen.
    #[serde(default = "default_back_key")]
    pub back: char,
    /// Detach or reattach the view.
    #[serde(default = "default_toggle_view_key")]
    pub toggle_view: char,
}

/// Reserved for quitting; bindings may not use it.
pub const QUIT_KEY: char = 'q';

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_storage_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("beam-welcome").join("wallet.db")
}

fn default_create_wallet_key() -> char {
    'c'
}

fn default_generate_phrase_key() -> char {
    'g'
}

fn default_open_wallet_key() -> char {
    'o'
}

fn default_change_wallet_key() -> char {
    'w'
}

fn default_back_key() -> char {
    'b'
}

fn default_toggle_view_key() -> char {
    'd'
}

impl KeyBindings {
    /// All bindings with their names, in display order.
    pub fn entries(&self) -> [(&'static str, char); 6] {
        [
            ("create wallet", self.create_wallet),
            ("generate phrase", self.generate_phrase),
            ("open wallet", self.open_wallet),
            ("change wallet", self.change_wallet),
            ("back", self.back),
            ("detach view", self.toggle_view),
        ]
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            create_wallet: default_create_wallet_key(),
            generate_phrase: default_generate_phrase_key(),
            open_wallet: default_open_wallet_key(),
            change_wallet: default_change_wallet_key(),
            back: default_back_key(),
            toggle_view: default_toggle_view_key(),
        }
    }
}
