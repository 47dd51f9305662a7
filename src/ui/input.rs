use crate::config::{KeyBindings, QUIT_KEY};
use crate::ui::app::App;
use crate::welcome::{WelcomeIntent, WelcomeRepository};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Intent(WelcomeIntent),
    ToggleView,
    None,
}

pub fn resolve_key(keys: &KeyBindings, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) if c == QUIT_KEY => KeyAction::Quit,
        KeyCode::Char(c) if c == keys.create_wallet => {
            KeyAction::Intent(WelcomeIntent::CreateWallet)
        }
        KeyCode::Char(c) if c == keys.generate_phrase => {
            KeyAction::Intent(WelcomeIntent::GeneratePhrase)
        }
        KeyCode::Char(c) if c == keys.open_wallet => KeyAction::Intent(WelcomeIntent::OpenWallet),
        KeyCode::Char(c) if c == keys.change_wallet => {
            KeyAction::Intent(WelcomeIntent::ChangeWallet)
        }
        KeyCode::Char(c) if c == keys.back => KeyAction::Intent(WelcomeIntent::ViewIsReady),
        KeyCode::Char(c) if c == keys.toggle_view => KeyAction::ToggleView,
        _ => KeyAction::None,
    }
}

pub fn handle_key<R: WelcomeRepository>(app: &mut App<R>, key: KeyEvent) {
    match resolve_key(app.keys(), key) {
        KeyAction::Quit => app.request_quit(),
        KeyAction::Intent(intent) => app.dispatch(intent),
        KeyAction::ToggleView => app.toggle_view(),
        KeyAction::None => {}
    }
}
