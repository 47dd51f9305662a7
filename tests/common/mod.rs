//! Shared test doubles for the onboarding presenter.

#![allow(dead_code, unused_imports)]

pub mod fake_repository;

use beam_welcome::config::KeyBindings;
use beam_welcome::ui::app::App;
use beam_welcome::welcome::{Destination, WelcomeView};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use parking_lot::Mutex;

pub use fake_repository::FakeRepository;

/// View that records every display command in call order.
#[derive(Default)]
pub struct RecordingView {
    commands: Mutex<Vec<Destination>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<Destination> {
        self.commands.lock().clone()
    }

    fn record(&self, destination: Destination) {
        self.commands.lock().push(destination);
    }
}

impl WelcomeView for RecordingView {
    fn show_welcome_main_fragment(&self) {
        self.record(Destination::WelcomeMain);
    }

    fn show_description_fragment(&self) {
        self.record(Destination::Description);
    }

    fn show_passwords_fragment(&self) {
        self.record(Destination::Passwords);
    }

    fn show_main_activity(&self) {
        self.record(Destination::MainActivity);
    }
}

pub fn make_app() -> App<FakeRepository> {
    App::new(KeyBindings::default(), FakeRepository::missing())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}
