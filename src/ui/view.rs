//! Terminal-backed implementation of the onboarding view.

use parking_lot::Mutex;
use std::collections::VecDeque;

use crate::ui::screen::ScreenIntent;
use crate::welcome::{Destination, WelcomeView};

/// Queues display commands as screen intents.
///
/// The presenter calls in synchronously; the app drains the queue on the
/// UI thread and feeds it to the screen reducer before the next draw.
#[derive(Default)]
pub struct TerminalWelcomeView {
    pending: Mutex<VecDeque<ScreenIntent>>,
}

impl TerminalWelcomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued intents, oldest first.
    pub fn drain(&self) -> Vec<ScreenIntent> {
        self.pending.lock().drain(..).collect()
    }

    fn push(&self, destination: Destination) {
        self.pending.lock().push_back(ScreenIntent::Show(destination));
    }
}

impl WelcomeView for TerminalWelcomeView {
    fn show_welcome_main_fragment(&self) {
        self.push(Destination::WelcomeMain);
    }

    fn show_description_fragment(&self) {
        self.push(Destination::Description);
    }

    fn show_passwords_fragment(&self) {
        self.push(Destination::Passwords);
    }

    fn show_main_activity(&self) {
        self.push(Destination::MainActivity);
    }
}
