//! Intents for the screen state.

use crate::ui::mvi::Intent;
use crate::welcome::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenIntent {
    /// Presenter asked for `Destination` to be shown.
    Show(Destination),
}

impl Intent for ScreenIntent {}
