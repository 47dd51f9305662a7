use std::collections::VecDeque;

use crate::ui::mvi::UiState;
use crate::welcome::Destination;

/// How many past destinations the breadcrumb keeps.
pub const TRAIL_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    /// Nothing is shown until the presenter issues its first command.
    pub current: Option<Destination>,
    /// Previously shown destinations, oldest first.
    pub trail: VecDeque<Destination>,
    /// Total display commands applied.
    pub shown: u64,
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn is_showing(&self, destination: Destination) -> bool {
        self.current == Some(destination)
    }
}
