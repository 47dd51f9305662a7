//! Reducer for the screen state.

use crate::ui::mvi::Reducer;

use super::intent::ScreenIntent;
use super::state::{ScreenState, TRAIL_LEN};

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::Show(destination) => {
                let ScreenState {
                    current,
                    mut trail,
                    shown,
                } = state;
                if let Some(previous) = current {
                    trail.push_back(previous);
                    while trail.len() > TRAIL_LEN {
                        trail.pop_front();
                    }
                }
                ScreenState {
                    current: Some(destination),
                    trail,
                    shown: shown + 1,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::welcome::Destination;

    #[test]
    fn first_show_has_empty_trail() {
        let state = ScreenReducer::reduce(
            ScreenState::default(),
            ScreenIntent::Show(Destination::WelcomeMain),
        );
        assert!(state.is_showing(Destination::WelcomeMain));
        assert!(state.trail.is_empty());
        assert_eq!(state.shown, 1);
    }

    #[test]
    fn repeated_show_is_counted() {
        let mut state = ScreenState::default();
        for _ in 0..2 {
            state = ScreenReducer::reduce(state, ScreenIntent::Show(Destination::Passwords));
        }
        assert_eq!(state.shown, 2);
        assert_eq!(state.trail, vec![Destination::Passwords]);
    }
}
