//! Visible sub-screen of the terminal front end.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Which destination is on screen, plus a short trail
//! - `intent.rs` - Display commands queued by the terminal view
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::{ScreenState, TRAIL_LEN};
