//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer, plus the lifecycle holder shared by
//! presenters.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Presenter ──→ View ──→ Reducer ──→ State
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Presenter**: Routes intents to display commands on a detachable view

mod intent;
mod presenter;
mod reducer;
mod state;

pub use intent::Intent;
pub use presenter::BasePresenter;
pub use reducer::Reducer;
pub use state::UiState;
