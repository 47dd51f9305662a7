//! Entry-flow controller for a wallet onboarding screen, with a terminal
//! front end.

pub mod config;
pub mod logging;
pub mod ui;
pub mod welcome;
