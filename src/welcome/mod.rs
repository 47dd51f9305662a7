//! Wallet onboarding entry flow.
//!
//! The [`WelcomePresenter`] turns the five onboarding intents into display
//! commands on a [`WelcomeView`]. It owns no rendering code and tolerates
//! its view going away at any time.
//!
//! - `contract.rs` - View and repository capabilities
//! - `intent.rs` - User intents (ViewIsReady, CreateWallet, ...)
//! - `routes.rs` - Intent → destination table
//! - `presenter.rs` - Dispatch with detached-view tolerance
//! - `repository.rs` - Local wallet lookup

mod contract;
mod error;
mod intent;
mod presenter;
mod repository;
pub mod routes;

pub use contract::{WalletStatus, WelcomeRepository, WelcomeView};
pub use error::{RepositoryError, WelcomeError};
pub use intent::WelcomeIntent;
pub use presenter::{Dispatch, WelcomePresenter};
pub use repository::LocalWalletRepository;
pub use routes::{Destination, Route};
