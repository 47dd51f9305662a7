use std::sync::Arc;

use tracing::{debug, warn};

use crate::ui::mvi::BasePresenter;

use super::contract::{WalletStatus, WelcomeRepository, WelcomeView};
use super::error::WelcomeError;
use super::intent::WelcomeIntent;
use super::routes::{route, Destination, Route};

/// Outcome of a display command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The bound view received the command.
    Delivered(Destination),
    /// No view was bound (or it went stale); the command was dropped.
    Skipped(Destination),
}

impl Dispatch {
    pub fn destination(&self) -> Destination {
        match self {
            Dispatch::Delivered(destination) | Dispatch::Skipped(destination) => *destination,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Dispatch::Delivered(_))
    }
}

/// Presenter for the onboarding entry screen.
///
/// Every intent resolves through [`route`] to at most one display command.
/// Commands aimed at a missing view are skipped, not failed; only
/// [`WelcomeError::Unimplemented`] is reported for intents that do nothing.
pub struct WelcomePresenter<V, R>
where
    V: WelcomeView + ?Sized,
    R: WelcomeRepository,
{
    base: BasePresenter<V>,
    repository: R,
}

impl<V, R> WelcomePresenter<V, R>
where
    V: WelcomeView + ?Sized,
    R: WelcomeRepository,
{
    pub fn new(view: &Arc<V>, repository: R) -> Self {
        Self {
            base: BasePresenter::new(view),
            repository,
        }
    }

    pub fn attach_view(&mut self, view: &Arc<V>) {
        self.base.attach_view(view);
        debug!(generation = self.base.generation(), "view attached");
    }

    pub fn detach_view(&mut self) {
        if self.base.detach_view() {
            debug!(generation = self.base.generation(), "view detached");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.base.is_bound()
    }

    /// Capture before starting deferred work; pass to
    /// [`dispatch_if_current`](Self::dispatch_if_current) when it completes.
    pub fn binding_generation(&self) -> u64 {
        self.base.generation()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn view_is_ready(&self) -> Result<Dispatch, WelcomeError> {
        self.handle(WelcomeIntent::ViewIsReady)
    }

    pub fn on_create_wallet(&self) -> Result<Dispatch, WelcomeError> {
        self.handle(WelcomeIntent::CreateWallet)
    }

    pub fn on_generate_phrase(&self) -> Result<Dispatch, WelcomeError> {
        self.handle(WelcomeIntent::GeneratePhrase)
    }

    pub fn on_open_wallet(&self) -> Result<Dispatch, WelcomeError> {
        self.handle(WelcomeIntent::OpenWallet)
    }

    pub fn on_change_wallet(&self) -> Result<Dispatch, WelcomeError> {
        self.handle(WelcomeIntent::ChangeWallet)
    }

    /// Route `intent` and issue its display command.
    pub fn handle(&self, intent: WelcomeIntent) -> Result<Dispatch, WelcomeError> {
        debug!(?intent, "intent received");
        match route(intent) {
            Route::Show(destination) => Ok(self.show(destination)),
            Route::Unimplemented(feature) => {
                warn!(?intent, feature, "intent not implemented");
                Err(WelcomeError::Unimplemented { feature })
            }
        }
    }

    /// Deliver `destination` only if the binding has not changed since
    /// `generation` was captured.
    pub fn dispatch_if_current(&self, generation: u64, destination: Destination) -> Dispatch {
        match self.base.view_if_current(generation) {
            Some(view) => {
                destination.show_on(&*view);
                Dispatch::Delivered(destination)
            }
            None => {
                debug!(?destination, generation, "stale dispatch dropped");
                Dispatch::Skipped(destination)
            }
        }
    }

    /// Ask the repository whether a wallet already exists.
    pub fn wallet_status(&self) -> Result<WalletStatus, WelcomeError> {
        let exists = self.repository.wallet_exists()?;
        Ok(WalletStatus::from(exists))
    }

    fn show(&self, destination: Destination) -> Dispatch {
        match self.base.view() {
            Some(view) => {
                destination.show_on(&*view);
                Dispatch::Delivered(destination)
            }
            None => {
                debug!(?destination, "no view bound, dispatch skipped");
                Dispatch::Skipped(destination)
            }
        }
    }
}
