use crate::config::KeyBindings;
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenReducer, ScreenState};
use crate::ui::view::TerminalWelcomeView;
use crate::welcome::{
    WalletStatus, WelcomeError, WelcomeIntent, WelcomePresenter, WelcomeRepository,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Generic MVI dispatch: takes current state, folds the intents, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intents:expr) => {
        $self.$field = <$reducer>::reduce_all(std::mem::take(&mut $self.$field), $intents);
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

pub struct App<R: WelcomeRepository> {
    should_quit: bool,
    keys: KeyBindings,
    /// The UI owns the view; the presenter only holds a weak reference.
    view: Arc<TerminalWelcomeView>,
    presenter: WelcomePresenter<TerminalWelcomeView, R>,
    screen: ScreenState,
    status: Option<StatusLine>,
    wallet_status: Option<Result<WalletStatus, String>>,
}

impl<R: WelcomeRepository> App<R> {
    pub fn new(keys: KeyBindings, repository: R) -> Self {
        let view = Arc::new(TerminalWelcomeView::new());
        let presenter = WelcomePresenter::new(&view, repository);
        Self {
            should_quit: false,
            keys,
            view,
            presenter,
            screen: ScreenState::default(),
            status: None,
            wallet_status: None,
        }
    }

    /// Signal readiness to the presenter and load wallet status.
    pub fn start(&mut self) {
        self.refresh_wallet_status();
        self.dispatch(WelcomeIntent::ViewIsReady);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn wallet_status(&self) -> Option<&Result<WalletStatus, String>> {
        self.wallet_status.as_ref()
    }

    pub fn is_view_attached(&self) -> bool {
        self.presenter.is_bound()
    }

    /// Forward `intent` to the presenter and apply whatever it displayed.
    pub fn dispatch(&mut self, intent: WelcomeIntent) {
        match self.presenter.handle(intent) {
            Ok(dispatch) if dispatch.is_delivered() => self.status = None,
            Ok(dispatch) => {
                self.set_status(
                    StatusKind::Info,
                    format!(
                        "View detached: \"{}\" not shown",
                        dispatch.destination().title()
                    ),
                );
            }
            Err(err) => self.report_error(&err),
        }
        self.sync_view();
    }

    /// Detach the view from the presenter, or reattach it and re-signal
    /// readiness.
    pub fn toggle_view(&mut self) {
        if self.presenter.is_bound() {
            self.presenter.detach_view();
            info!("view detached by user");
            self.set_status(StatusKind::Info, "View detached".to_string());
        } else {
            self.presenter.attach_view(&self.view);
            info!("view reattached by user");
            self.dispatch(WelcomeIntent::ViewIsReady);
        }
    }

    pub fn refresh_wallet_status(&mut self) {
        self.wallet_status = Some(match self.presenter.wallet_status() {
            Ok(status) => Ok(status),
            Err(err) => {
                warn!(error = %err, "wallet status lookup failed");
                Err(err.to_string())
            }
        });
    }

    fn sync_view(&mut self) {
        let pending = self.view.drain();
        if !pending.is_empty() {
            dispatch_mvi!(self, screen, ScreenReducer, pending);
        }
    }

    fn report_error(&mut self, err: &WelcomeError) {
        warn!(error = %err, "intent failed");
        self.set_status(StatusKind::Error, err.to_string());
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusLine { kind, text });
    }
}
