use super::error::RepositoryError;

/// Display commands the onboarding presenter can issue.
///
/// Implemented by the UI layer. None of these can fail from the
/// presenter's point of view; a transition the UI cannot perform is the
/// UI's own concern.
pub trait WelcomeView {
    /// Initial welcome screen.
    fn show_welcome_main_fragment(&self);

    /// "Create new wallet" explanation step.
    fn show_description_fragment(&self);

    /// Password setup step. Also stands in for the recovery phrase screen
    /// until that screen exists.
    fn show_passwords_fragment(&self);

    /// Main wallet application screen.
    fn show_main_activity(&self);
}

/// Onboarding facts the presenter may look up.
///
/// Calls must return promptly: they run on the UI thread. Implementations
/// doing slow I/O should do it elsewhere and deliver the outcome through
/// [`WelcomePresenter::dispatch_if_current`](super::WelcomePresenter::dispatch_if_current).
pub trait WelcomeRepository {
    /// Whether a wallet has already been created on this device.
    fn wallet_exists(&self) -> Result<bool, RepositoryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStatus {
    /// A wallet exists and can be opened.
    Present,
    /// Nothing to open yet.
    Missing,
}

impl WalletStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WalletStatus::Present => "Wallet found",
            WalletStatus::Missing => "No wallet yet",
        }
    }
}

impl From<bool> for WalletStatus {
    fn from(exists: bool) -> Self {
        if exists {
            WalletStatus::Present
        } else {
            WalletStatus::Missing
        }
    }
}
