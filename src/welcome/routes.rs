//! Intent → destination table.
//!
//! Intent names and the screens they land on are decoupled here. Retargeting
//! an intent is a one-line change in [`route`].

use super::contract::WelcomeView;
use super::intent::WelcomeIntent;

/// Sub-screens the onboarding flow can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    WelcomeMain,
    Description,
    Passwords,
    MainActivity,
}

impl Destination {
    /// Issue the display command for this destination.
    pub fn show_on<V: WelcomeView + ?Sized>(self, view: &V) {
        match self {
            Destination::WelcomeMain => view.show_welcome_main_fragment(),
            Destination::Description => view.show_description_fragment(),
            Destination::Passwords => view.show_passwords_fragment(),
            Destination::MainActivity => view.show_main_activity(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Destination::WelcomeMain => "Welcome",
            Destination::Description => "Create new wallet",
            Destination::Passwords => "Set password",
            Destination::MainActivity => "Wallet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Show(Destination),
    /// Not built yet; carries a human-readable feature name.
    Unimplemented(&'static str),
}

pub fn route(intent: WelcomeIntent) -> Route {
    match intent {
        WelcomeIntent::ViewIsReady => Route::Show(Destination::WelcomeMain),
        WelcomeIntent::CreateWallet => Route::Show(Destination::Description),
        // TODO: point at the recovery phrase screen once it exists.
        WelcomeIntent::GeneratePhrase => Route::Show(Destination::Passwords),
        WelcomeIntent::OpenWallet => Route::Show(Destination::MainActivity),
        WelcomeIntent::ChangeWallet => Route::Unimplemented("change wallet"),
    }
}
