//! Intents for the onboarding entry flow.

use crate::ui::mvi::Intent;

/// User intents delivered to the onboarding presenter. None carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WelcomeIntent {
    /// Screen attached and ready to render.
    ViewIsReady,
    CreateWallet,
    GeneratePhrase,
    OpenWallet,
    ChangeWallet,
}

impl Intent for WelcomeIntent {}

impl WelcomeIntent {
    pub const ALL: [WelcomeIntent; 5] = [
        WelcomeIntent::ViewIsReady,
        WelcomeIntent::CreateWallet,
        WelcomeIntent::GeneratePhrase,
        WelcomeIntent::OpenWallet,
        WelcomeIntent::ChangeWallet,
    ];
}
