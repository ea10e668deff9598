//! Locale selection, persistence, and direction switching.
//!
//! - [`LocalePreferences`]: the saved language choice
//! - [`resolve_startup_locale`]: which locale the app starts in
//! - [`DirectionSwitchCoordinator`]: runtime locale changes and the restart
//!   needed when the layout direction flips

mod bootstrap;
mod coordinator;
mod preferences;

pub use bootstrap::{
    match_supported, resolve_startup_locale, FixedLocale, LocaleSource, StartupLocale, SysLocale,
    SystemLocale,
};
pub use coordinator::{
    DirectionSwitchCoordinator, HostShell, RestartRequest, SwitchOutcome, SwitchState,
    SwitchTransition,
};
pub use preferences::{LocalePreferences, LEGACY_LANGUAGE_KEY, SELECTED_LANGUAGE_KEY};
