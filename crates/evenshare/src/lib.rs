//! Evenshare - locale direction, preference persistence and navigation chrome.
//!
//! This is the main crate that re-exports the public APIs of the workspace.
//!
//! # Example
//!
//! ```no_run
//! use evenshare::config::EvenshareConfig;
//! use evenshare::layout::{LayoutPrimitive, LogicalSide, LocaleTag};
//! use evenshare::locale::{DirectionSwitchCoordinator, LocalePreferences, SysLocale};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EvenshareConfig::default();
//! let prefs = LocalePreferences::new(config.open_store()?);
//! let (coordinator, _) =
//!     DirectionSwitchCoordinator::bootstrap(prefs, &SysLocale, &config.locale).await;
//!
//! coordinator.request_locale_change(LocaleTag::new("ar")?).await;
//! let margin = coordinator
//!     .layout_context()
//!     .resolve(&LayoutPrimitive::TextAlign(LogicalSide::Start));
//! println!("{margin}");
//! # Ok(())
//! # }
//! ```

pub use evenshare_core::*;

/// Direction resolution and logical layout primitives.
pub mod layout {
    pub use evenshare_layout::*;
}

pub mod chrome;
pub mod config;
pub mod locale;
pub mod store;
