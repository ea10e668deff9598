//! Startup locale resolution.
//!
//! Precedence is the persisted preference, then the device locale when the
//! app ships that language, then the built-in default. When the preference
//! store cannot be read the built-in default is used directly, without
//! consulting the device. Bootstrap never writes: the preference is only
//! created by an explicit selection.

use evenshare_core::logging::targets;
use evenshare_layout::LocaleTag;

use super::preferences::LocalePreferences;
use crate::config::LocaleConfig;
use crate::store::KeyValueStore;

/// Source of the device locale.
pub trait SystemLocale {
    /// Return the device locale string when available.
    fn system_locale(&self) -> Option<String>;
}

/// Device locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    #[cfg(feature = "localization")]
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }

    #[cfg(not(feature = "localization"))]
    fn system_locale(&self) -> Option<String> {
        None
    }
}

/// A fixed device locale, for previews and tests.
#[derive(Debug, Default, Clone)]
pub struct FixedLocale(pub Option<String>);

impl SystemLocale for FixedLocale {
    fn system_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Where the startup locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    /// The user's saved choice.
    Persisted,
    /// The device language, matched against the supported list.
    Device,
    /// The built-in fallback, [`DEFAULT_LOCALE`](evenshare_layout::DEFAULT_LOCALE).
    Default,
}

/// The locale the app starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupLocale {
    /// The locale to activate.
    pub tag: LocaleTag,
    /// How it was chosen.
    pub source: LocaleSource,
}

impl StartupLocale {
    fn fallback() -> Self {
        Self {
            tag: LocaleTag::default_locale(),
            source: LocaleSource::Default,
        }
    }
}

/// Pick the supported locale matching a device locale string.
///
/// An exact tag match wins; otherwise the first supported tag with the same
/// primary language is used.
pub fn match_supported(device: &str, supported: &[LocaleTag]) -> Option<LocaleTag> {
    let device = LocaleTag::new(device).ok()?;
    supported
        .iter()
        .find(|tag| tag.as_str().eq_ignore_ascii_case(device.as_str()))
        .or_else(|| {
            let language = device.language();
            supported.iter().find(|tag| tag.language() == language)
        })
        .cloned()
}

/// Decide the startup locale.
#[tracing::instrument(skip_all, name = "evenshare::bootstrap")]
pub async fn resolve_startup_locale<S: KeyValueStore>(
    preferences: &LocalePreferences<S>,
    system: &impl SystemLocale,
    config: &LocaleConfig,
) -> StartupLocale {
    let startup = match preferences.try_load().await {
        Ok(Some(tag)) => StartupLocale {
            tag,
            source: LocaleSource::Persisted,
        },
        Ok(None) => match system
            .system_locale()
            .and_then(|raw| match_supported(&raw, &config.supported_locales))
        {
            Some(tag) => StartupLocale {
                tag,
                source: LocaleSource::Device,
            },
            None => StartupLocale::fallback(),
        },
        Err(_) => StartupLocale::fallback(),
    };

    tracing::info!(
        target: targets::LOCALE,
        locale = %startup.tag,
        source = ?startup.source,
        "startup locale resolved"
    );
    startup
}
