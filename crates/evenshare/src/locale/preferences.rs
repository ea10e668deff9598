//! The persisted language preference.

use evenshare_core::logging::targets;
use evenshare_layout::LocaleTag;

use crate::store::{KeyValueStore, StoreResult};

/// Key holding the user's chosen language tag.
pub const SELECTED_LANGUAGE_KEY: &str = "selectedLanguage";

/// Key written by earlier releases during first-launch detection. Read once
/// as a migration source and then removed.
pub const LEGACY_LANGUAGE_KEY: &str = "appLanguage";

/// Save/load/clear of the language preference over any [`KeyValueStore`].
///
/// The preference is non-critical: storage failures are logged and reported
/// as `false` or `None`, never as errors. Callers fall back to the default
/// locale when `load()` yields nothing.
#[derive(Debug)]
pub struct LocalePreferences<S> {
    store: S,
}

impl<S: KeyValueStore> LocalePreferences<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist `tag` as the selected language. Returns `false` if the write
    /// failed.
    pub async fn save(&self, tag: &LocaleTag) -> bool {
        match self.store.set(SELECTED_LANGUAGE_KEY, tag.as_str()).await {
            Ok(()) => {
                tracing::debug!(target: targets::LOCALE, locale = %tag, "language preference saved");
                true
            }
            Err(e) => {
                tracing::warn!(target: targets::LOCALE, locale = %tag, error = %e, "failed to save language preference");
                false
            }
        }
    }

    /// Read the selected language.
    ///
    /// Returns `None` when nothing usable is stored or the store failed.
    /// A tag left under the legacy key is migrated to the current key.
    pub async fn load(&self) -> Option<LocaleTag> {
        self.try_load().await.ok().flatten()
    }

    /// Read the selected language, keeping a store failure distinct from an
    /// absent preference.
    ///
    /// A stored value that is not a valid tag counts as absent.
    pub async fn try_load(&self) -> StoreResult<Option<LocaleTag>> {
        match self.read_tag(SELECTED_LANGUAGE_KEY).await? {
            Some(tag) => Ok(Some(tag)),
            None => self.migrate_legacy().await,
        }
    }

    /// Read the selected language, falling back to the built-in default.
    pub async fn load_or_default(&self) -> LocaleTag {
        self.load().await.unwrap_or_default()
    }

    /// Forget the selected language. Returns `false` if either key could not
    /// be removed.
    pub async fn clear(&self) -> bool {
        let mut ok = true;
        for key in [SELECTED_LANGUAGE_KEY, LEGACY_LANGUAGE_KEY] {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!(target: targets::LOCALE, key, error = %e, "failed to clear language preference");
                ok = false;
            }
        }
        ok
    }

    async fn read_tag(&self, key: &str) -> StoreResult<Option<LocaleTag>> {
        let raw = self.store.get(key).await.inspect_err(|e| {
            tracing::warn!(target: targets::LOCALE, key, error = %e, "failed to load language preference");
        })?;

        Ok(raw.and_then(|raw| match LocaleTag::new(&raw) {
            Ok(tag) => Some(tag),
            Err(e) => {
                tracing::warn!(target: targets::LOCALE, key, error = %e, "ignoring stored language preference");
                None
            }
        }))
    }

    async fn migrate_legacy(&self) -> StoreResult<Option<LocaleTag>> {
        let Some(tag) = self.read_tag(LEGACY_LANGUAGE_KEY).await? else {
            return Ok(None);
        };
        tracing::info!(target: targets::LOCALE, locale = %tag, "migrating legacy language preference");

        if self.save(&tag).await {
            if let Err(e) = self.store.remove(LEGACY_LANGUAGE_KEY).await {
                tracing::warn!(target: targets::LOCALE, error = %e, "failed to remove legacy language key");
            }
        }
        Ok(Some(tag))
    }
}
