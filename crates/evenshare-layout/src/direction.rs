//! Locale tags and layout direction.
//!
//! A [`LocaleTag`] names the language the interface is shown in. Its
//! [`LayoutDirection`] decides whether the whole interface is mirrored.
//!
//! # Example
//!
//! ```
//! use evenshare_layout::{LayoutDirection, LocaleTag, resolve_direction};
//!
//! let arabic = LocaleTag::new("ar-SA").unwrap();
//! assert_eq!(resolve_direction(&arabic), LayoutDirection::Rtl);
//!
//! let french = LocaleTag::new("fr_FR.UTF-8").unwrap();
//! assert_eq!(french.as_str(), "fr-FR");
//! assert_eq!(resolve_direction(&french), LayoutDirection::Ltr);
//! ```

use std::fmt;
use std::str::FromStr;

use evenshare_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The locale used when nothing else is known.
pub const DEFAULT_LOCALE: &str = "en";

/// Primary language subtags that lay out right-to-left.
pub const RTL_LANGUAGES: [&str; 4] = ["ar", "he", "fa", "ur"];

const MAX_SUBTAG_LEN: usize = 8;

/// Layout direction derived from the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left-to-right (e.g., English, French, German)
    #[default]
    Ltr,
    /// Right-to-left (e.g., Arabic, Hebrew)
    Rtl,
}

impl LayoutDirection {
    /// Returns true if this is left-to-right direction.
    pub fn is_ltr(&self) -> bool {
        matches!(self, LayoutDirection::Ltr)
    }

    /// Returns true if this is right-to-left direction.
    pub fn is_rtl(&self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }

    /// The opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            LayoutDirection::Ltr => LayoutDirection::Rtl,
            LayoutDirection::Rtl => LayoutDirection::Ltr,
        }
    }
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutDirection::Ltr => f.write_str("ltr"),
            LayoutDirection::Rtl => f.write_str("rtl"),
        }
    }
}

/// A validated, normalized language tag such as `en`, `ar-SA` or `zh-Hant-TW`.
///
/// Construction strips encoding and modifier suffixes (`.UTF-8`, `@latin`),
/// maps `_` to `-` and trims whitespace. Equality compares the normalized tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Parse and normalize a locale tag.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();
        let stripped = raw
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if stripped.is_empty() {
            return Err(Error::invalid_locale_tag(raw, "tag is empty"));
        }

        let normalized = stripped.replace('_', "-");
        for subtag in normalized.split('-') {
            if subtag.is_empty() {
                return Err(Error::invalid_locale_tag(raw, "empty subtag"));
            }
            if subtag.len() > MAX_SUBTAG_LEN {
                return Err(Error::invalid_locale_tag(raw, "subtag longer than 8 characters"));
            }
            if !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::invalid_locale_tag(raw, "subtags must be ASCII alphanumeric"));
            }
        }

        Ok(Self(normalized))
    }

    /// The built-in fallback locale.
    pub fn default_locale() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }

    /// The normalized tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, lowercased (e.g. `"ar"` for `"AR-sa"`).
    pub fn language(&self) -> String {
        self.0
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// The layout direction of this locale.
    pub fn direction(&self) -> LayoutDirection {
        resolve_direction(self)
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.0
    }
}

/// Decide the layout direction for a locale.
///
/// Right-to-left iff the primary language is one of [`RTL_LANGUAGES`];
/// everything else, including unrecognized tags, is left-to-right.
pub fn resolve_direction(locale: &LocaleTag) -> LayoutDirection {
    let language = locale.language();
    let direction = if RTL_LANGUAGES.contains(&language.as_str()) {
        LayoutDirection::Rtl
    } else {
        LayoutDirection::Ltr
    };
    tracing::trace!(target: targets::DIRECTION, locale = %locale, %direction, "resolved direction");
    direction
}

static_assertions::assert_impl_all!(LocaleTag: Send, Sync);
