//! Error types for the layout crate.

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing layout inputs.
///
/// Resolution itself never fails: unknown locales resolve to left-to-right
/// and unknown icons pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The string is not a usable locale tag.
    #[error("Invalid locale tag '{tag}': {message}")]
    InvalidLocaleTag { tag: String, message: String },
}

impl Error {
    /// Create a locale tag error.
    pub fn invalid_locale_tag(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLocaleTag {
            tag: tag.into(),
            message: message.into(),
        }
    }
}
