//! Logging facilities for Evenshare.
//!
//! Evenshare uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("evenshare::locale=debug,evenshare::chrome=debug")
//!     .init();
//! ```

/// Span names used throughout Evenshare for tracing.
pub mod span_names {
    /// A debounced navigation chrome evaluation.
    pub const CHROME_EVALUATION: &str = "evenshare::chrome_evaluation";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Locale preference and switch coordination.
    pub const LOCALE: &str = "evenshare::locale";
    /// Durable key-value storage.
    pub const STORE: &str = "evenshare::store";
    /// Layout direction resolution.
    pub const DIRECTION: &str = "evenshare::direction";
    /// Navigation chrome detection.
    pub const CHROME: &str = "evenshare::chrome";
    /// Configuration loading.
    pub const CONFIG: &str = "evenshare::config";
    /// Signal/slot system.
    pub const SIGNAL: &str = "evenshare_core::signal";
}
