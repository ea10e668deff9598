//! System navigation chrome detection.
//!
//! Decides whether the device uses gesture or button navigation, which sets
//! the bottom padding reserved for primary navigation and whether a
//! secondary tab bar is placed at the top. Independent of locale state.
//!
//! ```
//! use evenshare::chrome::*;
//!
//! let detector = NavigationChromeDetector::default();
//! let layout = detector.layout(&ChromeSignals::new(
//!     Platform::Ios,
//!     SafeAreaInsets::bottom(34.0),
//!     ScreenSize::new(390.0, 844.0),
//! ));
//! assert_eq!(layout.class, NavigationChromeClass::Gesture);
//! ```

mod detector;
mod monitor;

pub use detector::{
    ChromeConfig, ChromeLayout, ChromeSignals, ChromeThresholds, NavigationChromeClass,
    NavigationChromeDetector, Platform, SafeAreaInsets, ScreenSize,
};
pub use monitor::NavigationChromeMonitor;
