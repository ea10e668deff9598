//! Gesture versus button navigation classification.

use serde::{Deserialize, Serialize};

use evenshare_core::logging::targets;

/// Host platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Home-indicator capable devices. A bottom inset means gesture navigation.
    Ios,
    /// Devices whose system chrome varies by vendor and setting.
    Android,
    /// Anything else.
    Other,
}

/// Safe-area insets reported by the platform, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl SafeAreaInsets {
    /// Insets with only a bottom value.
    pub fn bottom(bottom: f32) -> Self {
        Self {
            bottom,
            ..Self::default()
        }
    }

    fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    /// Create a screen size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `height / width`.
    pub fn aspect_ratio(&self) -> f32 {
        self.height / self.width
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// How the system navigation is operated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationChromeClass {
    /// Swipe gestures over a thin home indicator.
    #[default]
    Gesture,
    /// On-screen back/home/recents buttons.
    Button,
}

/// Heuristic cut-offs for Android classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeThresholds {
    /// Bottom insets strictly above this are gesture bars.
    pub gesture_inset: f32,
    /// Aspect ratios (`height / width`) above this are modern tall screens.
    pub modern_aspect_ratio: f32,
    /// Screen heights above this count as high resolution.
    pub high_resolution_height: f32,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self {
            gesture_inset: 20.0,
            modern_aspect_ratio: 2.0,
            high_resolution_height: 800.0,
        }
    }
}

/// Chrome detection settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub thresholds: ChromeThresholds,
    /// Settle delay before a geometry change is evaluated.
    pub debounce_ms: u64,
    /// Padding added above the gesture bar's own inset.
    pub gesture_extra_padding: f32,
    /// Padding reserved above on-screen buttons.
    pub button_bottom_padding: f32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            thresholds: ChromeThresholds::default(),
            debounce_ms: 250,
            gesture_extra_padding: 8.0,
            button_bottom_padding: 0.0,
        }
    }
}

/// Possibly incomplete platform signals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChromeSignals {
    pub platform: Option<Platform>,
    pub insets: Option<SafeAreaInsets>,
    pub screen: Option<ScreenSize>,
}

impl ChromeSignals {
    /// Signals with every input present.
    pub fn new(platform: Platform, insets: SafeAreaInsets, screen: ScreenSize) -> Self {
        Self {
            platform: Some(platform),
            insets: Some(insets),
            screen: Some(screen),
        }
    }
}

/// What navigation controls should reserve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeLayout {
    pub class: NavigationChromeClass,
    /// Bottom padding for primary navigation controls.
    pub bottom_padding: f32,
    /// Whether a secondary tab bar is placed at the top.
    pub show_top_tab_bar: bool,
}

/// Classifies the system navigation chrome. Never fails; anything it cannot
/// judge is treated as gesture navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationChromeDetector {
    config: ChromeConfig,
}

impl NavigationChromeDetector {
    pub fn new(config: ChromeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// Classify complete signals.
    pub fn detect(
        &self,
        platform: Platform,
        insets: &SafeAreaInsets,
        screen: &ScreenSize,
    ) -> NavigationChromeClass {
        use NavigationChromeClass::{Button, Gesture};

        if !insets.is_valid() {
            return Gesture;
        }

        match platform {
            Platform::Ios => {
                if insets.bottom > 0.0 {
                    Gesture
                } else {
                    Button
                }
            }
            Platform::Android => {
                if !screen.is_valid() {
                    return Gesture;
                }
                let t = &self.config.thresholds;
                let aspect = screen.aspect_ratio();
                if insets.bottom > t.gesture_inset {
                    Gesture
                } else if insets.bottom == 0.0 && aspect <= t.modern_aspect_ratio {
                    Button
                } else if aspect > t.modern_aspect_ratio || screen.height > t.high_resolution_height {
                    Gesture
                } else {
                    Button
                }
            }
            Platform::Other => Gesture,
        }
    }

    /// Classify signals that may be missing. Any absent input yields
    /// [`NavigationChromeClass::Gesture`].
    pub fn detect_signals(&self, signals: &ChromeSignals) -> NavigationChromeClass {
        match (signals.platform, signals.insets, signals.screen) {
            (Some(platform), Some(insets), Some(screen)) => self.detect(platform, &insets, &screen),
            _ => NavigationChromeClass::Gesture,
        }
    }

    /// Classify and derive the padding and tab-bar placement.
    pub fn layout(&self, signals: &ChromeSignals) -> ChromeLayout {
        let class = self.detect_signals(signals);
        let layout = match class {
            NavigationChromeClass::Gesture => {
                let inset = signals
                    .insets
                    .filter(SafeAreaInsets::is_valid)
                    .map_or(0.0, |i| i.bottom);
                ChromeLayout {
                    class,
                    bottom_padding: inset + self.config.gesture_extra_padding,
                    show_top_tab_bar: false,
                }
            }
            NavigationChromeClass::Button => ChromeLayout {
                class,
                bottom_padding: self.config.button_bottom_padding,
                show_top_tab_bar: signals.platform == Some(Platform::Android),
            },
        };
        tracing::debug!(target: targets::CHROME, ?signals, ?layout, "navigation chrome evaluated");
        layout
    }
}
