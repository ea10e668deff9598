//! Debounced chrome re-evaluation.
//!
//! Platforms report transient zero insets while a window settles, so each
//! geometry change is evaluated after a short delay. Every change schedules
//! its own evaluation; none is cancelled. A generation counter decides which
//! result is published: only the evaluation scheduled last may update
//! [`NavigationChromeMonitor::current`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use evenshare_core::logging::{span_names, targets};
use evenshare_core::{Property, Signal};
use tokio::task::JoinHandle;
use tracing::Instrument;

use super::detector::{ChromeConfig, ChromeLayout, ChromeSignals, NavigationChromeDetector};

struct MonitorInner {
    detector: NavigationChromeDetector,
    debounce: Duration,
    generation: AtomicU64,
    current: Property<ChromeLayout>,
    layout_changed: Signal<ChromeLayout>,
}

/// Tracks the navigation chrome layout as geometry changes.
///
/// Cloning yields another handle to the same monitor.
#[derive(Clone)]
pub struct NavigationChromeMonitor {
    inner: Arc<MonitorInner>,
}

impl NavigationChromeMonitor {
    /// Create a monitor. Until the first evaluation is published the layout
    /// is the one for absent signals.
    pub fn new(config: ChromeConfig) -> Self {
        let detector = NavigationChromeDetector::new(config);
        let initial = detector.layout(&ChromeSignals::default());
        Self {
            inner: Arc::new(MonitorInner {
                detector,
                debounce: Duration::from_millis(config.debounce_ms),
                generation: AtomicU64::new(0),
                current: Property::new(initial),
                layout_changed: Signal::new(),
            }),
        }
    }

    /// Report new platform signals.
    ///
    /// Schedules an evaluation on the current tokio runtime after the
    /// debounce delay. The returned handle resolves once that evaluation has
    /// run, whether or not its result was published.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn geometry_changed(&self, signals: ChromeSignals) -> JoinHandle<()> {
        let generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let inner = self.inner.clone();
        let span = tracing::debug_span!(target: targets::CHROME, span_names::CHROME_EVALUATION, generation);

        tokio::spawn(
            async move {
                tokio::time::sleep(inner.debounce).await;
                let layout = inner.detector.layout(&signals);

                if inner.generation.load(Ordering::Acquire) != generation {
                    tracing::debug!(target: targets::CHROME, "evaluation superseded");
                    return;
                }
                if inner.current.set(layout) {
                    inner.layout_changed.emit(layout);
                }
            }
            .instrument(span),
        )
    }

    /// The last published layout.
    pub fn current(&self) -> ChromeLayout {
        self.inner.current.get()
    }

    /// The detector used for evaluations.
    pub fn detector(&self) -> &NavigationChromeDetector {
        &self.inner.detector
    }

    /// Emitted when a published layout differs from the previous one.
    pub fn layout_changed(&self) -> &Signal<ChromeLayout> {
        &self.inner.layout_changed
    }
}

impl Default for NavigationChromeMonitor {
    fn default() -> Self {
        Self::new(ChromeConfig::default())
    }
}

impl std::fmt::Debug for NavigationChromeMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationChromeMonitor")
            .field("debounce", &self.inner.debounce)
            .field("generation", &self.inner.generation.load(Ordering::Relaxed))
            .field("current", &self.current())
            .finish()
    }
}

static_assertions::assert_impl_all!(NavigationChromeMonitor: Send, Sync);
