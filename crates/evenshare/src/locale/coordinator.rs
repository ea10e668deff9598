//! Locale switching and direction-flip coordination.
//!
//! The coordinator owns the active locale and the layout direction derived
//! from it. A change request is persisted first, then the direction is
//! recomputed once. When the direction flips, the interface must be mirrored
//! and re-rendered from scratch; the coordinator does not do that itself. It
//! moves to [`SwitchState::PendingRestart`] and emits
//! [`restart_required`](DirectionSwitchCoordinator::restart_required) for the
//! host shell, which reports back through
//! [`restart_completed`](DirectionSwitchCoordinator::restart_completed).
//!
//! # Example
//!
//! ```ignore
//! use evenshare::locale::{DirectionSwitchCoordinator, LocalePreferences};
//! use evenshare::store::JsonFileStore;
//!
//! let prefs = LocalePreferences::new(JsonFileStore::in_data_dir()?);
//! let coordinator = DirectionSwitchCoordinator::new(prefs, LocaleTag::new("en")?);
//!
//! coordinator.restart_required().connect(|request| {
//!     println!("mirror to {} and reload", request.to);
//! });
//!
//! let outcome = coordinator.request_locale_change(LocaleTag::new("ar")?).await;
//! assert_eq!(outcome.transition, SwitchTransition::RestartRequired);
//! ```

use std::sync::Arc;

use evenshare_core::logging::targets;
use evenshare_core::{ConnectionId, Property, Signal};
use evenshare_layout::{resolve_direction, LayoutContext, LayoutDirection, LocaleTag};
use tokio::sync::Mutex;

use super::bootstrap::{resolve_startup_locale, StartupLocale, SystemLocale};
use super::preferences::LocalePreferences;
use crate::config::LocaleConfig;
use crate::store::KeyValueStore;

/// Coordinator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    /// The applied mirroring matches the active direction.
    #[default]
    Stable,
    /// The direction flipped; waiting for the host shell to apply it.
    PendingRestart,
}

/// What a change request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchTransition {
    /// The requested locale was already active.
    Unchanged,
    /// A different locale with the same direction.
    SameDirection,
    /// The direction flipped; `restart_required` was emitted.
    RestartRequired,
    /// The direction changed while the host was still restarting. The new
    /// direction is requested when that restart completes.
    AlreadyPending,
}

/// Result of [`DirectionSwitchCoordinator::request_locale_change`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    /// The locale now active.
    pub locale: LocaleTag,
    /// The direction now active.
    pub direction: LayoutDirection,
    /// Whether the preference write succeeded.
    pub persisted: bool,
    /// The state machine transition taken.
    pub transition: SwitchTransition,
}

/// Payload of the restart signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartRequest {
    /// Direction the interface is currently mirrored for.
    pub from: LayoutDirection,
    /// Direction the interface must be mirrored for after restart.
    pub to: LayoutDirection,
    /// The locale that caused the flip.
    pub locale: LocaleTag,
}

/// The host application shell that owns global mirroring and the render tree.
pub trait HostShell: Send + Sync {
    /// Switch the platform's global layout mirroring.
    fn apply_direction(&self, direction: LayoutDirection);

    /// Tear down and rebuild the render tree.
    fn reload(&self);
}

/// State shared with connected host shells.
struct SwitchShared {
    locale: Property<LocaleTag>,
    direction: Property<LayoutDirection>,
    /// Direction the host has mirrored the interface for.
    applied: Property<LayoutDirection>,
    state: Property<SwitchState>,
    locale_changed: Signal<LocaleTag>,
    direction_changed: Signal<LayoutDirection>,
    restart_required: Signal<RestartRequest>,
}

impl SwitchShared {
    fn restart_completed(&self, applied: LayoutDirection) {
        self.applied.set(applied);
        let active = self.direction.get();
        if active == applied {
            if self.state.set(SwitchState::Stable) {
                tracing::debug!(target: targets::LOCALE, direction = %applied, "restart completed");
            }
            return;
        }

        // The direction moved again while the host was restarting.
        self.state.set(SwitchState::PendingRestart);
        tracing::info!(
            target: targets::LOCALE,
            from = %applied,
            to = %active,
            "layout direction changed during restart, restart required"
        );
        self.restart_required.emit(RestartRequest {
            from: applied,
            to: active,
            locale: self.locale.get(),
        });
    }
}

/// Serializes locale changes and decides when a mirroring restart is needed.
pub struct DirectionSwitchCoordinator<S> {
    preferences: LocalePreferences<S>,
    /// Single-flight queue; tokio's mutex hands out the lock in FIFO order.
    queue: Mutex<()>,
    shared: Arc<SwitchShared>,
}

impl<S: KeyValueStore> DirectionSwitchCoordinator<S> {
    /// Create a coordinator with `initial` already active and applied.
    pub fn new(preferences: LocalePreferences<S>, initial: LocaleTag) -> Self {
        let direction = resolve_direction(&initial);
        Self {
            preferences,
            queue: Mutex::new(()),
            shared: Arc::new(SwitchShared {
                locale: Property::new(initial),
                direction: Property::new(direction),
                applied: Property::new(direction),
                state: Property::new(SwitchState::Stable),
                locale_changed: Signal::new(),
                direction_changed: Signal::new(),
                restart_required: Signal::new(),
            }),
        }
    }

    /// Resolve the startup locale and create a coordinator for it.
    pub async fn bootstrap(
        preferences: LocalePreferences<S>,
        system: &impl SystemLocale,
        config: &LocaleConfig,
    ) -> (Self, StartupLocale) {
        let startup = resolve_startup_locale(&preferences, system, config).await;
        let coordinator = Self::new(preferences, startup.tag.clone());
        (coordinator, startup)
    }

    /// Change the active locale.
    ///
    /// Requests are handled one at a time in arrival order. Each request
    /// persists the tag before the direction is recomputed, so a restart in
    /// the middle of a switch resumes with the requested locale. A failed
    /// write is logged and the switch still proceeds.
    #[tracing::instrument(skip_all, fields(locale = %tag), name = "evenshare::locale_change")]
    pub async fn request_locale_change(&self, tag: LocaleTag) -> SwitchOutcome {
        let _turn = self.queue.lock().await;
        let shared = &self.shared;

        let persisted = self.preferences.save(&tag).await;

        let direction = resolve_direction(&tag);
        let applied = shared.applied.get();
        let locale_changed = shared.locale.set(tag.clone());
        let direction_changed = shared.direction.set(direction);

        let transition = if !locale_changed {
            SwitchTransition::Unchanged
        } else if shared.state.get() == SwitchState::PendingRestart {
            if direction_changed {
                SwitchTransition::AlreadyPending
            } else {
                SwitchTransition::SameDirection
            }
        } else if direction != applied {
            shared.state.set(SwitchState::PendingRestart);
            SwitchTransition::RestartRequired
        } else {
            SwitchTransition::SameDirection
        };

        if locale_changed {
            shared.locale_changed.emit(tag.clone());
        }
        if direction_changed {
            shared.direction_changed.emit(direction);
        }
        match transition {
            SwitchTransition::RestartRequired => {
                tracing::info!(
                    target: targets::LOCALE,
                    from = %applied,
                    to = %direction,
                    "layout direction flipped, restart required"
                );
                shared.restart_required.emit(RestartRequest {
                    from: applied,
                    to: direction,
                    locale: tag.clone(),
                });
            }
            SwitchTransition::AlreadyPending => {
                tracing::info!(
                    target: targets::LOCALE,
                    to = %direction,
                    "layout direction changed while a restart is pending"
                );
            }
            SwitchTransition::Unchanged | SwitchTransition::SameDirection => {
                tracing::debug!(target: targets::LOCALE, ?transition, "locale switched without mirroring");
            }
        }

        SwitchOutcome {
            locale: tag,
            direction,
            persisted,
            transition,
        }
    }

    /// Report that the host has mirrored the interface for `applied` and
    /// rebuilt it.
    ///
    /// Returns the coordinator to [`SwitchState::Stable`] when `applied`
    /// matches the active direction. If the direction changed again while
    /// the host was restarting, `restart_required` is emitted for the new
    /// direction and the state stays pending.
    pub fn restart_completed(&self, applied: LayoutDirection) {
        self.shared.restart_completed(applied);
    }

    /// Forget the saved preference. The active locale is left as is; the
    /// default applies from the next start.
    pub async fn clear_preference(&self) -> bool {
        let _turn = self.queue.lock().await;
        self.preferences.clear().await
    }

    /// Subscribe a host shell to restart requests.
    ///
    /// On every flip the shell applies the new mirroring, reloads, and the
    /// restart is then marked complete.
    pub fn connect_host_shell(&self, shell: Arc<dyn HostShell>) -> ConnectionId {
        let shared = Arc::downgrade(&self.shared);
        self.shared.restart_required.connect(move |request| {
            shell.apply_direction(request.to);
            shell.reload();
            if let Some(shared) = shared.upgrade() {
                shared.restart_completed(request.to);
            }
        })
    }

    /// The active locale.
    pub fn active_locale(&self) -> LocaleTag {
        self.shared.locale.get()
    }

    /// The active layout direction.
    pub fn direction(&self) -> LayoutDirection {
        self.shared.direction.get()
    }

    /// The direction the host last applied.
    pub fn applied_direction(&self) -> LayoutDirection {
        self.shared.applied.get()
    }

    /// The current state.
    pub fn state(&self) -> SwitchState {
        self.shared.state.get()
    }

    /// A layout context for the active direction.
    pub fn layout_context(&self) -> LayoutContext {
        LayoutContext::new(self.direction())
    }

    /// The preference store.
    pub fn preferences(&self) -> &LocalePreferences<S> {
        &self.preferences
    }

    /// Emitted after the active locale changes.
    pub fn locale_changed(&self) -> &Signal<LocaleTag> {
        &self.shared.locale_changed
    }

    /// Emitted after the active direction changes.
    pub fn direction_changed(&self) -> &Signal<LayoutDirection> {
        &self.shared.direction_changed
    }

    /// Emitted when the interface must be mirrored for a new direction.
    /// Not emitted again until the pending restart completes.
    pub fn restart_required(&self) -> &Signal<RestartRequest> {
        &self.shared.restart_required
    }
}

static_assertions::assert_impl_all!(
    DirectionSwitchCoordinator<crate::store::MemoryStore>: Send, Sync
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::bootstrap::{FixedLocale, LocaleSource};
    use crate::locale::preferences::SELECTED_LANGUAGE_KEY;
    use crate::store::{MemoryStore, StoreWrite};
    use parking_lot::Mutex as SyncMutex;
    use std::time::Duration;

    fn tag(s: &str) -> LocaleTag {
        LocaleTag::new(s).unwrap()
    }

    fn coordinator(initial: &str) -> Arc<DirectionSwitchCoordinator<MemoryStore>> {
        Arc::new(DirectionSwitchCoordinator::new(
            LocalePreferences::new(MemoryStore::new()),
            tag(initial),
        ))
    }

    fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<SyncMutex<Vec<T>>> {
        let seen = Arc::new(SyncMutex::new(Vec::new()));
        let seen_clone = seen.clone();
        signal.connect(move |v: &T| seen_clone.lock().push(v.clone()));
        seen
    }

    #[tokio::test]
    async fn test_en_to_ar_requires_one_restart() {
        let c = coordinator("en");
        let restarts = record(c.restart_required());

        let outcome = c.request_locale_change(tag("ar")).await;

        assert_eq!(outcome.transition, SwitchTransition::RestartRequired);
        assert_eq!(outcome.direction, LayoutDirection::Rtl);
        assert!(outcome.persisted);
        assert_eq!(c.state(), SwitchState::PendingRestart);
        assert_eq!(c.preferences().store().peek(SELECTED_LANGUAGE_KEY), Some("ar".to_string()));
        assert_eq!(
            *restarts.lock(),
            vec![RestartRequest {
                from: LayoutDirection::Ltr,
                to: LayoutDirection::Rtl,
                locale: tag("ar"),
            }]
        );
    }

    #[tokio::test]
    async fn test_en_to_fr_is_a_self_loop() {
        let c = coordinator("en");
        let restarts = record(c.restart_required());
        let locales = record(c.locale_changed());

        let outcome = c.request_locale_change(tag("fr")).await;

        assert_eq!(outcome.transition, SwitchTransition::SameDirection);
        assert_eq!(c.state(), SwitchState::Stable);
        assert_eq!(c.active_locale(), tag("fr"));
        assert_eq!(c.preferences().store().peek(SELECTED_LANGUAGE_KEY), Some("fr".to_string()));
        assert!(restarts.lock().is_empty());
        assert_eq!(*locales.lock(), vec![tag("fr")]);
    }

    #[tokio::test]
    async fn test_same_direction_twice_never_restarts() {
        let c = coordinator("ar");
        let restarts = record(c.restart_required());

        assert_eq!(c.request_locale_change(tag("he")).await.transition, SwitchTransition::SameDirection);
        assert_eq!(c.request_locale_change(tag("he")).await.transition, SwitchTransition::Unchanged);
        assert_eq!(c.request_locale_change(tag("fa")).await.transition, SwitchTransition::SameDirection);

        assert!(restarts.lock().is_empty());
        assert_eq!(c.state(), SwitchState::Stable);
    }

    #[tokio::test]
    async fn test_changes_while_pending_do_not_reemit() {
        let c = coordinator("en");
        let restarts = record(c.restart_required());
        let directions = record(c.direction_changed());

        c.request_locale_change(tag("ar")).await;
        let back = c.request_locale_change(tag("en")).await;
        let again = c.request_locale_change(tag("ur")).await;
        let same = c.request_locale_change(tag("he")).await;

        assert_eq!(back.transition, SwitchTransition::AlreadyPending);
        assert_eq!(again.transition, SwitchTransition::AlreadyPending);
        assert_eq!(same.transition, SwitchTransition::SameDirection);
        assert_eq!(restarts.lock().len(), 1);
        assert_eq!(
            *directions.lock(),
            vec![LayoutDirection::Rtl, LayoutDirection::Ltr, LayoutDirection::Rtl]
        );
        assert_eq!(c.state(), SwitchState::PendingRestart);
        assert_eq!(c.preferences().store().peek(SELECTED_LANGUAGE_KEY), Some("he".to_string()));
    }

    #[tokio::test]
    async fn test_restart_completed_returns_to_stable() {
        let c = coordinator("en");
        let restarts = record(c.restart_required());

        c.request_locale_change(tag("ar")).await;
        c.restart_completed(LayoutDirection::Rtl);

        assert_eq!(c.state(), SwitchState::Stable);
        assert_eq!(c.applied_direction(), LayoutDirection::Rtl);

        let back = c.request_locale_change(tag("en")).await;
        assert_eq!(back.transition, SwitchTransition::RestartRequired);
        assert_eq!(restarts.lock().len(), 2);
        assert_eq!(restarts.lock()[1].from, LayoutDirection::Rtl);
        assert_eq!(restarts.lock()[1].to, LayoutDirection::Ltr);
    }

    #[tokio::test]
    async fn test_restart_completed_with_stale_direction_requests_again() {
        let c = coordinator("en");
        let restarts = record(c.restart_required());

        c.request_locale_change(tag("ar")).await;
        c.request_locale_change(tag("fr")).await;
        c.restart_completed(LayoutDirection::Rtl);

        assert_eq!(c.state(), SwitchState::PendingRestart);
        assert_eq!(
            restarts.lock().last().cloned(),
            Some(RestartRequest {
                from: LayoutDirection::Rtl,
                to: LayoutDirection::Ltr,
                locale: tag("fr"),
            })
        );

        c.restart_completed(LayoutDirection::Ltr);
        assert_eq!(c.state(), SwitchState::Stable);
        assert_eq!(restarts.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_persist_failure_still_switches() {
        let c = coordinator("en");
        c.preferences().store().set_fail_writes(true);

        let outcome = c.request_locale_change(tag("he")).await;

        assert!(!outcome.persisted);
        assert_eq!(outcome.transition, SwitchTransition::RestartRequired);
        assert_eq!(c.direction(), LayoutDirection::Rtl);
        assert_eq!(c.layout_context().direction(), LayoutDirection::Rtl);
    }

    #[tokio::test]
    async fn test_write_lands_before_direction_is_recomputed() {
        let c = coordinator("en");
        let c_clone = c.clone();
        let observed = Arc::new(SyncMutex::new(None));
        let observed_clone = observed.clone();
        c.direction_changed().connect(move |_| {
            *observed_clone.lock() = c_clone.preferences().store().peek(SELECTED_LANGUAGE_KEY);
        });

        c.request_locale_change(tag("ar")).await;
        assert_eq!(*observed.lock(), Some("ar".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_requests_are_serialized() {
        let c = coordinator("en");
        c.preferences().store().set_write_delay(Some(Duration::from_millis(50)));

        let first = {
            let c = c.clone();
            tokio::spawn(async move { c.request_locale_change(tag("ar")).await })
        };
        tokio::task::yield_now().await;
        let second = {
            let c = c.clone();
            tokio::spawn(async move { c.request_locale_change(tag("fr")).await })
        };

        let first = first.await.unwrap();
        let second = second.await.unwrap();

        assert_eq!(first.transition, SwitchTransition::RestartRequired);
        assert_eq!(second.transition, SwitchTransition::AlreadyPending);
        assert_eq!(c.active_locale(), tag("fr"));
        assert_eq!(
            c.preferences().store().writes(),
            vec![
                StoreWrite::Set(SELECTED_LANGUAGE_KEY.into(), "ar".into()),
                StoreWrite::Set(SELECTED_LANGUAGE_KEY.into(), "fr".into()),
            ]
        );
    }

    #[derive(Default)]
    struct RecordingShell {
        calls: SyncMutex<Vec<String>>,
    }

    impl HostShell for RecordingShell {
        fn apply_direction(&self, direction: LayoutDirection) {
            self.calls.lock().push(format!("apply:{direction}"));
        }

        fn reload(&self) {
            self.calls.lock().push("reload".to_string());
        }
    }

    #[tokio::test]
    async fn test_host_shell_applies_then_reloads() {
        let c = coordinator("en");
        let shell = Arc::new(RecordingShell::default());
        c.connect_host_shell(shell.clone());

        c.request_locale_change(tag("de")).await;
        assert!(shell.calls.lock().is_empty());

        let outcome = c.request_locale_change(tag("ar")).await;
        assert_eq!(outcome.transition, SwitchTransition::RestartRequired);
        assert_eq!(*shell.calls.lock(), vec!["apply:rtl".to_string(), "reload".to_string()]);
        assert_eq!(c.state(), SwitchState::Stable);
    }

    #[tokio::test]
    async fn test_host_shell_follows_flip_back() {
        let c = coordinator("en");
        let shell = Arc::new(RecordingShell::default());
        c.connect_host_shell(shell.clone());

        c.request_locale_change(tag("ar")).await;
        let back = c.request_locale_change(tag("en")).await;

        assert_eq!(back.transition, SwitchTransition::RestartRequired);
        assert_eq!(
            *shell.calls.lock(),
            vec![
                "apply:rtl".to_string(),
                "reload".to_string(),
                "apply:ltr".to_string(),
                "reload".to_string(),
            ]
        );
        assert_eq!(c.direction(), LayoutDirection::Ltr);
        assert_eq!(c.applied_direction(), LayoutDirection::Ltr);
        assert_eq!(c.layout_context().direction(), LayoutDirection::Ltr);
        assert_eq!(c.state(), SwitchState::Stable);
    }

    #[tokio::test]
    async fn test_bootstrap_uses_persisted_locale() {
        let prefs = LocalePreferences::new(MemoryStore::with_entries([(SELECTED_LANGUAGE_KEY, "fa")]));
        let (c, startup) =
            DirectionSwitchCoordinator::bootstrap(prefs, &FixedLocale(None), &LocaleConfig::default()).await;

        assert_eq!(startup.source, LocaleSource::Persisted);
        assert_eq!(c.active_locale(), tag("fa"));
        assert_eq!(c.direction(), LayoutDirection::Rtl);
        assert_eq!(c.state(), SwitchState::Stable);
    }

    #[tokio::test]
    async fn test_clear_preference_keeps_active_locale() {
        let c = coordinator("en");
        c.request_locale_change(tag("fr")).await;
        assert!(c.clear_preference().await);
        assert_eq!(c.preferences().load().await, None);
        assert_eq!(c.active_locale(), tag("fr"));
    }
}
