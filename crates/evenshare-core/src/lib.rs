//! Core primitives for Evenshare.
//!
//! This crate provides the small reactive toolkit the layout layer is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification between the
//!   locale coordinator, the navigation chrome monitor and the host shell
//! - **Property System**: Change-detecting cells for derived state such as
//!   the active layout direction
//! - **Logging**: Target names for filtering `tracing` output per subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use evenshare_core::Signal;
//!
//! let locale_changed = Signal::<String>::new();
//!
//! let conn_id = locale_changed.connect(|tag| {
//!     println!("Locale changed to: {}", tag);
//! });
//!
//! locale_changed.emit("ar".to_string());
//! locale_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use evenshare_core::{Property, Signal};
//!
//! struct Direction {
//!     rtl: Property<bool>,
//!     rtl_changed: Signal<bool>,
//! }
//!
//! impl Direction {
//!     fn set_rtl(&self, rtl: bool) {
//!         if self.rtl.set(rtl) {
//!             self.rtl_changed.emit(rtl);
//!         }
//!     }
//! }
//!
//! let direction = Direction { rtl: Property::new(false), rtl_changed: Signal::new() };
//! direction.set_rtl(true);
//! assert!(direction.rtl.get());
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
