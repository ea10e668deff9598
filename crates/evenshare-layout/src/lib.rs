//! Bidirectional layout for Evenshare.
//!
//! This crate decides whether the interface is mirrored and turns logical
//! layout requests into physical style attributes:
//!
//! - **Direction**: [`LocaleTag`] and [`resolve_direction`], a pure function
//!   from the active locale to [`LayoutDirection`]
//! - **Primitives**: [`LayoutPrimitive`] (start/end based requests) and
//!   [`resolve_primitive`], producing a [`PhysicalResolution`]
//! - **Icons**: the closed table of [`DirectionalIcon`] pairs
//! - **Context**: [`LayoutContext`], the value screens receive instead of
//!   reading a global "is RTL" flag
//!
//! # Example
//!
//! ```
//! use evenshare_layout::prelude::*;
//!
//! let locale = LocaleTag::new("he-IL").unwrap();
//! let ctx = LayoutContext::new(resolve_direction(&locale));
//!
//! let align = ctx.resolve(&LayoutPrimitive::TextAlign(LogicalSide::Start));
//! assert_eq!(align.to_string(), "textAlign: right");
//!
//! let back = ctx.resolve(&LayoutPrimitive::Icon(IconRef::parse("chevron-back")));
//! assert_eq!(back.value(), "chevron-forward");
//! ```

pub mod direction;
pub mod icon;
pub mod primitive;
pub mod types;

mod error;

pub use direction::{resolve_direction, LayoutDirection, LocaleTag, DEFAULT_LOCALE, RTL_LANGUAGES};
pub use error::{Error, Result};
pub use icon::{DirectionalIcon, IconRef};
pub use primitive::{
    resolve_primitive, FlexFlow, LayoutContext, LayoutPrimitive, LogicalCorner, LogicalSide,
    PhysicalCorner, PhysicalResolution, PhysicalSide,
};
pub use types::LengthValue;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::direction::{resolve_direction, LayoutDirection, LocaleTag};
    pub use crate::icon::{DirectionalIcon, IconRef};
    pub use crate::primitive::{
        resolve_primitive, FlexFlow, LayoutContext, LayoutPrimitive, LogicalCorner, LogicalSide,
        PhysicalResolution,
    };
    pub use crate::types::LengthValue;
}
