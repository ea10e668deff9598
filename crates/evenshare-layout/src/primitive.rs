//! Logical layout primitives and their physical resolution.
//!
//! Screens describe layout in logical terms (start/end) and never say
//! left/right themselves. [`resolve_primitive`] turns a logical request into
//! the physical style attribute for the active [`LayoutDirection`]: identity
//! under left-to-right, an exact mirror under right-to-left.
//!
//! # Example
//!
//! ```
//! use evenshare_layout::prelude::*;
//!
//! let margin = LayoutPrimitive::Margin(LogicalSide::Start, LengthValue::px(4.0));
//!
//! let ltr = resolve_primitive(&margin, LayoutDirection::Ltr);
//! assert_eq!(ltr.to_string(), "marginLeft: 4");
//!
//! let rtl = resolve_primitive(&margin, LayoutDirection::Rtl);
//! assert_eq!(rtl.to_string(), "marginRight: 4");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::LayoutDirection;
use crate::icon::IconRef;
use crate::types::LengthValue;

/// A direction-independent horizontal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalSide {
    /// The edge where reading begins.
    Start,
    /// The edge where reading ends.
    End,
}

impl LogicalSide {
    /// The opposite logical side.
    pub fn mirrored(&self) -> Self {
        match self {
            LogicalSide::Start => LogicalSide::End,
            LogicalSide::End => LogicalSide::Start,
        }
    }

    /// The physical side under `direction`.
    pub fn resolve(&self, direction: LayoutDirection) -> PhysicalSide {
        match (self, direction) {
            (LogicalSide::Start, LayoutDirection::Ltr) | (LogicalSide::End, LayoutDirection::Rtl) => {
                PhysicalSide::Left
            }
            (LogicalSide::End, LayoutDirection::Ltr) | (LogicalSide::Start, LayoutDirection::Rtl) => {
                PhysicalSide::Right
            }
        }
    }
}

/// A physical horizontal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalSide {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl PhysicalSide {
    fn as_str(&self) -> &'static str {
        match self {
            PhysicalSide::Left => "left",
            PhysicalSide::Right => "right",
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            PhysicalSide::Left => "Left",
            PhysicalSide::Right => "Right",
        }
    }
}

/// A direction-independent corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalCorner {
    /// Top corner on the start edge.
    TopStart,
    /// Top corner on the end edge.
    TopEnd,
    /// Bottom corner on the start edge.
    BottomStart,
    /// Bottom corner on the end edge.
    BottomEnd,
}

impl LogicalCorner {
    /// The corner on the same row and opposite logical side.
    pub fn mirrored(&self) -> Self {
        match self {
            LogicalCorner::TopStart => LogicalCorner::TopEnd,
            LogicalCorner::TopEnd => LogicalCorner::TopStart,
            LogicalCorner::BottomStart => LogicalCorner::BottomEnd,
            LogicalCorner::BottomEnd => LogicalCorner::BottomStart,
        }
    }

    /// The physical corner under `direction`.
    pub fn resolve(&self, direction: LayoutDirection) -> PhysicalCorner {
        let (top, side) = match self {
            LogicalCorner::TopStart => (true, LogicalSide::Start),
            LogicalCorner::TopEnd => (true, LogicalSide::End),
            LogicalCorner::BottomStart => (false, LogicalSide::Start),
            LogicalCorner::BottomEnd => (false, LogicalSide::End),
        };
        match (top, side.resolve(direction)) {
            (true, PhysicalSide::Left) => PhysicalCorner::TopLeft,
            (true, PhysicalSide::Right) => PhysicalCorner::TopRight,
            (false, PhysicalSide::Left) => PhysicalCorner::BottomLeft,
            (false, PhysicalSide::Right) => PhysicalCorner::BottomRight,
        }
    }
}

/// A physical corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalCorner {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl PhysicalCorner {
    fn property_name(&self) -> &'static str {
        match self {
            PhysicalCorner::TopLeft => "borderTopLeftRadius",
            PhysicalCorner::TopRight => "borderTopRightRadius",
            PhysicalCorner::BottomLeft => "borderBottomLeftRadius",
            PhysicalCorner::BottomRight => "borderBottomRightRadius",
        }
    }
}

/// Main-axis order of a horizontal flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlexFlow {
    /// Children laid out in reading order.
    Row,
    /// Children laid out against reading order.
    RowReverse,
}

impl FlexFlow {
    /// The opposite order.
    pub fn mirrored(&self) -> Self {
        match self {
            FlexFlow::Row => FlexFlow::RowReverse,
            FlexFlow::RowReverse => FlexFlow::Row,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            FlexFlow::Row => "row",
            FlexFlow::RowReverse => "row-reverse",
        }
    }
}

/// A logical layout request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutPrimitive {
    /// Horizontal flex order, expressed for a left-to-right reader.
    FlexDirection(FlexFlow),
    /// Text alignment toward a logical side.
    TextAlign(LogicalSide),
    /// Outer spacing on a logical side.
    Margin(LogicalSide, LengthValue),
    /// Inner spacing on a logical side.
    Padding(LogicalSide, LengthValue),
    /// Absolute offset from a logical side.
    Position(LogicalSide, LengthValue),
    /// Border width on a logical side.
    Border(LogicalSide, LengthValue),
    /// Radius of a logical corner.
    CornerRadius(LogicalCorner, LengthValue),
    /// An icon that may point along the reading direction.
    Icon(IconRef),
}

impl LayoutPrimitive {
    /// The same request with every logical side, corner, flow and
    /// directional glyph swapped.
    ///
    /// Resolving `p` under right-to-left equals resolving `p.mirrored()`
    /// under left-to-right.
    pub fn mirrored(&self) -> Self {
        match self {
            LayoutPrimitive::FlexDirection(flow) => LayoutPrimitive::FlexDirection(flow.mirrored()),
            LayoutPrimitive::TextAlign(side) => LayoutPrimitive::TextAlign(side.mirrored()),
            LayoutPrimitive::Margin(side, len) => LayoutPrimitive::Margin(side.mirrored(), *len),
            LayoutPrimitive::Padding(side, len) => LayoutPrimitive::Padding(side.mirrored(), *len),
            LayoutPrimitive::Position(side, len) => {
                LayoutPrimitive::Position(side.mirrored(), *len)
            }
            LayoutPrimitive::Border(side, len) => LayoutPrimitive::Border(side.mirrored(), *len),
            LayoutPrimitive::CornerRadius(corner, len) => {
                LayoutPrimitive::CornerRadius(corner.mirrored(), *len)
            }
            LayoutPrimitive::Icon(icon) => LayoutPrimitive::Icon(icon.mirrored()),
        }
    }
}

/// A concrete style attribute ready to apply to a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PhysicalResolution {
    /// `flexDirection`.
    FlexDirection(FlexFlow),
    /// `textAlign`.
    TextAlign(PhysicalSide),
    /// `marginLeft` / `marginRight`.
    Margin(PhysicalSide, LengthValue),
    /// `paddingLeft` / `paddingRight`.
    Padding(PhysicalSide, LengthValue),
    /// `left` / `right`.
    Position(PhysicalSide, LengthValue),
    /// `borderLeftWidth` / `borderRightWidth`.
    Border(PhysicalSide, LengthValue),
    /// `borderTopLeftRadius` and friends.
    CornerRadius(PhysicalCorner, LengthValue),
    /// Icon glyph name.
    Icon(IconRef),
}

impl PhysicalResolution {
    /// The style attribute this resolution sets.
    pub fn property_name(&self) -> String {
        match self {
            PhysicalResolution::FlexDirection(_) => "flexDirection".to_string(),
            PhysicalResolution::TextAlign(_) => "textAlign".to_string(),
            PhysicalResolution::Margin(side, _) => format!("margin{}", side.suffix()),
            PhysicalResolution::Padding(side, _) => format!("padding{}", side.suffix()),
            PhysicalResolution::Position(side, _) => side.as_str().to_string(),
            PhysicalResolution::Border(side, _) => format!("border{}Width", side.suffix()),
            PhysicalResolution::CornerRadius(corner, _) => corner.property_name().to_string(),
            PhysicalResolution::Icon(_) => "name".to_string(),
        }
    }

    /// The attribute value as the view layer expects it.
    pub fn value(&self) -> String {
        match self {
            PhysicalResolution::FlexDirection(flow) => flow.as_str().to_string(),
            PhysicalResolution::TextAlign(side) => side.as_str().to_string(),
            PhysicalResolution::Margin(_, len)
            | PhysicalResolution::Padding(_, len)
            | PhysicalResolution::Position(_, len)
            | PhysicalResolution::Border(_, len)
            | PhysicalResolution::CornerRadius(_, len) => len.to_string(),
            PhysicalResolution::Icon(icon) => icon.name().to_string(),
        }
    }
}

impl fmt::Display for PhysicalResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_name(), self.value())
    }
}

/// Resolve a logical request to its physical attribute.
pub fn resolve_primitive(primitive: &LayoutPrimitive, direction: LayoutDirection) -> PhysicalResolution {
    match primitive {
        LayoutPrimitive::FlexDirection(flow) => PhysicalResolution::FlexDirection(match direction {
            LayoutDirection::Ltr => *flow,
            LayoutDirection::Rtl => flow.mirrored(),
        }),
        LayoutPrimitive::TextAlign(side) => PhysicalResolution::TextAlign(side.resolve(direction)),
        LayoutPrimitive::Margin(side, len) => PhysicalResolution::Margin(side.resolve(direction), *len),
        LayoutPrimitive::Padding(side, len) => {
            PhysicalResolution::Padding(side.resolve(direction), *len)
        }
        LayoutPrimitive::Position(side, len) => {
            PhysicalResolution::Position(side.resolve(direction), *len)
        }
        LayoutPrimitive::Border(side, len) => PhysicalResolution::Border(side.resolve(direction), *len),
        LayoutPrimitive::CornerRadius(corner, len) => {
            PhysicalResolution::CornerRadius(corner.resolve(direction), *len)
        }
        LayoutPrimitive::Icon(icon) => PhysicalResolution::Icon(icon.resolve(direction)),
    }
}

/// The direction handed down to every screen while it lays itself out.
///
/// Consumers resolve through the context and never inspect the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutContext {
    direction: LayoutDirection,
}

impl LayoutContext {
    /// Create a context for `direction`.
    pub fn new(direction: LayoutDirection) -> Self {
        Self { direction }
    }

    /// The direction this context resolves under.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Resolve a logical request.
    pub fn resolve(&self, primitive: &LayoutPrimitive) -> PhysicalResolution {
        resolve_primitive(primitive, self.direction)
    }

    /// Resolve several requests in order.
    pub fn resolve_all<'a>(
        &self,
        primitives: impl IntoIterator<Item = &'a LayoutPrimitive>,
    ) -> Vec<PhysicalResolution> {
        primitives.into_iter().map(|p| self.resolve(p)).collect()
    }
}

static_assertions::assert_impl_all!(LayoutContext: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::DirectionalIcon;

    const SIDES: [LogicalSide; 2] = [LogicalSide::Start, LogicalSide::End];
    const CORNERS: [LogicalCorner; 4] = [
        LogicalCorner::TopStart,
        LogicalCorner::TopEnd,
        LogicalCorner::BottomStart,
        LogicalCorner::BottomEnd,
    ];

    fn sample_primitives() -> Vec<LayoutPrimitive> {
        let len = LengthValue::px(4.0);
        let mut all = vec![
            LayoutPrimitive::FlexDirection(FlexFlow::Row),
            LayoutPrimitive::FlexDirection(FlexFlow::RowReverse),
            LayoutPrimitive::Icon(IconRef::parse("receipt-outline")),
        ];
        for side in SIDES {
            all.push(LayoutPrimitive::TextAlign(side));
            all.push(LayoutPrimitive::Margin(side, len));
            all.push(LayoutPrimitive::Padding(side, len));
            all.push(LayoutPrimitive::Position(side, len));
            all.push(LayoutPrimitive::Border(side, len));
        }
        for corner in CORNERS {
            all.push(LayoutPrimitive::CornerRadius(corner, len));
        }
        for icon in DirectionalIcon::ALL {
            all.push(LayoutPrimitive::Icon(icon.into()));
        }
        all
    }

    #[test]
    fn margin_start_scenario() {
        let p = LayoutPrimitive::Margin(LogicalSide::Start, LengthValue::px(4.0));
        let ltr = resolve_primitive(&p, LayoutDirection::Ltr);
        let rtl = resolve_primitive(&p, LayoutDirection::Rtl);
        assert_eq!(ltr, PhysicalResolution::Margin(PhysicalSide::Left, LengthValue::px(4.0)));
        assert_eq!(rtl, PhysicalResolution::Margin(PhysicalSide::Right, LengthValue::px(4.0)));
        assert_eq!(ltr.to_string(), "marginLeft: 4");
        assert_eq!(rtl.to_string(), "marginRight: 4");
    }

    #[test]
    fn ltr_is_natural_mapping() {
        let ltr = LayoutDirection::Ltr;
        let len = LengthValue::px(8.0);
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::TextAlign(LogicalSide::Start), ltr).to_string(),
            "textAlign: left"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::Padding(LogicalSide::End, len), ltr).to_string(),
            "paddingRight: 8"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::Position(LogicalSide::Start, len), ltr).to_string(),
            "left: 8"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::Border(LogicalSide::End, len), ltr).to_string(),
            "borderRightWidth: 8"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::CornerRadius(LogicalCorner::TopStart, len), ltr)
                .to_string(),
            "borderTopLeftRadius: 8"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::FlexDirection(FlexFlow::Row), ltr).to_string(),
            "flexDirection: row"
        );
    }

    #[test]
    fn rtl_is_exact_mirror() {
        let rtl = LayoutDirection::Rtl;
        let len = LengthValue::px(8.0);
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::TextAlign(LogicalSide::Start), rtl).to_string(),
            "textAlign: right"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::TextAlign(LogicalSide::End), rtl).to_string(),
            "textAlign: left"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::CornerRadius(LogicalCorner::BottomEnd, len), rtl)
                .to_string(),
            "borderBottomLeftRadius: 8"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::FlexDirection(FlexFlow::Row), rtl).to_string(),
            "flexDirection: row-reverse"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::FlexDirection(FlexFlow::RowReverse), rtl)
                .to_string(),
            "flexDirection: row"
        );
        assert_eq!(
            resolve_primitive(&LayoutPrimitive::Icon(DirectionalIcon::ArrowBack.into()), rtl)
                .to_string(),
            "name: arrow-forward"
        );
    }

    #[test]
    fn start_under_rtl_equals_end_under_ltr() {
        let len = LengthValue::percent(10.0);
        for make in [
            LayoutPrimitive::Margin as fn(LogicalSide, LengthValue) -> LayoutPrimitive,
            LayoutPrimitive::Padding,
            LayoutPrimitive::Position,
            LayoutPrimitive::Border,
        ] {
            for side in SIDES {
                assert_eq!(
                    resolve_primitive(&make(side, len), LayoutDirection::Rtl),
                    resolve_primitive(&make(side.mirrored(), len), LayoutDirection::Ltr)
                );
            }
        }
        for side in SIDES {
            assert_eq!(
                resolve_primitive(&LayoutPrimitive::TextAlign(side), LayoutDirection::Rtl),
                resolve_primitive(&LayoutPrimitive::TextAlign(side.mirrored()), LayoutDirection::Ltr)
            );
        }
    }

    #[test]
    fn rtl_resolution_equals_ltr_resolution_of_mirror() {
        for p in sample_primitives() {
            assert_eq!(
                resolve_primitive(&p, LayoutDirection::Rtl),
                resolve_primitive(&p.mirrored(), LayoutDirection::Ltr),
                "{p:?}"
            );
            assert_eq!(p.mirrored().mirrored(), p);
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for p in sample_primitives() {
            for dir in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
                assert_eq!(resolve_primitive(&p, dir), resolve_primitive(&p, dir));
            }
        }
    }

    #[test]
    fn corners_are_a_bijection() {
        for dir in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            let mut resolved: Vec<_> = CORNERS.iter().map(|c| c.resolve(dir)).collect();
            resolved.sort_by_key(|c| *c as u8);
            resolved.dedup();
            assert_eq!(resolved.len(), 4);
        }
    }

    #[test]
    fn neutral_icon_is_identity() {
        let p = LayoutPrimitive::Icon(IconRef::parse("cash-outline"));
        for dir in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            assert_eq!(resolve_primitive(&p, dir).to_string(), "name: cash-outline");
        }
    }

    #[test]
    fn context_resolves_with_its_direction() {
        let ctx = LayoutContext::new(LayoutDirection::Rtl);
        let requests = [
            LayoutPrimitive::Padding(LogicalSide::Start, LengthValue::px(12.0)),
            LayoutPrimitive::Icon(DirectionalIcon::ChevronForward.into()),
        ];
        let resolved: Vec<String> = ctx.resolve_all(&requests).iter().map(|r| r.to_string()).collect();
        assert_eq!(resolved, vec!["paddingRight: 12", "name: chevron-back"]);
        assert_eq!(LayoutContext::default().direction(), LayoutDirection::Ltr);
    }
}
