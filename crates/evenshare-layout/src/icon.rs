//! Directional icon table.
//!
//! Some glyphs point along the reading direction (a "back" chevron points
//! toward the start edge). Under right-to-left layout each of them is swapped
//! for its partner. Every other icon is direction-neutral and passes through.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::LayoutDirection;

/// A glyph that has a mirrored partner.
///
/// The mapping is total: every variant has exactly one partner, and
/// [`mirrored`](Self::mirrored) is an involution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionalIcon {
    /// Back chevron used by navigation headers
    ChevronBack,
    /// Forward chevron used by list rows
    ChevronForward,
    /// Back arrow
    ArrowBack,
    /// Forward arrow
    ArrowForward,
    /// Small back caret
    CaretBack,
    /// Small forward caret
    CaretForward,
    /// Return/undo arrow
    ReturnBack,
    /// Redo arrow
    ReturnForward,
    /// Rewind/previous control
    PlayBack,
    /// Fast-forward/next control
    PlayForward,
}

impl DirectionalIcon {
    /// Every directional glyph.
    pub const ALL: [DirectionalIcon; 10] = [
        DirectionalIcon::ChevronBack,
        DirectionalIcon::ChevronForward,
        DirectionalIcon::ArrowBack,
        DirectionalIcon::ArrowForward,
        DirectionalIcon::CaretBack,
        DirectionalIcon::CaretForward,
        DirectionalIcon::ReturnBack,
        DirectionalIcon::ReturnForward,
        DirectionalIcon::PlayBack,
        DirectionalIcon::PlayForward,
    ];

    /// The glyph name in the icon font.
    pub fn name(&self) -> &'static str {
        match self {
            DirectionalIcon::ChevronBack => "chevron-back",
            DirectionalIcon::ChevronForward => "chevron-forward",
            DirectionalIcon::ArrowBack => "arrow-back",
            DirectionalIcon::ArrowForward => "arrow-forward",
            DirectionalIcon::CaretBack => "caret-back",
            DirectionalIcon::CaretForward => "caret-forward",
            DirectionalIcon::ReturnBack => "return-up-back",
            DirectionalIcon::ReturnForward => "return-up-forward",
            DirectionalIcon::PlayBack => "play-back",
            DirectionalIcon::PlayForward => "play-forward",
        }
    }

    /// Look up a glyph by its icon-font name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// The partner glyph.
    pub fn mirrored(&self) -> Self {
        match self {
            DirectionalIcon::ChevronBack => DirectionalIcon::ChevronForward,
            DirectionalIcon::ChevronForward => DirectionalIcon::ChevronBack,
            DirectionalIcon::ArrowBack => DirectionalIcon::ArrowForward,
            DirectionalIcon::ArrowForward => DirectionalIcon::ArrowBack,
            DirectionalIcon::CaretBack => DirectionalIcon::CaretForward,
            DirectionalIcon::CaretForward => DirectionalIcon::CaretBack,
            DirectionalIcon::ReturnBack => DirectionalIcon::ReturnForward,
            DirectionalIcon::ReturnForward => DirectionalIcon::ReturnBack,
            DirectionalIcon::PlayBack => DirectionalIcon::PlayForward,
            DirectionalIcon::PlayForward => DirectionalIcon::PlayBack,
        }
    }

    /// The glyph to draw under `direction`.
    pub fn resolve(&self, direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ltr => *self,
            LayoutDirection::Rtl => self.mirrored(),
        }
    }
}

/// An icon reference as requested by a screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconRef {
    /// A glyph that swaps with its partner under right-to-left layout.
    Directional(DirectionalIcon),
    /// A direction-neutral glyph, drawn as named.
    Fixed(String),
}

impl IconRef {
    /// Classify an icon-font name. Names outside the directional table are
    /// direction-neutral.
    pub fn parse(name: &str) -> Self {
        match DirectionalIcon::from_name(name) {
            Some(icon) => IconRef::Directional(icon),
            None => IconRef::Fixed(name.to_string()),
        }
    }

    /// The icon-font name.
    pub fn name(&self) -> &str {
        match self {
            IconRef::Directional(icon) => icon.name(),
            IconRef::Fixed(name) => name,
        }
    }

    /// The icon to draw under `direction`.
    pub fn resolve(&self, direction: LayoutDirection) -> Self {
        match self {
            IconRef::Directional(icon) => IconRef::Directional(icon.resolve(direction)),
            IconRef::Fixed(_) => self.clone(),
        }
    }

    /// The same request with its directional glyph swapped.
    pub fn mirrored(&self) -> Self {
        match self {
            IconRef::Directional(icon) => IconRef::Directional(icon.mirrored()),
            IconRef::Fixed(_) => self.clone(),
        }
    }
}

impl From<DirectionalIcon> for IconRef {
    fn from(icon: DirectionalIcon) -> Self {
        IconRef::Directional(icon)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_is_an_involution() {
        for icon in DirectionalIcon::ALL {
            assert_ne!(icon.mirrored(), icon);
            assert_eq!(icon.mirrored().mirrored(), icon);
        }
    }

    #[test]
    fn names_roundtrip_and_are_unique() {
        for icon in DirectionalIcon::ALL {
            assert_eq!(DirectionalIcon::from_name(icon.name()), Some(icon));
        }
        let mut names: Vec<_> = DirectionalIcon::ALL.iter().map(|i| i.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DirectionalIcon::ALL.len());
    }

    #[test]
    fn back_chevron_swaps_under_rtl() {
        let back = IconRef::parse("chevron-back");
        assert_eq!(back.resolve(LayoutDirection::Ltr).name(), "chevron-back");
        assert_eq!(back.resolve(LayoutDirection::Rtl).name(), "chevron-forward");
    }

    #[test]
    fn unknown_icon_passes_through() {
        let wallet = IconRef::parse("wallet-outline");
        assert_eq!(wallet, IconRef::Fixed("wallet-outline".to_string()));
        assert_eq!(wallet.resolve(LayoutDirection::Rtl), wallet);
        assert_eq!(wallet.mirrored(), wallet);
    }
}
