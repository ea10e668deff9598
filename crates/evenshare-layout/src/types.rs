//! Layout value types.
//!
//! # Example
//!
//! ```
//! use evenshare_layout::LengthValue;
//!
//! assert_eq!(LengthValue::px(4.0).to_string(), "4");
//! assert_eq!(LengthValue::px(1.5).to_string(), "1.5");
//! assert_eq!(LengthValue::percent(50.0).to_string(), "50%");
//! assert_eq!(LengthValue::percent(50.0).to_px(200.0), 100.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A length used by margins, paddings, offsets, borders and corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthValue {
    /// Density-independent pixels.
    Px(f32),
    /// Percentage of the containing block.
    Percent(f32),
    /// Automatic sizing (context-dependent).
    Auto,
    /// Zero length.
    #[default]
    Zero,
}

impl LengthValue {
    /// Create a pixel value.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create a percentage value.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Resolve to pixels given the parent size in the relevant dimension.
    pub fn to_px(&self, parent_size: f32) -> f32 {
        match self {
            LengthValue::Px(v) => *v,
            LengthValue::Percent(v) => (v / 100.0) * parent_size,
            LengthValue::Auto | LengthValue::Zero => 0.0,
        }
    }

    /// Check if this is an auto value.
    pub fn is_auto(&self) -> bool {
        matches!(self, LengthValue::Auto)
    }

    /// Check if this is zero or would resolve to zero.
    pub fn is_zero(&self) -> bool {
        match self {
            LengthValue::Zero => true,
            LengthValue::Px(v) | LengthValue::Percent(v) => *v == 0.0,
            LengthValue::Auto => false,
        }
    }
}

impl From<f32> for LengthValue {
    fn from(value: f32) -> Self {
        Self::Px(value)
    }
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthValue::Px(v) => write_number(f, *v),
            LengthValue::Percent(v) => {
                write_number(f, *v)?;
                f.write_str("%")
            }
            LengthValue::Auto => f.write_str("auto"),
            LengthValue::Zero => f.write_str("0"),
        }
    }
}

// Negative zero prints as plain `0`.
fn write_number(f: &mut fmt::Formatter<'_>, v: f32) -> fmt::Result {
    if v == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{v}")
    }
}
