// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use serde::{Deserialize, Serialize};

use super::convert::{convert_rgb_into_ansi16, convert_rgb_into_ansi256};
use crate::{AnsiValue, BasicColor, TransformColor};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl Default for RgbValue {
    fn default() -> Self { Self::from_u8(255, 255, 255) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Squared Euclidean distance between two colors in RGB space. The square root is
    /// never needed since this is only used to compare distances.
    #[must_use]
    pub fn distance_squared(&self, other: RgbValue) -> u32 {
        let dr = u32::from(self.red.abs_diff(other.red));
        let dg = u32::from(self.green.abs_diff(other.green));
        let db = u32::from(self.blue.abs_diff(other.blue));
        dr * dr + dg * dg + db * db
    }

    /// Each channel doubled, saturating at 255.
    #[must_use]
    pub const fn brighten(&self) -> RgbValue {
        Self {
            red: self.red.saturating_mul(2),
            green: self.green.saturating_mul(2),
            blue: self.blue.saturating_mul(2),
        }
    }

    /// Linear interpolation per channel. `t` is clamped to `[0, 1]`, where `0` is `self`
    /// and `1` is `other`.
    #[must_use]
    pub fn lerp(&self, other: RgbValue, t: f64) -> RgbValue {
        let t = t.clamp(0.0, 1.0);
        Self {
            red: lerp_channel(self.red, other.red, t),
            green: lerp_channel(self.green, other.green, t),
            blue: lerp_channel(self.blue, other.blue, t),
        }
    }

    /// True when all three channels are within `tolerance` of each other.
    #[must_use]
    pub fn is_near_gray(&self, tolerance: u8) -> bool {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        max - min <= tolerance
    }
}

/// Free function form of [`RgbValue::lerp()`].
#[must_use]
pub fn lerp_rgb(from: RgbValue, to: RgbValue, t: f64) -> RgbValue { from.lerp(to, t) }

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi256(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }

    fn as_ansi16(&self) -> BasicColor { convert_rgb_into_ansi16(*self) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test]
    fn test_rgb_value_default() {
        assert_eq!(RgbValue::default(), RgbValue::from_u8(255, 255, 255));
    }

    #[test_case(RgbValue::from_u8(0, 0, 0), RgbValue::from_u8(0, 0, 0))]
    #[test_case(RgbValue::from_u8(100, 127, 128), RgbValue::from_u8(200, 254, 255))]
    #[test_case(RgbValue::from_u8(18, 194, 233), RgbValue::from_u8(36, 255, 255))]
    fn test_brighten_saturates(input: RgbValue, expected: RgbValue) {
        assert_eq!(input.brighten(), expected);
    }

    #[test]
    fn test_lerp() {
        let black = RgbValue::from_u8(0, 0, 0);
        let white = RgbValue::from_u8(255, 255, 255);
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), RgbValue::from_u8(128, 128, 128));
        assert_eq!(lerp_rgb(black, white, 0.5), black.lerp(white, 0.5));
        // Out of range t is clamped.
        assert_eq!(black.lerp(white, 7.0), white);
        assert_eq!(black.lerp(white, -1.0), black);
    }

    #[test]
    fn test_distance_squared() {
        let a = RgbValue::from_u8(0, 0, 0);
        let b = RgbValue::from_u8(3, 4, 0);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
    }

    /// <https://www.ditig.com/256-colors-cheat-sheet>
    /// ANSI: 57 `BlueViolet`
    /// RGB: #5f00ff rgb(95,0,255)
    #[test]
    fn test_rgb_to_ansi() {
        let rgb = RgbValue::from_u8(95, 0, 255);
        assert_eq!(rgb.as_ansi256(), AnsiValue::new(57));
    }
}
