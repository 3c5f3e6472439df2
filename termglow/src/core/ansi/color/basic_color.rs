// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use super::convert::ansi_constants::ANSI16_PALETTE;
use crate::{AnsiValue, RgbValue, TransformColor};

/// The 16 named terminal colors (palette indices 0-15). The first 8 are the normal
/// colors (SGR 30-37, 40-47) and the last 8 are their bright variants (SGR 90-97,
/// 100-107).
///
/// The RGB value of each of these is really decided by the terminal's theme. For
/// conversions this crate uses the xterm defaults in [`ANSI16_PALETTE`].
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, Serialize, Deserialize,
)]
pub enum BasicColor {
    Black = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// Palette index of this color, in the range 0-15.
    #[must_use]
    pub const fn index(self) -> u8 { self as u8 }

    /// Returns [`None`] if `index` is greater than 15.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::iter().find(|it| it.index() == index)
    }

    #[must_use]
    pub const fn is_bright(self) -> bool { self.index() >= 8 }

    /// The SGR parameter that selects this color as the foreground.
    #[must_use]
    pub const fn fg_param(self) -> u8 {
        if self.is_bright() {
            90 + self.index() - 8
        } else {
            30 + self.index()
        }
    }

    /// The SGR parameter that selects this color as the background.
    #[must_use]
    pub const fn bg_param(self) -> u8 {
        if self.is_bright() {
            100 + self.index() - 8
        } else {
            40 + self.index()
        }
    }
}

impl TransformColor for BasicColor {
    fn as_rgb(&self) -> RgbValue { RgbValue::from(ANSI16_PALETTE[self.index() as usize]) }

    fn as_ansi256(&self) -> AnsiValue { AnsiValue::new(self.index()) }

    fn as_ansi16(&self) -> BasicColor { *self }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_count_and_order() {
        assert_eq!(BasicColor::COUNT, 16);
        for (expected, color) in (0u8..).zip(BasicColor::iter()) {
            assert_eq!(color.index(), expected);
            assert_eq!(BasicColor::from_index(expected), Some(color));
        }
        assert_eq!(BasicColor::from_index(16), None);
    }

    #[test_case(BasicColor::Black, 30, 40)]
    #[test_case(BasicColor::White, 37, 47)]
    #[test_case(BasicColor::BrightBlack, 90, 100)]
    #[test_case(BasicColor::BrightWhite, 97, 107)]
    fn test_sgr_params(color: BasicColor, fg: u8, bg: u8) {
        assert_eq!(color.fg_param(), fg);
        assert_eq!(color.bg_param(), bg);
    }

    #[test]
    fn test_as_rgb_uses_xterm_defaults() {
        assert_eq!(BasicColor::Red.as_rgb(), RgbValue::from_u8(205, 0, 0));
        assert_eq!(BasicColor::BrightBlue.as_rgb(), RgbValue::from_u8(92, 92, 255));
    }
}
