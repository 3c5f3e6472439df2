// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! Each index (0-255) maps to a specific color in the palette:
//! - Indices 0-15: the 16 basic colors
//! - Indices 16-231: 6×6×6 RGB color cube (216 colors)
//! - Indices 232-255: Grayscale ramp (24 shades)

use serde::{Deserialize, Serialize};

use super::convert::{convert_rgb_into_ansi16, palette_index_into_rgb};
use crate::{BasicColor, RgbValue, TransformColor};

#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// Check if this is a basic ANSI color (indices 0-15).
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { palette_index_into_rgb(self.index) }

    fn as_ansi256(&self) -> AnsiValue { *self }

    fn as_ansi16(&self) -> BasicColor {
        match BasicColor::from_index(self.index) {
            Some(basic) => basic,
            None => convert_rgb_into_ansi16(self.as_rgb()),
        }
    }
}
