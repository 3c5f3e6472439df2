// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between the three color representations. Every "nearest color" search
//! in this module uses squared Euclidean distance in RGB space, and breaks ties in favor
//! of the lowest palette index.

use self::ansi_constants::{ANSI16_PALETTE, CUBE_LEVELS, GRAYSCALE_RAMP_START,
                           GRAYSCALE_RAMP_STEP, GRAYSCALE_TOLERANCE};
use crate::{AnsiValue, BasicColor, RgbValue, TransformColor};

pub mod ansi_constants {
    /// xterm default RGB values for the 16 basic colors.
    pub const ANSI16_PALETTE: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (205, 0, 0),
        (0, 205, 0),
        (205, 205, 0),
        (0, 0, 238),
        (205, 0, 205),
        (0, 205, 205),
        (229, 229, 229),
        (127, 127, 127),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (92, 92, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];

    /// Channel values of the 6×6×6 color cube (indices 16-231).
    pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    /// First palette index of the grayscale ramp (232-255).
    pub const GRAYSCALE_RAMP_START: u8 = 232;

    /// Ramp entry `i` has the channel value `8 + i * GRAYSCALE_RAMP_STEP`.
    pub const GRAYSCALE_RAMP_STEP: u8 = 10;

    /// Maximum spread between the largest and smallest channel for a color to be
    /// considered a candidate for the grayscale ramp.
    pub const GRAYSCALE_TOLERANCE: u8 = 10;
}

/// Returns the RGB value of any 256-color palette index.
#[must_use]
pub fn palette_index_into_rgb(index: u8) -> RgbValue {
    match index {
        0..=15 => RgbValue::from(ANSI16_PALETTE[index as usize]),
        16..=231 => {
            let offset = (index - 16) as usize;
            RgbValue::from_u8(
                CUBE_LEVELS[offset / 36],
                CUBE_LEVELS[(offset % 36) / 6],
                CUBE_LEVELS[offset % 6],
            )
        }
        _ => {
            let value = 8 + (index - GRAYSCALE_RAMP_START) * GRAYSCALE_RAMP_STEP;
            RgbValue::from_u8(value, value, value)
        }
    }
}

/// Maps `rgb` to the 6×6×6 color cube by quantizing each channel to its nearest cube
/// level. When the channels are close together, the nearest grayscale ramp entry is
/// also considered, and whichever of the two candidates is closer wins.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    let cube = AnsiValue::new(
        16 + 36 * nearest_cube_level(rgb.red)
            + 6 * nearest_cube_level(rgb.green)
            + nearest_cube_level(rgb.blue),
    );

    if !rgb.is_near_gray(GRAYSCALE_TOLERANCE) {
        return cube;
    }

    let gray = AnsiValue::new(nearest_grayscale_ramp_index(rgb));
    let cube_distance = rgb.distance_squared(cube.as_rgb());
    let gray_distance = rgb.distance_squared(gray.as_rgb());
    if gray_distance < cube_distance {
        gray
    } else {
        cube
    }
}

/// Nearest of the 16 basic colors. Ties go to the lowest index.
#[must_use]
pub fn convert_rgb_into_ansi16(rgb: RgbValue) -> BasicColor {
    use strum::IntoEnumIterator;
    BasicColor::iter()
        .min_by_key(|it| rgb.distance_squared(it.as_rgb()))
        .unwrap_or(BasicColor::Black)
}

/// Position (0-5) of the cube level closest to `value`.
fn nearest_cube_level(value: u8) -> u8 {
    (0u8..)
        .zip(CUBE_LEVELS)
        .min_by_key(|(_, level)| value.abs_diff(*level))
        .map_or(0, |(position, _)| position)
}

fn nearest_grayscale_ramp_index(rgb: RgbValue) -> u8 {
    let average =
        (u16::from(rgb.red) + u16::from(rgb.green) + u16::from(rgb.blue)) / 3;
    let step = u16::from(GRAYSCALE_RAMP_STEP);
    let position = (average.saturating_sub(8) + step / 2) / step;
    // Clamped to the 24 ramp entries, so this always fits.
    let position = u8::try_from(position.min(23)).unwrap_or(23);
    GRAYSCALE_RAMP_START + position
}
