// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Color, Effect, RgbValue, Theme, TransformColor, lerp_rgb};

pub const RAINBOW_PALETTE: [RgbValue; 7] = [
    RgbValue::from_u8(255, 0, 0),
    RgbValue::from_u8(255, 127, 0),
    RgbValue::from_u8(255, 255, 0),
    RgbValue::from_u8(0, 255, 0),
    RgbValue::from_u8(0, 0, 255),
    RgbValue::from_u8(75, 0, 130),
    RgbValue::from_u8(148, 0, 211),
];

/// The color of one bar column.
///
/// - Empty columns always use [`Theme::incomplete`].
/// - Filled columns depend on `effect`. The gradient position is taken across the whole
///   `width`, not just the filled part, so a column keeps its color as the bar grows.
#[must_use]
pub fn column_color(
    effect: &Effect,
    theme: &Theme,
    column: usize,
    width: usize,
    is_filled: bool,
) -> Color {
    if !is_filled {
        return theme.incomplete.clone();
    }
    match effect {
        Effect::None => theme.complete.clone(),
        Effect::Gradient { from, to } => {
            gradient_color(from, to, position(column, width))
        }
        Effect::Rainbow => RAINBOW_PALETTE[column % RAINBOW_PALETTE.len()].into(),
        Effect::Glow => theme.complete.brighten(),
    }
}

/// The color of the spinner glyph on a given tick.
///
/// - Gradient sweeps from `from` to `to` and back, one step per tick over `period`.
/// - Glow pulses between the complete color and its brightened version.
#[must_use]
pub fn tick_color(effect: &Effect, theme: &Theme, tick: usize, period: usize) -> Color {
    match effect {
        Effect::None => theme.complete.clone(),
        Effect::Gradient { from, to } => {
            let period = period.max(2);
            let step = tick % (2 * (period - 1));
            let step = if step >= period { 2 * (period - 1) - step } else { step };
            gradient_color(from, to, position(step, period))
        }
        Effect::Rainbow => RAINBOW_PALETTE[tick % RAINBOW_PALETTE.len()].into(),
        Effect::Glow => {
            if tick % 2 == 0 {
                theme.complete.brighten()
            } else {
                theme.complete.clone()
            }
        }
    }
}

fn gradient_color(from: &Color, to: &Color, t: f64) -> Color {
    lerp_rgb(from.as_rgb(), to.as_rgb(), t).into()
}

#[allow(clippy::cast_precision_loss)]
fn position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}
