// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{BasicColor, Color, StyleAttribs, style_attrib};

/// Colors, glyphs and icons used to draw frames and completion lines.
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// use termglow::Theme;
///
/// let theme: Theme = serde_json::from_str(r##"{ "filled_glyph": "#" }"##).unwrap();
/// assert_eq!(theme.filled_glyph, '#');
/// assert_eq!(theme.empty_glyph, Theme::default().empty_glyph);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub complete: Color,
    pub incomplete: Color,
    pub filled_glyph: char,
    pub empty_glyph: char,
    pub success_icon: char,
    pub failure_icon: char,
    pub success_color: Color,
    pub failure_color: Color,
    pub label_attribs: StyleAttribs,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            complete: Color::rgb(18, 194, 233),
            incomplete: Color::ansi256(240),
            filled_glyph: '█',
            empty_glyph: '░',
            success_icon: '✔',
            failure_icon: '✖',
            success_color: BasicColor::BrightGreen.into(),
            failure_color: BasicColor::BrightRed.into(),
            label_attribs: style_attrib::Bold.into(),
        }
    }
}

impl Theme {
    #[must_use]
    pub fn outcome_icon(&self, outcome: Outcome) -> char {
        match outcome {
            Outcome::Success => self.success_icon,
            Outcome::Failure => self.failure_icon,
        }
    }

    #[must_use]
    pub fn outcome_color(&self, outcome: Outcome) -> &Color {
        match outcome {
            Outcome::Success => &self.success_color,
            Outcome::Failure => &self.failure_color,
        }
    }
}

/// How the filled part of a bar (or the spinner glyph) is colorized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Every filled column uses [`Theme::complete`].
    #[default]
    None,
    /// Columns fade from `from` (first column) to `to` (last column).
    Gradient { from: Color, to: Color },
    /// Columns cycle through [`crate::RAINBOW_PALETTE`].
    Rainbow,
    /// Filled columns use the brightened complete color.
    Glow,
}

/// How an animation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}
