// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{AnsiValue, BasicColor, ColorSupport, InlineString, RgbValue, SgrCode,
            TransformColor};

/// The three ways a color can be specified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorValue {
    /// One of the 16 named terminal colors (palette index 0-15).
    Basic(BasicColor),
    /// Any of the 256 palette entries.
    Ansi256(AnsiValue),
    /// Exact 24-bit color.
    Rgb(RgbValue),
}

impl ColorValue {
    /// Returns the closest representation this color has in `mode`, or [`None`] for
    /// [`ColorSupport::NoColor`].
    ///
    /// Basic colors are kept as-is in every color mode since they refer to the
    /// terminal's own theme. Palette indices are kept in 256 color and truecolor modes.
    /// RGB values are only kept in truecolor mode.
    #[must_use]
    pub fn degrade(self, mode: ColorSupport) -> Option<ColorValue> {
        match (mode, self) {
            (ColorSupport::NoColor, _) => None,
            (ColorSupport::Ansi16, it) => Some(ColorValue::Basic(it.as_ansi16())),
            (ColorSupport::Ansi256, ColorValue::Rgb(rgb)) => {
                Some(ColorValue::Ansi256(rgb.as_ansi256()))
            }
            (ColorSupport::Ansi256 | ColorSupport::Truecolor, it) => Some(it),
        }
    }
}

impl TransformColor for ColorValue {
    fn as_rgb(&self) -> RgbValue {
        match self {
            ColorValue::Basic(it) => it.as_rgb(),
            ColorValue::Ansi256(it) => it.as_rgb(),
            ColorValue::Rgb(it) => it.as_rgb(),
        }
    }

    fn as_ansi256(&self) -> AnsiValue {
        match self {
            ColorValue::Basic(it) => it.as_ansi256(),
            ColorValue::Ansi256(it) => it.as_ansi256(),
            ColorValue::Rgb(it) => it.as_ansi256(),
        }
    }

    fn as_ansi16(&self) -> BasicColor {
        match self {
            ColorValue::Basic(it) => it.as_ansi16(),
            ColorValue::Ansi256(it) => it.as_ansi16(),
            ColorValue::Rgb(it) => it.as_ansi16(),
        }
    }
}

/// An immutable color value with an optional semantic name (eg `"success"`). The name
/// has no effect on rendering.
///
/// ```
/// use termglow::{Color, ColorSupport};
///
/// let teal = Color::rgb(18, 194, 233).with_name("brand");
/// assert_eq!(teal.render_fg(ColorSupport::Truecolor), "\x1b[38;2;18;194;233m");
/// assert_eq!(teal.render_fg(ColorSupport::Ansi256), "\x1b[38;5;38m");
/// assert_eq!(teal.render_fg(ColorSupport::Ansi16), "\x1b[36m");
/// assert_eq!(teal.render_fg(ColorSupport::NoColor), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    value: ColorValue,
    name: Option<InlineString>,
}

impl From<ColorValue> for Color {
    fn from(value: ColorValue) -> Self { Self { value, name: None } }
}

impl From<BasicColor> for Color {
    fn from(value: BasicColor) -> Self { ColorValue::Basic(value).into() }
}

impl From<AnsiValue> for Color {
    fn from(value: AnsiValue) -> Self { ColorValue::Ansi256(value).into() }
}

impl From<RgbValue> for Color {
    fn from(value: RgbValue) -> Self { ColorValue::Rgb(value).into() }
}

impl Color {
    #[must_use]
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        RgbValue::from_u8(red, green, blue).into()
    }

    #[must_use]
    pub fn ansi256(index: u8) -> Self { AnsiValue::new(index).into() }

    /// Returns [`None`] if `index` is not in the range 0-15.
    #[must_use]
    pub fn named(index: u8) -> Option<Self> { BasicColor::from_index(index).map(Into::into) }

    #[must_use]
    pub fn with_name(self, name: &str) -> Self {
        Self {
            value: self.value,
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub fn value(&self) -> ColorValue { self.value }

    #[must_use]
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }

    /// A copy of this color with each channel doubled (clamped to 255). The result is
    /// always an RGB color.
    #[must_use]
    pub fn brighten(&self) -> Self {
        Self {
            value: ColorValue::Rgb(self.as_rgb().brighten()),
            name: self.name.clone(),
        }
    }

    #[must_use]
    pub fn fg_code(&self, mode: ColorSupport) -> Option<SgrCode> {
        self.value.degrade(mode).map(|it| match it {
            ColorValue::Basic(c) => SgrCode::ForegroundBasic(c),
            ColorValue::Ansi256(c) => SgrCode::ForegroundAnsi256(c.index),
            ColorValue::Rgb(c) => SgrCode::ForegroundRGB(c.red, c.green, c.blue),
        })
    }

    #[must_use]
    pub fn bg_code(&self, mode: ColorSupport) -> Option<SgrCode> {
        self.value.degrade(mode).map(|it| match it {
            ColorValue::Basic(c) => SgrCode::BackgroundBasic(c),
            ColorValue::Ansi256(c) => SgrCode::BackgroundAnsi256(c.index),
            ColorValue::Rgb(c) => SgrCode::BackgroundRGB(c.red, c.green, c.blue),
        })
    }

    /// The escape sequence that selects this color as the foreground in `mode`. Empty
    /// for [`ColorSupport::NoColor`].
    #[must_use]
    pub fn render_fg(&self, mode: ColorSupport) -> String {
        self.fg_code(mode).map(|it| it.to_string()).unwrap_or_default()
    }

    /// The escape sequence that selects this color as the background in `mode`. Empty
    /// for [`ColorSupport::NoColor`].
    #[must_use]
    pub fn render_bg(&self, mode: ColorSupport) -> String {
        self.bg_code(mode).map(|it| it.to_string()).unwrap_or_default()
    }
}

/// Generates one constructor per basic color, eg `Color::red()`.
macro_rules! define_basic_color_constructors {
    ($($fn_name:ident => $variant:ident),* $(,)?) => {
        impl Color {
            $(
                #[must_use]
                pub fn $fn_name() -> Self { BasicColor::$variant.into() }
            )*
        }
    };
}

define_basic_color_constructors! {
    black => Black,
    red => Red,
    green => Green,
    yellow => Yellow,
    blue => Blue,
    magenta => Magenta,
    cyan => Cyan,
    white => White,
    bright_black => BrightBlack,
    bright_red => BrightRed,
    bright_green => BrightGreen,
    bright_yellow => BrightYellow,
    bright_blue => BrightBlue,
    bright_magenta => BrightMagenta,
    bright_cyan => BrightCyan,
    bright_white => BrightWhite,
}

impl TransformColor for Color {
    fn as_rgb(&self) -> RgbValue { self.value.as_rgb() }

    fn as_ansi256(&self) -> AnsiValue { self.value.as_ansi256() }

    fn as_ansi16(&self) -> BasicColor { self.value.as_ansi16() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(Color::rgb(255, 128, 0), ColorSupport::Truecolor, "\x1b[38;2;255;128;0m")]
    #[test_case(Color::rgb(255, 128, 0), ColorSupport::Ansi256, "\x1b[38;5;208m")]
    #[test_case(Color::rgb(255, 128, 0), ColorSupport::Ansi16, "\x1b[33m")]
    #[test_case(Color::rgb(255, 128, 0), ColorSupport::NoColor, "")]
    #[test_case(Color::ansi256(42), ColorSupport::Truecolor, "\x1b[38;5;42m")]
    #[test_case(Color::ansi256(42), ColorSupport::Ansi256, "\x1b[38;5;42m")]
    #[test_case(Color::ansi256(9), ColorSupport::Ansi16, "\x1b[91m")]
    #[test_case(Color::from(BasicColor::Green), ColorSupport::Truecolor, "\x1b[32m")]
    #[test_case(Color::from(BasicColor::Green), ColorSupport::Ansi256, "\x1b[32m")]
    #[test_case(Color::from(BasicColor::Green), ColorSupport::NoColor, "")]
    fn test_render_fg(color: Color, mode: ColorSupport, expected: &str) {
        assert_eq!(color.render_fg(mode), expected);
    }

    #[test_case(Color::rgb(175, 215, 135), ColorSupport::Truecolor, "\x1b[48;2;175;215;135m")]
    #[test_case(Color::rgb(175, 215, 135), ColorSupport::Ansi256, "\x1b[48;5;150m")]
    #[test_case(Color::from(BasicColor::BrightBlue), ColorSupport::Ansi16, "\x1b[104m")]
    #[test_case(Color::ansi256(200), ColorSupport::NoColor, "")]
    fn test_render_bg(color: Color, mode: ColorSupport, expected: &str) {
        assert_eq!(color.render_bg(mode), expected);
    }

    #[test]
    fn test_render_is_referentially_transparent() {
        let color = Color::rgb(12, 34, 56);
        for mode in [
            ColorSupport::NoColor,
            ColorSupport::Ansi16,
            ColorSupport::Ansi256,
            ColorSupport::Truecolor,
        ] {
            assert_eq!(color.render_fg(mode), color.render_fg(mode));
            assert_eq!(color.render_bg(mode), color.render_bg(mode));
        }
    }

    #[test]
    fn test_named() {
        assert_eq!(Color::named(1), Some(Color::red()));
        assert_eq!(Color::named(15), Some(Color::bright_white()));
        assert_eq!(Color::named(16), None);
    }

    #[test]
    fn test_name_does_not_affect_rendering() {
        let plain = Color::ansi256(200);
        let named = plain.clone().with_name("accent");
        assert_eq!(named.name(), Some("accent"));
        assert_eq!(plain.name(), None);
        assert_eq!(
            plain.render_fg(ColorSupport::Ansi256),
            named.render_fg(ColorSupport::Ansi256)
        );
    }

    #[test]
    fn test_brighten() {
        let color = Color::rgb(100, 200, 10).brighten();
        assert_eq!(color.value(), ColorValue::Rgb(RgbValue::from_u8(200, 255, 20)));
    }

    #[test]
    fn test_serde_round_trip() {
        let color = Color::rgb(1, 2, 3).with_name("ink");
        let json = serde_json::to_string(&color).unwrap();
        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);
    }
}
