// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::{Color, ColorSupport, InlineVec, SgrCode, StyleAttribKind, StyleAttribs};

/// Wraps `text` in the escape sequences for `attribs`, `fg`, and `bg` in `mode`.
///
/// - In [`ColorSupport::NoColor`] mode `text` is returned unchanged, attributes
///   included. Nothing leaks.
/// - Empty `text` is always returned as an empty string.
/// - Codes are emitted in a fixed order: bold, dim, italic, underline, blink, reverse,
///   strikethrough, then the foreground color, then the background color. They are
///   followed by `text` and a single reset.
/// - If no code is produced, `text` is returned as-is (there is never a bare reset).
///
/// ```
/// use termglow::{apply_style, Color, ColorSupport, style_attrib::Bold};
///
/// let red = Color::rgb(255, 0, 0);
/// let it = apply_style("hi", Bold.into(), Some(&red), None, ColorSupport::Ansi256);
/// assert_eq!(it, "\x1b[1m\x1b[38;5;196mhi\x1b[0m");
///
/// let it = apply_style("hi", Bold.into(), Some(&red), None, ColorSupport::NoColor);
/// assert_eq!(it, "hi");
/// ```
#[must_use]
pub fn apply_style(
    text: &str,
    attribs: StyleAttribs,
    fg: Option<&Color>,
    bg: Option<&Color>,
    mode: ColorSupport,
) -> String {
    if text.is_empty() || mode == ColorSupport::NoColor {
        return text.to_string();
    }

    let codes: InlineVec<SgrCode> = attribs
        .kinds()
        .map(StyleAttribKind::sgr_code)
        .chain(fg.and_then(|it| it.fg_code(mode)))
        .chain(bg.and_then(|it| it.bg_code(mode)))
        .collect();

    if codes.is_empty() {
        return text.to_string();
    }

    let mut acc = String::with_capacity(text.len() + codes.len() * 8);
    for code in &codes {
        // Writing to a String can't fail.
        _ = write!(acc, "{code}");
    }
    acc.push_str(text);
    _ = write!(acc, "{}", SgrCode::Reset);
    acc
}

/// A piece of text together with the style it should be rendered with. The escape
/// sequences are only produced when [`Self::render()`] is given a [`ColorSupport`].
///
/// ```
/// use termglow::{ast, Color, ColorSupport, style_attrib::Underline};
///
/// let text = ast("done", Underline).fg_color(Color::rgb(0, 255, 0));
/// assert_eq!(text.render(ColorSupport::Truecolor), "\x1b[4m\x1b[38;2;0;255;0mdone\x1b[0m");
/// assert_eq!(text.render(ColorSupport::NoColor), "done");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AnsiStyledText {
    pub text: String,
    pub attribs: StyleAttribs,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

/// Short for constructing an [`AnsiStyledText`].
pub fn ast(text: impl AsRef<str>, attribs: impl Into<StyleAttribs>) -> AnsiStyledText {
    AnsiStyledText {
        text: text.as_ref().to_string(),
        attribs: attribs.into(),
        fg: None,
        bg: None,
    }
}

impl AnsiStyledText {
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self { ast(text, StyleAttribs::default()) }

    #[must_use]
    pub fn fg_color(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bg_color(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    #[must_use]
    pub fn attribs(mut self, attribs: impl Into<StyleAttribs>) -> Self {
        self.attribs = self.attribs + attribs.into();
        self
    }

    #[must_use]
    pub fn render(&self, mode: ColorSupport) -> String {
        apply_style(
            &self.text,
            self.attribs,
            self.fg.as_ref(),
            self.bg.as_ref(),
            mode,
        )
    }
}
