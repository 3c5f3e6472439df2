// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) escape sequences.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use std::fmt::{Display, Formatter, Result};

use crate::BasicColor;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Terminates an SGR sequence.
pub const SGR: &str = "m";

/// The escape character that starts every sequence.
pub const ESC: char = '\x1b';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    Invert,
    Strikethrough,
    ForegroundBasic(BasicColor),
    BackgroundBasic(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

impl Display for SgrCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI)?;
        match *self {
            SgrCode::Reset => f.write_str("0")?,
            SgrCode::Bold => f.write_str("1")?,
            SgrCode::Dim => f.write_str("2")?,
            SgrCode::Italic => f.write_str("3")?,
            SgrCode::Underline => f.write_str("4")?,
            SgrCode::SlowBlink => f.write_str("5")?,
            SgrCode::Invert => f.write_str("7")?,
            SgrCode::Strikethrough => f.write_str("9")?,
            SgrCode::ForegroundBasic(color) => write!(f, "{}", color.fg_param())?,
            SgrCode::BackgroundBasic(color) => write!(f, "{}", color.bg_param())?,
            SgrCode::ForegroundAnsi256(index) => write!(f, "38;5;{index}")?,
            SgrCode::BackgroundAnsi256(index) => write!(f, "48;5;{index}")?,
            SgrCode::ForegroundRGB(r, g, b) => write!(f, "38;2;{r};{g};{b}")?,
            SgrCode::BackgroundRGB(r, g, b) => write!(f, "48;2;{r};{g};{b}")?,
        }
        f.write_str(SGR)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(SgrCode::Reset, "\x1b[0m")]
    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Dim, "\x1b[2m")]
    #[test_case(SgrCode::Italic, "\x1b[3m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::Invert, "\x1b[7m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    fn attribute_codes(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test_case(SgrCode::ForegroundBasic(BasicColor::Red), "\x1b[31m")]
    #[test_case(SgrCode::ForegroundBasic(BasicColor::BrightWhite), "\x1b[97m")]
    #[test_case(SgrCode::BackgroundBasic(BasicColor::Black), "\x1b[40m")]
    #[test_case(SgrCode::BackgroundBasic(BasicColor::BrightCyan), "\x1b[106m")]
    fn basic_color_codes(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test]
    fn fg_color_ansi256() {
        assert_eq!(SgrCode::ForegroundAnsi256(150).to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        assert_eq!(SgrCode::BackgroundAnsi256(150).to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::ForegroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrCode::BackgroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[48;2;175;215;135m");
    }
}
