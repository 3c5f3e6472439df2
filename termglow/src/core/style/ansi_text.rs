// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Measuring and aligning text that may contain SGR escape sequences. Width is counted
//! in chars (unicode scalar values) after escapes are removed.

use crate::ESC;

/// Removes every escape run from `text`. A run starts at [`ESC`] and ends at the first
/// `m` after it (inclusive). An `m` outside of a run is plain text and is kept. A run
/// that is never terminated is dropped up to the end of the string.
///
/// ```
/// use termglow::strip_escapes;
///
/// assert_eq!(strip_escapes("\x1b[1m\x1b[31mmove\x1b[0m me"), "move me");
/// ```
#[must_use]
pub fn strip_escapes(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
        } else if ch == ESC {
            in_escape = true;
        } else {
            acc.push(ch);
        }
    }
    acc
}

/// Number of chars that remain after [`strip_escapes()`].
#[must_use]
pub fn visible_width(text: &str) -> usize { strip_escapes(text).chars().count() }

#[must_use]
pub fn contains_ansi_escape_sequence(text: &str) -> bool { text.contains(ESC) }

/// Appends `pad_char` until the visible width of `text` is `width`. Text that is
/// already at least `width` wide is returned unchanged (never truncated).
#[must_use]
pub fn pad(text: &str, width: usize, pad_char: char) -> String {
    let current = visible_width(text);
    if current >= width {
        return text.to_string();
    }
    let mut acc = String::with_capacity(text.len() + (width - current));
    acc.push_str(text);
    acc.extend(std::iter::repeat_n(pad_char, width - current));
    acc
}

/// Surrounds `text` with spaces so its visible width is `width`. When the padding can't
/// be split evenly, the extra space goes on the right. Text that is already at least
/// `width` wide is returned unchanged.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let current = visible_width(text);
    if current >= width {
        return text.to_string();
    }
    let total = width - current;
    let left = total / 2;
    let right = total - left;
    let mut acc = String::with_capacity(text.len() + total);
    acc.extend(std::iter::repeat_n(' ', left));
    acc.push_str(text);
    acc.extend(std::iter::repeat_n(' ', right));
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("plain", "plain")]
    #[test_case("", "")]
    #[test_case("\x1b[31mred\x1b[0m", "red")]
    #[test_case("\x1b[1m\x1b[4m\x1b[38;2;1;2;3mx\x1b[0m", "x")]
    #[test_case("mmm \x1b[2mdim\x1b[0m mmm", "mmm dim mmm")]
    #[test_case("before\x1b[38;5;", "before")]
    #[test_case("\x1b[0m", "")]
    fn test_strip_escapes(input: &str, expected: &str) {
        assert_eq!(strip_escapes(input), expected);
    }

    #[test_case("hello", 5)]
    #[test_case("\x1b[1mhello\x1b[0m", 5)]
    #[test_case("héllo ✔", 7)]
    #[test_case("", 0)]
    fn test_visible_width(input: &str, expected: usize) {
        assert_eq!(visible_width(input), expected);
    }

    #[test]
    fn test_contains_ansi_escape_sequence() {
        assert!(contains_ansi_escape_sequence("\x1b[1mbold"));
        assert!(!contains_ansi_escape_sequence("plain m"));
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 5, '.'), "ab...");
        assert_eq!(pad("abcdef", 3, '.'), "abcdef");
        assert_eq!(pad("abc", 3, '.'), "abc");
        let styled = "\x1b[1mab\x1b[0m";
        assert_eq!(pad(styled, 4, ' '), format!("{styled}  "));
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 3), "ab ");
        assert_eq!(center("abcd", 2), "abcd");
        let styled = "\x1b[31mx\x1b[0m";
        assert_eq!(visible_width(&center(styled, 4)), 4);
    }
}
