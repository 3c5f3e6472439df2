// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure functions that turn an [`AnimationState`] into one line of text. Nothing here
//! touches the output device; see [`crate::print`] for that.

use std::fmt::Write as _;

use crate::{AnimationState, Color, ColorSupport, Outcome, SpinnerTemplate, StyleAttribs,
            Theme, apply_style, column_color, tick_color};

/// Number of filled columns for `current` out of `total` in a bar `width` columns
/// wide, rounded down. Never more than `width`, and zero when `total` is zero.
///
/// Integer math keeps exact ratios exact, eg 29 of 100 fills 29 columns of 100.
#[must_use]
pub fn filled_columns(current: u64, total: u64, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let filled = u128::from(current.min(total)) * width as u128 / u128::from(total);
    usize::try_from(filled).unwrap_or(width).min(width)
}

/// Just the bar glyphs, without brackets. Consecutive columns that share a color are
/// emitted as one styled run.
#[must_use]
pub fn render_bar(state: &AnimationState, width: usize, mode: ColorSupport) -> String {
    let filled = state.filled_columns(width);
    let theme = &state.theme;

    let mut acc = String::new();
    let mut run = String::new();
    let mut run_color: Option<Color> = None;

    for column in 0..width {
        let is_filled = column < filled;
        let glyph = if is_filled { theme.filled_glyph } else { theme.empty_glyph };
        let color = column_color(&state.effect, theme, column, width, is_filled);

        if run_color.as_ref() != Some(&color) {
            if let Some(prev) = run_color.take() {
                acc.push_str(&apply_style(&run, StyleAttribs::default(), Some(&prev), None, mode));
                run.clear();
            }
            run_color = Some(color);
        }
        run.push(glyph);
    }

    if let Some(prev) = run_color {
        acc.push_str(&apply_style(&run, StyleAttribs::default(), Some(&prev), None, mode));
    }

    acc
}

/// `{label} [{bar}] {percent}%`. The label and its trailing space are omitted when the
/// label is empty. The percent is right aligned to 3 columns.
///
/// ```
/// use termglow::{AnimationState, ColorSupport, Effect, Theme, render_progress_frame};
///
/// let mut state = AnimationState::new(10, "copy", Theme::default(), Effect::None);
/// state.set(5);
/// let frame = render_progress_frame(&state, 10, ColorSupport::NoColor);
/// assert_eq!(frame, "copy [█████░░░░░]  50%");
/// ```
#[must_use]
pub fn render_progress_frame(
    state: &AnimationState,
    width: usize,
    mode: ColorSupport,
) -> String {
    let bar = render_bar(state, width, mode);
    let percent = state.whole_percent();
    match render_label(state, mode) {
        Some(label) => format!("{label} [{bar}] {percent:>3}%"),
        None => format!("[{bar}] {percent:>3}%"),
    }
}

/// `{glyph} {label}`, followed by ` {percent}%` when the state has a non-zero total.
#[must_use]
pub fn render_spinner_frame(
    state: &AnimationState,
    template: SpinnerTemplate,
    tick: usize,
    mode: ColorSupport,
) -> String {
    let color = tick_color(&state.effect, &state.theme, tick, template.glyphs().len());
    let glyph = apply_style(
        template.glyph_for_tick(tick),
        StyleAttribs::default(),
        Some(&color),
        None,
        mode,
    );

    let mut acc = glyph;
    if let Some(label) = render_label(state, mode) {
        acc.push(' ');
        acc.push_str(&label);
    }
    if state.total() > 0 {
        // Writing to a String can't fail.
        _ = write!(acc, " {:>3}%", state.whole_percent());
    }
    acc
}

/// `{icon} {message}`, with the icon colored by outcome.
#[must_use]
pub fn render_final_line(
    theme: &Theme,
    outcome: Outcome,
    message: &str,
    mode: ColorSupport,
) -> String {
    let mut icon_buffer = [0_u8; 4];
    let icon = theme.outcome_icon(outcome).encode_utf8(&mut icon_buffer);
    let icon = apply_style(
        icon,
        StyleAttribs::default(),
        Some(theme.outcome_color(outcome)),
        None,
        mode,
    );
    if message.is_empty() {
        icon
    } else {
        format!("{icon} {message}")
    }
}

fn render_label(state: &AnimationState, mode: ColorSupport) -> Option<String> {
    let label = state.label();
    if label.is_empty() {
        return None;
    }
    Some(apply_style(label, state.theme.label_attribs, None, None, mode))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{BasicColor, Effect, strip_escapes, visible_width};

    fn state(total: u64, current: u64, label: &str, effect: Effect) -> AnimationState {
        let mut it = AnimationState::new(total, label, Theme::default(), effect);
        it.set(current);
        it
    }

    #[test_case(0, 10, 10, 0)]
    #[test_case(5, 10, 10, 5)]
    #[test_case(999, 1000, 10, 9)]
    #[test_case(100, 100, 20, 20)]
    #[test_case(150, 100, 20, 20)]
    #[test_case(5, 10, 0, 0)]
    #[test_case(3, 0, 10, 0)]
    #[test_case(u64::MAX - 1, u64::MAX, 100, 99)]
    fn test_filled_columns(current: u64, total: u64, width: usize, expected: usize) {
        assert_eq!(filled_columns(current, total, width), expected);
    }

    #[test]
    fn test_exact_ratios_are_not_rounded_down() {
        for current in 0..=100_u64 {
            let it = state(100, current, "", Effect::None);
            let frame = render_progress_frame(&it, 100, ColorSupport::NoColor);
            let expected_filled = usize::try_from(current).unwrap();

            assert_eq!(u64::from(it.whole_percent()), current);
            assert_eq!(frame.matches('█').count(), expected_filled);
            assert_eq!(frame.matches('░').count(), 100 - expected_filled);
            assert!(frame.ends_with(&format!("] {current:>3}%")));
        }
    }

    #[test]
    fn test_progress_frame_no_color() {
        let it = state(10, 5, "copy", Effect::None);
        assert_eq!(
            render_progress_frame(&it, 10, ColorSupport::NoColor),
            "copy [█████░░░░░]  50%"
        );
    }

    #[test]
    fn test_progress_frame_without_label() {
        let it = state(4, 4, "", Effect::None);
        assert_eq!(render_progress_frame(&it, 4, ColorSupport::NoColor), "[████] 100%");
    }

    #[test]
    fn test_progress_frame_groups_runs_of_the_same_color() {
        let it = state(10, 5, "", Effect::None);
        let frame = render_progress_frame(&it, 10, ColorSupport::Truecolor);
        assert_eq!(
            frame,
            "[\x1b[38;2;18;194;233m█████\x1b[0m\x1b[38;5;240m░░░░░\x1b[0m]  50%"
        );
    }

    #[test]
    fn test_progress_frame_with_effects_keeps_visible_width() {
        for effect in [
            Effect::Rainbow,
            Effect::Glow,
            Effect::Gradient {
                from: BasicColor::Red.into(),
                to: BasicColor::Blue.into(),
            },
        ] {
            let it = state(100, 35, "job", effect);
            let frame = render_progress_frame(&it, 20, ColorSupport::Truecolor);
            assert_eq!(visible_width(&frame), "job [".len() + 20 + "]  35%".len());
            assert_eq!(strip_escapes(&frame).matches('█').count(), 7);
        }
    }

    #[test]
    fn test_rainbow_colors_each_column() {
        let it = state(7, 7, "", Effect::Rainbow);
        let bar = render_bar(&it, 7, ColorSupport::Truecolor);
        assert_eq!(bar.matches("\x1b[0m").count(), 7);
    }

    #[test]
    fn test_spinner_frame() {
        let indeterminate = state(0, 0, "loading", Effect::None);
        assert_eq!(
            render_spinner_frame(&indeterminate, SpinnerTemplate::Block, 1, ColorSupport::NoColor),
            "▓ loading"
        );

        let determinate = state(8, 2, "loading", Effect::None);
        assert_eq!(
            render_spinner_frame(&determinate, SpinnerTemplate::Block, 0, ColorSupport::NoColor),
            "█ loading  25%"
        );
    }

    #[test]
    fn test_final_line() {
        let theme = Theme::default();
        assert_eq!(
            render_final_line(&theme, Outcome::Success, "Done", ColorSupport::NoColor),
            "✔ Done"
        );
        assert_eq!(
            render_final_line(&theme, Outcome::Failure, "", ColorSupport::NoColor),
            "✖"
        );
        assert_eq!(
            render_final_line(&theme, Outcome::Failure, "oops", ColorSupport::Ansi16),
            "\x1b[91m✖\x1b[0m oops"
        );
    }
}
