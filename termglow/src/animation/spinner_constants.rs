// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DELAY_MS: u64 = 85;
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(DELAY_MS);

/// Errors from the spinner task that the caller hasn't drained yet. Once full, newer
/// errors are dropped.
pub const ERROR_CHANNEL_CAPACITY: usize = 16;

/// More info: <https://www.unicode.org/charts/script/chart_Braille.html>
pub const BRAILLE_DOTS: [&str; 34] = [
    "⠁", "⠃", "⡇", "⠇", "⡎", "⢟", "⡯", "⡗", "⡞", "⡟", "⡷", "⡾", "⡾", "⣕", "⣗", "⣝", "⡣",
    "⡮", "⡯", "⡳", "⡵", "⣞", "⣟", "⣧", "⣮", "⣯", "⣷", "⣿", "⣼", "⡟", "⡏", "⠇", "⠃", "⠁",
];

pub const BLOCK_DOTS: [&str; 8] = ["█", "▓", "▒", "░", "░", "▒", "▓", "█"];

pub const CIRCLE_DOTS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinnerTemplate {
    #[default]
    Braille,
    Block,
    Dots,
}

impl SpinnerTemplate {
    #[must_use]
    pub fn glyphs(self) -> &'static [&'static str] {
        match self {
            SpinnerTemplate::Braille => &BRAILLE_DOTS,
            SpinnerTemplate::Block => &BLOCK_DOTS,
            SpinnerTemplate::Dots => &CIRCLE_DOTS,
        }
    }

    /// Translate the tick count into a glyph, wrapping around.
    #[must_use]
    pub fn glyph_for_tick(self, tick: usize) -> &'static str {
        let glyphs = self.glyphs();
        glyphs[tick % glyphs.len()]
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(SpinnerTemplate::Braille, 0, "⠁")]
    #[test_case(SpinnerTemplate::Braille, 34, "⠁")]
    #[test_case(SpinnerTemplate::Braille, 35, "⠃")]
    #[test_case(SpinnerTemplate::Block, 3, "░")]
    #[test_case(SpinnerTemplate::Block, 9, "▓")]
    #[test_case(SpinnerTemplate::Dots, 10, "⠋")]
    fn test_glyph_for_tick_wraps(template: SpinnerTemplate, tick: usize, expected: &str) {
        assert_eq!(template.glyph_for_tick(tick), expected);
    }

    #[test]
    fn test_template_serde_names() {
        let json = serde_json::to_string(&SpinnerTemplate::Dots).unwrap();
        assert_eq!(json, "\"dots\"");
        let template: SpinnerTemplate = serde_json::from_str("\"block\"").unwrap();
        assert_eq!(template, SpinnerTemplate::Block);
    }
}
