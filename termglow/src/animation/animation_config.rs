// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_TICK_DELAY, Effect, SpinnerTemplate, TermGlowError, TermGlowResult,
            Theme};

pub const DEFAULT_BAR_WIDTH: usize = 40;
pub const DEFAULT_BAR_TOTAL: u64 = 100;

/// Settings for a [`crate::ProgressBar`].
///
/// ```
/// use termglow::{Effect, ProgressBarConfig};
///
/// let config = ProgressBarConfig::try_from_json_str(
///     r#"{ "total": 250, "label": "upload", "effect": { "kind": "rainbow" } }"#,
/// )
/// .unwrap();
/// assert_eq!(config.total, 250);
/// assert_eq!(config.width, 40);
/// assert_eq!(config.effect, Effect::Rainbow);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarConfig {
    pub total: u64,
    /// Number of columns between the brackets.
    pub width: usize,
    pub label: String,
    pub theme: Theme,
    pub effect: Effect,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            total: DEFAULT_BAR_TOTAL,
            width: DEFAULT_BAR_WIDTH,
            label: String::new(),
            theme: Theme::default(),
            effect: Effect::None,
        }
    }
}

impl ProgressBarConfig {
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// # Errors
    ///
    /// [`TermGlowError::ConfigParse`] if `json` is malformed or has mistyped fields.
    pub fn try_from_json_str(json: &str) -> TermGlowResult<Self> {
        serde_json::from_str(json).map_err(TermGlowError::ConfigParse)
    }
}

/// Settings for a [`crate::Spinner`]. A `total` of zero makes the spinner
/// indeterminate, ie no percent is shown.
///
/// The tick delay is (de)serialized as whole milliseconds under `tick_delay_ms`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    #[serde(rename = "tick_delay_ms", with = "duration_as_millis")]
    pub tick_delay: Duration,
    pub template: SpinnerTemplate,
    pub label: String,
    pub total: u64,
    pub theme: Theme,
    pub effect: Effect,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            tick_delay: DEFAULT_TICK_DELAY,
            template: SpinnerTemplate::default(),
            label: String::new(),
            total: 0,
            theme: Theme::default(),
            effect: Effect::None,
        }
    }
}

impl SpinnerConfig {
    #[must_use]
    pub fn with_tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: SpinnerTemplate) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// # Errors
    ///
    /// [`TermGlowError::ConfigParse`] if `json` is malformed or has mistyped fields.
    pub fn try_from_json_str(json: &str) -> TermGlowResult<Self> {
        serde_json::from_str(json).map_err(TermGlowError::ConfigParse)
    }
}

mod duration_as_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
