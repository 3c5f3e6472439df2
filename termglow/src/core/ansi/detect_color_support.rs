// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Terminal color support detection
//!
//! [`ColorSupportDetector`] decides once which [`ColorSupport`] mode an output stream
//! has, and caches the answer for its own lifetime. There is no process global state:
//! the detector is an owned value, which you share (eg in an [`Arc`]) with everything
//! that renders to that stream.
//!
//! ## Detection rules
//!
//! [`examine_env_to_determine_color_support()`] applies these rules in order, and the
//! first one that matches wins:
//!
//! 1. `NO_COLOR` is set to a non-empty value, or `TERM` is `dumb` → no color.
//! 2. The stream is not an interactive terminal → no color.
//! 3. A CI indicator is present and `FORCE_COLOR` is empty or unset → no color.
//! 4. `COLORTERM` is `truecolor` or `24bit` → truecolor.
//! 5. `TERM` contains `256` → 256 colors.
//! 6. `TERM` contains one of the [`ANSI_TERM_FAMILIES`] → 16 colors.
//! 7. The platform needs escape processing switched on (legacy Windows consoles): if
//!    that works → 16 colors, otherwise → no color.
//! 8. Otherwise → no color.
//!
//! Detection never fails. Anything ambiguous degrades to [`ColorSupport::NoColor`].
//!
//! ## Cache invalidation
//!
//! The cached mode is only replaced by [`ColorSupportDetector::force_mode()`], and only
//! cleared by [`ColorSupportDetector::set_output()`].

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use strum_macros::Display;

use crate::{ColorSupport, EnvSource, EscapeProcessing, PlatformProbe, ProcessEnv,
            Stream, TerminalProbe};

/// Substrings of `TERM` that identify terminals capable of the 16 basic colors.
pub const ANSI_TERM_FAMILIES: [&str; 14] = [
    "xterm", "screen", "tmux", "vt100", "vt220", "rxvt", "color", "ansi", "cygwin",
    "linux", "konsole", "alacritty", "kitty", "vscode",
];

/// Which detection rule decided the mode. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DetectionRule {
    NoColorEnv,
    DumbTerm,
    NotATerminal,
    CiWithoutForceColor,
    ColorTermTruecolor,
    Term256,
    TermAnsiFamily,
    EscapeProcessingEnabled,
    EscapeProcessingFailed,
    Fallback,
}

/// Applies the detection rules (see the [module docs](self)) to the given environment
/// and platform probe. This always does the work; use [`ColorSupportDetector`] to run it
/// once and cache the result.
#[must_use]
pub fn examine_env_to_determine_color_support(
    env: &dyn EnvSource,
    probe: &dyn TerminalProbe,
    stream: Stream,
) -> (ColorSupport, DetectionRule) {
    if env.non_empty_var("NO_COLOR").is_some() {
        return (ColorSupport::NoColor, DetectionRule::NoColorEnv);
    }

    let term = env.var("TERM").unwrap_or_default().to_lowercase();
    if term == "dumb" {
        return (ColorSupport::NoColor, DetectionRule::DumbTerm);
    }

    if !probe.is_terminal(stream) {
        return (ColorSupport::NoColor, DetectionRule::NotATerminal);
    }

    if env.is_ci() && env.non_empty_var("FORCE_COLOR").is_none() {
        return (ColorSupport::NoColor, DetectionRule::CiWithoutForceColor);
    }

    if env.var("COLORTERM").is_some_and(|it| {
        it.eq_ignore_ascii_case("truecolor") || it.eq_ignore_ascii_case("24bit")
    }) {
        return (ColorSupport::Truecolor, DetectionRule::ColorTermTruecolor);
    }

    if term.contains("256") {
        return (ColorSupport::Ansi256, DetectionRule::Term256);
    }

    if ANSI_TERM_FAMILIES.iter().any(|family| term.contains(family)) {
        return (ColorSupport::Ansi16, DetectionRule::TermAnsiFamily);
    }

    match probe.enable_escape_processing(stream) {
        EscapeProcessing::Enabled => {
            (ColorSupport::Ansi16, DetectionRule::EscapeProcessingEnabled)
        }
        EscapeProcessing::Failed => {
            (ColorSupport::NoColor, DetectionRule::EscapeProcessingFailed)
        }
        EscapeProcessing::NotRequired => (ColorSupport::NoColor, DetectionRule::Fallback),
    }
}

struct DetectorState {
    stream: Stream,
    cache: OnceLock<ColorSupport>,
}

/// Owns the cached [`ColorSupport`] for one output stream.
///
/// The stream and its cache live behind a single [`RwLock`]: [`Self::get_mode()`] takes
/// the read side, so concurrent first callers all reach the same [`OnceLock`], which
/// runs detection exactly once. [`Self::set_output()`] and [`Self::force_mode()`] take
/// the write side, and swap in a fresh cache.
pub struct ColorSupportDetector {
    state: RwLock<DetectorState>,
    env: Arc<dyn EnvSource>,
    probe: Arc<dyn TerminalProbe>,
}

impl std::fmt::Debug for ColorSupportDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ColorSupportDetector")
            .field("stream", &state.stream)
            .field("cached", &state.cache.get())
            .finish_non_exhaustive()
    }
}

impl Default for ColorSupportDetector {
    fn default() -> Self { Self::new() }
}

impl ColorSupportDetector {
    /// Detects against the real process environment, for [`Stream::Stdout`].
    #[must_use]
    pub fn new() -> Self { Self::for_stream(Stream::Stdout) }

    /// Detects against the real process environment, for `stream`.
    #[must_use]
    pub fn for_stream(stream: Stream) -> Self {
        Self::with_sources(Arc::new(ProcessEnv), Arc::new(PlatformProbe), stream)
    }

    #[must_use]
    pub fn with_sources(
        env: Arc<dyn EnvSource>,
        probe: Arc<dyn TerminalProbe>,
        stream: Stream,
    ) -> Self {
        Self {
            state: RwLock::new(DetectorState {
                stream,
                cache: OnceLock::new(),
            }),
            env,
            probe,
        }
    }

    /// The color support of the current output stream. Detection runs on the first
    /// call only.
    pub fn get_mode(&self) -> ColorSupport {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        *state.cache.get_or_init(|| {
            let (mode, rule) = examine_env_to_determine_color_support(
                self.env.as_ref(),
                self.probe.as_ref(),
                state.stream,
            );
            tracing::debug!(
                message = "color support detected",
                stream = ?state.stream,
                %mode,
                %rule
            );
            mode
        })
    }

    /// Overrides detection. Every call to [`Self::get_mode()`] returns `mode` until the
    /// output is changed with [`Self::set_output()`].
    pub fn force_mode(&self, mode: ColorSupport) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.cache = OnceLock::from(mode);
        tracing::debug!(message = "color support forced", %mode);
    }

    /// Switches to a different output stream. The next call to [`Self::get_mode()`]
    /// detects again.
    pub fn set_output(&self, stream: Stream) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.stream = stream;
        state.cache = OnceLock::new();
    }

    pub fn output(&self) -> Stream {
        self.state.read().unwrap_or_else(PoisonError::into_inner).stream
    }

    /// True once a mode has been detected or forced.
    pub fn is_initialized(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cache
            .get()
            .is_some()
    }

    pub fn supports_color(&self) -> bool { self.get_mode() >= ColorSupport::Ansi16 }

    pub fn supports_ansi(&self) -> bool { self.get_mode() >= ColorSupport::Ansi16 }

    pub fn supports_256(&self) -> bool { self.get_mode() >= ColorSupport::Ansi256 }

    pub fn supports_truecolor(&self) -> bool { self.get_mode() >= ColorSupport::Truecolor }
}
