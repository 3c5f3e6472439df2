// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::Arc,
          time::{Duration, Instant}};

use crate::{AnimationPhase, AnimationState, ColorSupportDetector, Effect, OutputDevice,
            Outcome, ProgressBarConfig, TermGlowResult, Theme, ok, print_final_line,
            print_frame, render_final_line, render_progress_frame};

/// A progress bar that repaints synchronously, on the caller's thread, every time its
/// value or presentation changes. There is no background task.
///
/// - The first [`Self::set()`] or [`Self::add()`] starts the bar if
///   [`Self::start()`] wasn't called.
/// - [`Self::complete()`], [`Self::fail()`] and [`Self::finish()`] write one completion
///   line. After that the bar ignores every call. On a bar that never started they do
///   nothing.
/// - Write errors are returned to the caller as [`crate::TermGlowError::SinkWrite`].
#[allow(missing_debug_implementations)]
pub struct ProgressBar {
    state: AnimationState,
    width: usize,
    detector: Arc<ColorSupportDetector>,
    output_device: OutputDevice,
}

impl ProgressBar {
    #[must_use]
    pub fn new(
        config: ProgressBarConfig,
        detector: Arc<ColorSupportDetector>,
        output_device: OutputDevice,
    ) -> Self {
        let ProgressBarConfig {
            total,
            width,
            label,
            theme,
            effect,
        } = config;
        Self {
            state: AnimationState::new(total, &label, theme, effect),
            width,
            detector,
            output_device,
        }
    }

    /// Paints the first frame. Calling it again does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn start(&mut self) -> TermGlowResult<()> {
        if self.begin() {
            self.render()?;
        }
        ok!()
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn set(&mut self, value: u64) -> TermGlowResult<()> {
        self.begin();
        if self.state.set(value) {
            self.render()?;
        }
        ok!()
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn add(&mut self, delta: i64) -> TermGlowResult<()> {
        self.begin();
        if self.state.add(delta) {
            self.render()?;
        }
        ok!()
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn set_label(&mut self, label: &str) -> TermGlowResult<()> {
        self.state.set_label(label);
        self.render_if_running()
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn set_theme(&mut self, theme: Theme) -> TermGlowResult<()> {
        self.state.theme = theme;
        self.render_if_running()
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn set_effect(&mut self, effect: Effect) -> TermGlowResult<()> {
        self.state.effect = effect;
        self.render_if_running()
    }

    /// Fills the bar and writes the success line with `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line can't be written.
    pub fn complete(&mut self, message: &str) -> TermGlowResult<()> {
        self.end(Outcome::Success, message)
    }

    /// Writes the failure line with `message`. The bar keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns an error if the line can't be written.
    pub fn fail(&mut self, message: &str) -> TermGlowResult<()> {
        self.end(Outcome::Failure, message)
    }

    /// [`Self::complete()`] using the label as the message.
    ///
    /// # Errors
    ///
    /// Returns an error if the line can't be written.
    pub fn finish(&mut self) -> TermGlowResult<()> {
        let label = self.state.label().to_string();
        self.end(Outcome::Success, &label)
    }

    #[must_use]
    pub fn current(&self) -> u64 { self.state.current() }

    #[must_use]
    pub fn total(&self) -> u64 { self.state.total() }

    #[must_use]
    pub fn percent(&self) -> f64 { self.state.percent() }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase { self.state.phase() }

    #[must_use]
    pub fn elapsed(&self) -> Duration { self.state.elapsed() }

    #[must_use]
    pub fn eta(&self) -> Duration { self.state.eta() }

    #[must_use]
    pub fn state(&self) -> &AnimationState { &self.state }

    /// The frame as it would be painted now.
    #[must_use]
    pub fn current_frame(&self) -> String {
        render_progress_frame(&self.state, self.width, self.detector.get_mode())
    }

    fn begin(&mut self) -> bool {
        let started = self.state.start_at(Instant::now());
        if started {
            tracing::debug!(
                message = "progress bar started",
                total = self.state.total(),
                label = self.state.label()
            );
        }
        started
    }

    fn end(&mut self, outcome: Outcome, message: &str) -> TermGlowResult<()> {
        if !self.state.finish(outcome) {
            return ok!();
        }
        tracing::debug!(
            message = "progress bar finished",
            ?outcome,
            current = self.state.current(),
            elapsed = ?self.state.elapsed()
        );
        let line =
            render_final_line(&self.state.theme, outcome, message, self.detector.get_mode());
        print_final_line(&self.output_device, &line)?;
        ok!()
    }

    fn render_if_running(&self) -> TermGlowResult<()> {
        if self.state.is_running() {
            self.render()?;
        }
        ok!()
    }

    fn render(&self) -> TermGlowResult<()> {
        print_frame(&self.output_device, &self.current_frame())?;
        ok!()
    }
}
