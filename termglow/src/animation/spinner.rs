// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::{Arc, MutexGuard, PoisonError},
          time::{Duration, Instant}};

use tokio::{runtime::Handle,
            sync::mpsc::{self, error::TrySendError},
            task::JoinHandle,
            time::MissedTickBehavior};

use crate::{AnimationPhase, AnimationState, ColorSupportDetector, ERROR_CHANNEL_CAPACITY,
            Effect, OutputDevice, Outcome, SpinnerConfig, SpinnerTemplate, StdMutex,
            TermGlowError, TermGlowResult, Theme, clear_line, ok, print_final_line,
            print_frame, render_final_line, render_spinner_frame};

/// [`tokio::time::interval`] rejects a zero period.
const MIN_TICK_DELAY: Duration = Duration::from_millis(1);

/// State shared between the [`Spinner`] handle and its ticking task.
#[derive(Debug)]
struct SpinnerShared {
    state: AnimationState,
    /// Number of frames painted by the task so far.
    tick: usize,
}

type SafeSpinnerShared = Arc<StdMutex<SpinnerShared>>;

fn lock_shared(shared: &SafeSpinnerShared) -> MutexGuard<'_, SpinnerShared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A spinner that repaints itself from a background tokio task every
/// [`SpinnerConfig::tick_delay`], until it is stopped.
///
/// The task is the only thing that advances the glyph. Each tick it locks the shared
/// state, renders a frame, unlocks, and then writes the frame. Errors from those writes
/// can't be returned to anyone, so they go into a bounded channel; see
/// [`Self::take_error_receiver()`].
///
/// # Lifecycle
///
/// 1. [`Self::start()`] (or the first [`Self::set()`] / [`Self::add()`]) spawns the
///    task. It must be called from inside a tokio runtime.
/// 2. [`Self::stop()`] or [`Self::fail()`] signals the task, waits for it to exit, and
///    then writes one completion line. Once they return, no more frames are written.
/// 3. [`Self::close()`] does the same without a completion line.
/// 4. Dropping a running spinner aborts the task.
///
/// Stopping twice, or stopping a spinner that never started, does nothing.
///
/// # Example
///
/// ```no_run
/// use std::{sync::Arc, time::Duration};
/// use termglow::{ColorSupportDetector, OutputDevice, Spinner, SpinnerConfig};
///
/// # async fn example() -> termglow::TermGlowResult<()> {
/// let mut spinner = Spinner::new(
///     SpinnerConfig::default()
///         .with_label("Fetching")
///         .with_tick_delay(Duration::from_millis(100)),
///     Arc::new(ColorSupportDetector::new()),
///     OutputDevice::new_stderr(),
/// );
/// spinner.start()?;
/// // Some work happens here...
/// spinner.stop("Fetched").await?;
/// # Ok(())
/// # }
/// ```
#[allow(missing_debug_implementations)]
pub struct Spinner {
    tick_delay: Duration,
    template: SpinnerTemplate,
    shared: SafeSpinnerShared,
    detector: Arc<ColorSupportDetector>,
    output_device: OutputDevice,
    /// Taken exactly once, by the first stop.
    shutdown_sender: Option<mpsc::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
    error_sender: mpsc::Sender<TermGlowError>,
    maybe_error_receiver: Option<mpsc::Receiver<TermGlowError>>,
}

impl Spinner {
    #[must_use]
    pub fn new(
        config: SpinnerConfig,
        detector: Arc<ColorSupportDetector>,
        output_device: OutputDevice,
    ) -> Self {
        let SpinnerConfig {
            tick_delay,
            template,
            label,
            total,
            theme,
            effect,
        } = config;
        let (error_sender, error_receiver) = mpsc::channel(ERROR_CHANNEL_CAPACITY);
        Self {
            tick_delay: tick_delay.max(MIN_TICK_DELAY),
            template,
            shared: Arc::new(StdMutex::new(SpinnerShared {
                state: AnimationState::new(total, &label, theme, effect),
                tick: 0,
            })),
            detector,
            output_device,
            shutdown_sender: None,
            task_handle: None,
            error_sender,
            maybe_error_receiver: Some(error_receiver),
        }
    }

    /// Spawns the ticking task. Calling it again, or after the spinner has finished,
    /// does nothing.
    ///
    /// # Errors
    ///
    /// [`TermGlowError::NoAsyncRuntime`] if called outside a tokio runtime. The spinner
    /// stays idle in that case.
    pub fn start(&mut self) -> TermGlowResult<()> {
        if self.phase() != AnimationPhase::Idle {
            return ok!();
        }

        let runtime = Handle::try_current().map_err(|_| TermGlowError::NoAsyncRuntime)?;

        if !lock_shared(&self.shared).state.start_at(Instant::now()) {
            return ok!();
        }

        let (shutdown_sender, shutdown_receiver) = mpsc::channel::<()>(1);
        self.shutdown_sender = Some(shutdown_sender);

        let tick_loop = TickLoop {
            tick_delay: self.tick_delay,
            template: self.template,
            shared: self.shared.clone(),
            detector: self.detector.clone(),
            output_device: self.output_device.clone(),
            error_sender: self.error_sender.clone(),
        };
        self.task_handle = Some(runtime.spawn(tick_loop.run(shutdown_receiver)));

        tracing::debug!(
            message = "spinner started",
            tick_delay = ?self.tick_delay,
            template = ?self.template
        );
        ok!()
    }

    /// Sets the progress value and repaints right away, starting the spinner if needed.
    ///
    /// # Errors
    ///
    /// [`TermGlowError::NoAsyncRuntime`] if this has to start the spinner outside a
    /// runtime, or [`TermGlowError::SinkWrite`] if the frame can't be written.
    pub fn set(&mut self, value: u64) -> TermGlowResult<()> {
        self.update(|state| state.set(value))
    }

    /// Like [`Self::set()`], relative to the current value. `delta` may be negative.
    ///
    /// # Errors
    ///
    /// See [`Self::set()`].
    pub fn add(&mut self, delta: i64) -> TermGlowResult<()> {
        self.update(|state| state.add(delta))
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn set_label(&self, label: &str) -> TermGlowResult<()> {
        lock_shared(&self.shared).state.set_label(label);
        self.render_if_running()
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn set_theme(&self, theme: Theme) -> TermGlowResult<()> {
        lock_shared(&self.shared).state.theme = theme;
        self.render_if_running()
    }

    /// # Errors
    ///
    /// Returns an error if the frame can't be written.
    pub fn set_effect(&self, effect: Effect) -> TermGlowResult<()> {
        lock_shared(&self.shared).state.effect = effect;
        self.render_if_running()
    }

    /// Stops the task and writes the success line with `message`.
    ///
    /// # Errors
    ///
    /// [`TermGlowError::TaskJoin`] if the task panicked, or
    /// [`TermGlowError::SinkWrite`] if the line can't be written.
    pub async fn stop(&mut self, message: &str) -> TermGlowResult<()> {
        self.end(Outcome::Success, message).await
    }

    /// Stops the task and writes the failure line with `message`.
    ///
    /// # Errors
    ///
    /// See [`Self::stop()`].
    pub async fn fail(&mut self, message: &str) -> TermGlowResult<()> {
        self.end(Outcome::Failure, message).await
    }

    /// Stops the task and erases the spinner line, without a completion line.
    ///
    /// # Errors
    ///
    /// See [`Self::stop()`].
    pub async fn close(&mut self) -> TermGlowResult<()> {
        if !lock_shared(&self.shared).state.close() {
            return ok!();
        }
        self.shutdown_task().await?;
        clear_line(&self.output_device)?;
        tracing::debug!(message = "spinner closed");
        ok!()
    }

    /// The receiving end of the channel that collects write errors from the ticking
    /// task. It holds at most [`ERROR_CHANNEL_CAPACITY`] errors; newer ones are dropped
    /// while it is full. Returns [`None`] after the first call.
    pub fn take_error_receiver(&mut self) -> Option<mpsc::Receiver<TermGlowError>> {
        self.maybe_error_receiver.take()
    }

    /// Number of frames painted by the ticking task.
    #[must_use]
    pub fn tick_count(&self) -> usize { lock_shared(&self.shared).tick }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase { lock_shared(&self.shared).state.phase() }

    #[must_use]
    pub fn current(&self) -> u64 { lock_shared(&self.shared).state.current() }

    #[must_use]
    pub fn percent(&self) -> f64 { lock_shared(&self.shared).state.percent() }

    #[must_use]
    pub fn elapsed(&self) -> Duration { lock_shared(&self.shared).state.elapsed() }

    #[must_use]
    pub fn eta(&self) -> Duration { lock_shared(&self.shared).state.eta() }

    /// The frame as it would be painted now, without advancing the glyph.
    #[must_use]
    pub fn current_frame(&self) -> String {
        let mode = self.detector.get_mode();
        let shared = lock_shared(&self.shared);
        render_spinner_frame(&shared.state, self.template, shared.tick, mode)
    }

    fn update(&mut self, apply: impl FnOnce(&mut AnimationState) -> bool) -> TermGlowResult<()> {
        if self.phase() == AnimationPhase::Idle {
            self.start()?;
        }
        let mode = self.detector.get_mode();
        let frame = {
            let mut shared = lock_shared(&self.shared);
            if !apply(&mut shared.state) {
                return ok!();
            }
            render_spinner_frame(&shared.state, self.template, shared.tick, mode)
        };
        print_frame(&self.output_device, &frame)?;
        ok!()
    }

    fn render_if_running(&self) -> TermGlowResult<()> {
        let mode = self.detector.get_mode();
        let frame = {
            let shared = lock_shared(&self.shared);
            if !shared.state.is_running() {
                return ok!();
            }
            render_spinner_frame(&shared.state, self.template, shared.tick, mode)
        };
        print_frame(&self.output_device, &frame)?;
        ok!()
    }

    async fn end(&mut self, outcome: Outcome, message: &str) -> TermGlowResult<()> {
        let theme = {
            let mut shared = lock_shared(&self.shared);
            if !shared.state.finish(outcome) {
                return ok!();
            }
            shared.state.theme.clone()
        };

        self.shutdown_task().await?;

        let line = render_final_line(&theme, outcome, message, self.detector.get_mode());
        print_final_line(&self.output_device, &line)?;
        tracing::debug!(message = "spinner finished", ?outcome, ticks = self.tick_count());
        ok!()
    }

    /// Signals the task and waits for it to exit.
    async fn shutdown_task(&mut self) -> TermGlowResult<()> {
        if let Some(shutdown_sender) = self.shutdown_sender.take() {
            // Single slot and sent at most once, so it is never full.
            _ = shutdown_sender.try_send(());
        }
        if let Some(task_handle) = self.task_handle.take() {
            task_handle.await?;
        }
        ok!()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(task_handle) = self.task_handle.take() {
            task_handle.abort();
        }
    }
}

/// Everything the ticking task owns.
struct TickLoop {
    tick_delay: Duration,
    template: SpinnerTemplate,
    shared: SafeSpinnerShared,
    detector: Arc<ColorSupportDetector>,
    output_device: OutputDevice,
    error_sender: mpsc::Sender<TermGlowError>,
}

impl TickLoop {
    async fn run(self, mut shutdown_receiver: mpsc::Receiver<()>) {
        let mut interval = tokio::time::interval(self.tick_delay);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                // Poll shutdown channel. A dropped sender also ends the loop.
                _ = shutdown_receiver.recv() => {
                    break;
                }

                // Poll interval.
                _ = interval.tick() => {
                    let Some(frame) = self.next_frame() else {
                        break;
                    };
                    if let Err(error) = print_frame(&self.output_device, &frame) {
                        self.report_error(error.into());
                    }
                }
            }
        }

        tracing::debug!(message = "spinner task exited");
    }

    /// Renders the next frame and advances the tick, or returns [`None`] once the
    /// spinner is no longer running.
    fn next_frame(&self) -> Option<String> {
        let mode = self.detector.get_mode();
        let mut shared = lock_shared(&self.shared);
        if !shared.state.is_running() {
            return None;
        }
        let tick = shared.tick;
        shared.tick = tick.wrapping_add(1);
        tracing::trace!(message = "spinner tick", tick);
        Some(render_spinner_frame(&shared.state, self.template, tick, mode))
    }

    fn report_error(&self, error: TermGlowError) {
        match self.error_sender.try_send(error) {
            Ok(()) | Err(TrySendError::Closed(_)) => {}
            Err(TrySendError::Full(error)) => {
                tracing::debug!(message = "spinner error channel full, dropping", %error);
            }
        }
    }
}
