// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # termglow
//!
//! Terminal color capability detection, adaptive ANSI styling, and a small animation
//! engine (spinner and progress bar) that degrades gracefully on any output stream.
//!
//! The crate is organized leaves first:
//!
//! 1. [`core::ansi::color`] holds the color model: a [`Color`] is rendered to an SGR
//!    escape sequence for a given [`ColorSupport`] mode, downsampling truecolor to the
//!    256 color cube, the grayscale ramp, or the 16 basic colors as needed.
//! 2. [`core::style`] composes attributes and colors into a final string, and measures,
//!    strips, pads, and centers text that contains escape sequences.
//! 3. [`core::ansi::detect_color_support`] decides once per output stream which
//!    [`ColorSupport`] mode is available, based on the environment and a platform
//!    [`TerminalProbe`].
//! 4. [`animation`] contains the [`ProgressBar`] (synchronous, value driven) and the
//!    [`Spinner`] (a cancellable tokio task ticking at a fixed interval).
//!
//! # Example
//!
//! ```no_run
//! use termglow::{ColorSupportDetector, ProgressBar, ProgressBarConfig, OutputDevice};
//! use std::sync::Arc;
//!
//! # fn main() -> termglow::TermGlowResult<()> {
//! let detector = Arc::new(ColorSupportDetector::new());
//! let mut bar = ProgressBar::new(
//!     ProgressBarConfig::default().with_total(10).with_label("copying"),
//!     detector,
//!     OutputDevice::new_stderr(),
//! );
//! for _ in 0..10 {
//!     bar.add(1)?;
//! }
//! bar.complete("copied 10 files")?;
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod animation;
pub mod core;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use animation::*;
#[allow(ambiguous_glob_reexports)]
pub use core::*;
