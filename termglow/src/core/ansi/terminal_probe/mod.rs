// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform probing for color support detection.
//!
//! Detection needs exactly two things from the platform: whether a stream is an
//! interactive terminal, and (on legacy consoles) whether escape sequence processing can
//! be switched on. [`TerminalProbe`] captures these two operations. Each platform family
//! supplies one implementation, selected at build time, and [`PlatformProbe`] dispatches
//! to it. The detection algorithm itself lives in [`crate::detect_color_support`] and is
//! shared by every platform.

// Private modules (hide internal structure).
mod probe_core;

#[cfg(unix)]
mod probe_unix;

#[cfg(windows)]
mod probe_windows;

#[cfg(not(any(unix, windows)))]
mod probe_fallback;

// Re-export the public API (flat, ergonomic surface).
pub use probe_core::*;
