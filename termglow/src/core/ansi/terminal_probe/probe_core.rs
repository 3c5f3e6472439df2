// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Stream;

#[cfg(not(any(unix, windows)))]
use super::probe_fallback as platform;
#[cfg(unix)]
use super::probe_unix as platform;
#[cfg(windows)]
use super::probe_windows as platform;

/// Outcome of asking the platform to turn on escape sequence processing for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeProcessing {
    /// The platform interprets escape sequences without any setup (eg all unix
    /// terminals).
    NotRequired,
    /// Processing had to be switched on explicitly, and that worked.
    Enabled,
    /// Processing had to be switched on explicitly, and that failed.
    Failed,
}

/// The two platform specific operations that color support detection depends on.
pub trait TerminalProbe: Send + Sync {
    /// Is `stream` connected to an interactive terminal (as opposed to a file or pipe)?
    fn is_terminal(&self, stream: Stream) -> bool;

    /// Attempt to switch on escape sequence processing for `stream`.
    fn enable_escape_processing(&self, stream: Stream) -> EscapeProcessing;
}

/// The [`TerminalProbe`] for the platform this crate was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformProbe;

impl TerminalProbe for PlatformProbe {
    fn is_terminal(&self, stream: Stream) -> bool { platform::is_terminal(stream) }

    fn enable_escape_processing(&self, stream: Stream) -> EscapeProcessing {
        platform::enable_escape_processing(stream)
    }
}
