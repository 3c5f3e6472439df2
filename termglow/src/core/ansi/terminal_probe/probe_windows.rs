// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Windows implementation using Crossterm.
//!
//! Legacy Windows consoles only interpret escape sequences once
//! `ENABLE_VIRTUAL_TERMINAL_PROCESSING` is set on the console mode. We delegate to
//! [`crossterm::ansi_support::supports_ansi()`] which attempts exactly that (once per
//! process) and reports whether it worked.

use std::io::IsTerminal;

use crate::{EscapeProcessing, Stream};

pub fn is_terminal(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

pub fn enable_escape_processing(_stream: Stream) -> EscapeProcessing {
    if crossterm::ansi_support::supports_ansi() {
        EscapeProcessing::Enabled
    } else {
        EscapeProcessing::Failed
    }
}
