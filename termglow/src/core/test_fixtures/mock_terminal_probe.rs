// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicUsize, Ordering}};

use crate::{EscapeProcessing, Stream, TerminalProbe};

/// A [`TerminalProbe`] with canned answers. Clones share the call counter, so a test
/// can hand a clone to a detector and still observe how often it was probed.
#[derive(Debug, Clone)]
pub struct MockTerminalProbe {
    pub is_terminal: bool,
    pub escape_processing: EscapeProcessing,
    is_terminal_calls: Arc<AtomicUsize>,
}

impl MockTerminalProbe {
    /// An interactive terminal that interprets escapes natively.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            escape_processing: EscapeProcessing::NotRequired,
            is_terminal_calls: Arc::default(),
        }
    }

    /// Output redirected to a file or a pipe.
    #[must_use]
    pub fn piped() -> Self {
        Self {
            is_terminal: false,
            ..Self::terminal()
        }
    }

    #[must_use]
    pub fn with_escape_processing(mut self, escape_processing: EscapeProcessing) -> Self {
        self.escape_processing = escape_processing;
        self
    }

    pub fn is_terminal_call_count(&self) -> usize {
        self.is_terminal_calls.load(Ordering::SeqCst)
    }
}

impl TerminalProbe for MockTerminalProbe {
    fn is_terminal(&self, _stream: Stream) -> bool {
        self.is_terminal_calls.fetch_add(1, Ordering::SeqCst);
        self.is_terminal
    }

    fn enable_escape_processing(&self, _stream: Stream) -> EscapeProcessing {
        self.escape_processing
    }
}
