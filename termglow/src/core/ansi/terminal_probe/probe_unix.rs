// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix implementation. Every unix terminal interprets escape sequences natively.

use std::io::IsTerminal;

use crate::{EscapeProcessing, Stream};

pub fn is_terminal(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

pub fn enable_escape_processing(_stream: Stream) -> EscapeProcessing {
    EscapeProcessing::NotRequired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_processing_is_never_required() {
        assert_eq!(
            enable_escape_processing(Stream::Stdout),
            EscapeProcessing::NotRequired
        );
        assert_eq!(
            enable_escape_processing(Stream::Stderr),
            EscapeProcessing::NotRequired
        );
    }
}
