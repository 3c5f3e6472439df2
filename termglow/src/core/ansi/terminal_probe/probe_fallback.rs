// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platforms that are neither unix nor windows (eg wasm). There is no terminal to
//! speak of, so detection always falls through to no color.

use crate::{EscapeProcessing, Stream};

pub fn is_terminal(_stream: Stream) -> bool { false }

pub fn enable_escape_processing(_stream: Stream) -> EscapeProcessing {
    EscapeProcessing::Failed
}
