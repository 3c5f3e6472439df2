// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Composing attributes and colors into styled strings, and measuring text that
//! contains escape sequences.

// Attach sources.
pub mod ansi_styled_text;
pub mod ansi_text;
pub mod style_attribs;

// Re-export.
pub use ansi_styled_text::*;
pub use ansi_text::*;
pub use style_attribs::*;
