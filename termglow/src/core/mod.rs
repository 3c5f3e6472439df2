// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Leaf modules that the animation engine is built on: the color model, the style
//! compositor, color support detection, the output device abstraction, logging, and
//! test fixtures.

// Attach sources.
pub mod ansi;
pub mod common;
pub mod log;
pub mod style;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use log::*;
pub use style::*;
pub use terminal_io::*;
pub use test_fixtures::*;
