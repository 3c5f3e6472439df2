// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence generation, the color model, and color support detection.

// Attach sources.
pub mod color;
pub mod color_support;
pub mod detect_color_support;
pub mod env_source;
pub mod sgr_code;
pub mod terminal_probe;

// Re-export.
pub use color::*;
pub use color_support::*;
pub use detect_color_support::*;
pub use env_source::*;
pub use sgr_code::*;
pub use terminal_probe::*;
