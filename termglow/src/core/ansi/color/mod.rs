// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Primitive types**: [`BasicColor`] (the 16 named terminal colors), [`AnsiValue`]
//!   (256-color palette index), and [`RgbValue`] (24-bit truecolor)
//! - **Abstraction**: [`TransformColor`] trait for converting between representations
//! - **Wrapper type**: [`Color`] which tags one of the above with an optional name, and
//!   renders itself to an escape sequence for a given [`ColorSupport`]
//! - **Conversion logic**: RGB to 256-color cube / grayscale ramp, and nearest of the 16
//!   basic colors, both by Euclidean RGB distance
//!
//! [`ColorSupport`]: crate::ColorSupport

// Attach.
mod ansi_value;
mod basic_color;
mod color_value;
mod convert;
mod rgb_value;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use basic_color::*;
pub use color_value::*;
pub use convert::*;
pub use rgb_value::*;
pub use transform_color::*;
