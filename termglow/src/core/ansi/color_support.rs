// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The output stream to check for color support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// The result of the color support check. The variants are declared from least to most
/// capable, so `mode >= ColorSupport::Ansi256` reads as "supports at least 256 colors".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum ColorSupport {
    NoColor,
    Ansi16,
    Ansi256,
    Truecolor,
}
